//! Character-level stream scanner with single-character pushback
//!
//! The scanner owns the read cursor over the source text. Callers peek by
//! reading a character and pushing it back; no construct in the entry
//! grammar needs more than one character of lookahead.

use crate::constants::COMMENT_MARKER;

/// Character cursor over bibliography source text
#[derive(Debug)]
pub struct Scanner<'a> {
    chars: std::str::Chars<'a>,
    pushed: Option<char>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner positioned at the start of the input
    pub fn new(input: &'a str) -> Self {
        Self {
            chars: input.chars(),
            pushed: None,
        }
    }

    /// Read the next character, or `None` at end of input
    pub fn next_char(&mut self) -> Option<char> {
        self.pushed.take().or_else(|| self.chars.next())
    }

    /// Push a character back so the next read returns it.
    ///
    /// Only one character may be pending at a time.
    pub fn push_back(&mut self, c: char) {
        debug_assert!(self.pushed.is_none(), "pushback slot already occupied");
        self.pushed = Some(c);
    }

    /// Skip whitespace and line comments, leaving the cursor on the next
    /// significant character.
    ///
    /// A `%` at an inter-token position starts a comment that runs to the
    /// end of the line. Comments are not recognized inside token or value
    /// reads.
    pub fn skip_insignificant(&mut self) {
        while let Some(c) = self.next_char() {
            if c.is_whitespace() {
                continue;
            }
            if c == COMMENT_MARKER {
                while let Some(c) = self.next_char() {
                    if c == '\n' {
                        break;
                    }
                }
                continue;
            }
            self.push_back(c);
            break;
        }
    }
}
