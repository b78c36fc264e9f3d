//! Delimiter-aware token and value reading
//!
//! Two reading modes drive entry parsing: token mode for bare identifiers
//! (entry types, citation keys, field names) and value mode for quote- or
//! brace-delimited field values. Token mode never fails; callers treat an
//! empty result as an unreadable token.

use thiserror::Error;

use crate::constants::{
    BRACE_CLOSE, BRACE_OPEN, ESCAPE_CHAR, QUOTE_DELIMITER, VALUE_BUFFER_CAPACITY,
};

use super::scanner::Scanner;

/// Failure modes for value-mode reads
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueReadError {
    /// The first significant character did not open a value
    #[error("expected '\"' or '{{' to open the value")]
    MissingOpeningDelimiter {
        /// Offending character, if the stream was not already exhausted
        found: Option<char>,
    },

    /// The stream ended before the closing delimiter
    #[error("input ended before the value's closing delimiter")]
    UnterminatedValue,
}

/// Read a bare token, stopping before `terminator` or any whitespace.
///
/// The stopping character is pushed back for the caller. At end of input
/// the accumulated text is returned as-is, which may be empty.
pub fn read_token(scanner: &mut Scanner<'_>, terminator: char) -> String {
    let mut token = String::new();
    while let Some(c) = scanner.next_char() {
        if c == terminator || c.is_whitespace() {
            scanner.push_back(c);
            break;
        }
        token.push(c);
    }
    token
}

/// Read a delimited field value.
///
/// The first character must be `"` or `{`; anything else is pushed back and
/// the read fails. Quoted values end at the first unescaped `"`. Braced
/// values track nesting depth and end when it returns to zero, keeping
/// interior braces in the text. In either form a backslash drops itself and
/// takes the following character literally, so an escaped delimiter never
/// terminates the value. The delimiters themselves are excluded from the
/// result.
pub fn read_value(scanner: &mut Scanner<'_>) -> Result<String, ValueReadError> {
    match scanner.next_char() {
        Some(QUOTE_DELIMITER) => read_quoted(scanner),
        Some(BRACE_OPEN) => read_braced(scanner),
        Some(other) => {
            scanner.push_back(other);
            Err(ValueReadError::MissingOpeningDelimiter { found: Some(other) })
        }
        None => Err(ValueReadError::MissingOpeningDelimiter { found: None }),
    }
}

fn read_quoted(scanner: &mut Scanner<'_>) -> Result<String, ValueReadError> {
    let mut value = String::with_capacity(VALUE_BUFFER_CAPACITY);
    while let Some(c) = scanner.next_char() {
        match c {
            ESCAPE_CHAR => match scanner.next_char() {
                Some(escaped) => value.push(escaped),
                None => return Err(ValueReadError::UnterminatedValue),
            },
            QUOTE_DELIMITER => return Ok(value),
            _ => value.push(c),
        }
    }
    Err(ValueReadError::UnterminatedValue)
}

fn read_braced(scanner: &mut Scanner<'_>) -> Result<String, ValueReadError> {
    let mut value = String::with_capacity(VALUE_BUFFER_CAPACITY);
    let mut depth = 1usize;
    while let Some(c) = scanner.next_char() {
        match c {
            ESCAPE_CHAR => match scanner.next_char() {
                Some(escaped) => value.push(escaped),
                None => return Err(ValueReadError::UnterminatedValue),
            },
            BRACE_OPEN => {
                depth += 1;
                value.push(c);
            }
            BRACE_CLOSE => {
                depth -= 1;
                if depth == 0 {
                    return Ok(value);
                }
                value.push(c);
            }
            _ => value.push(c),
        }
    }
    Err(ValueReadError::UnterminatedValue)
}

/// Collapse embedded line breaks into single separating spaces.
///
/// Leading breaks are dropped and a break never produces a second
/// consecutive space. All other characters pass through untouched,
/// including spaces already doubled in the source.
pub fn normalize_value(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    for c in input.chars() {
        if c == '\n' || c == '\r' {
            if !output.is_empty() && !output.ends_with(' ') {
                output.push(' ');
            }
        } else {
            output.push(c);
        }
    }
    output
}
