//! Single-entry parsing state machine
//!
//! Drives the scanner and value reader to assemble one record per call,
//! recovering from malformed input instead of aborting. Structural failures
//! before the field list discard the whole entry; failures inside a field
//! discard only that field and keep the fields already collected.

use tracing::{debug, warn};

use crate::app::models::Record;
use crate::constants::{BRACE_CLOSE, BRACE_OPEN, ENTRY_MARKER, FIELD_ASSIGN, FIELD_SEPARATOR};

use super::scanner::Scanner;
use super::stats::ParseOutcome;
use super::value_reader::{normalize_value, read_token, read_value};

/// What terminates a recovery skip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipMode {
    /// Skip to the `}` closing the current entry
    ToEntryEnd,
    /// Skip to the next top-level `,` or the `}` closing the entry
    ToFieldBoundary,
}

/// How a recovery skip ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkipStop {
    /// Reached the entry's closing `}`: consumed in entry mode, pushed
    /// back in field mode so the field loop sees it
    EntryClosed,
    /// Reached a top-level `,` in field mode, consumed
    FieldSeparator,
    /// The input ran out first
    EndOfStream,
}

/// Parse one entry from the scanner.
///
/// Each call yields exactly one of: a finalized record, a skipped-entry
/// marker for a malformed entry, or the end-of-stream signal. The scanner
/// is always left positioned for the next call.
pub fn parse_entry(scanner: &mut Scanner<'_>) -> ParseOutcome {
    scanner.skip_insignificant();

    // SeekStart: an entry begins at '@'
    match scanner.next_char() {
        None => return ParseOutcome::EndOfStream,
        Some(ENTRY_MARKER) => {}
        Some(other) => {
            warn!(
                "Expected '{}' to start an entry, found '{}'; scanning ahead",
                ENTRY_MARKER, other
            );
            resync_to_entry_marker(scanner);
            return ParseOutcome::Skipped;
        }
    }

    // ReadType
    scanner.skip_insignificant();
    let entry_type = read_token(scanner, BRACE_OPEN).to_lowercase();
    if entry_type.is_empty() {
        warn!(
            "Could not read an entry type after '{}'; skipping entry",
            ENTRY_MARKER
        );
        // The unread character is the '{' that stopped the token read (or
        // nothing at end of input); consume it so the skip starts inside
        // the entry's braces.
        let _ = scanner.next_char();
        skip_balanced(scanner, SkipMode::ToEntryEnd);
        return ParseOutcome::Skipped;
    }

    // RequireOpenBrace
    scanner.skip_insignificant();
    let c = scanner.next_char();
    if c != Some(BRACE_OPEN) {
        match c {
            Some(other) => {
                warn!(
                    "Expected '{}' after entry type '{}', found '{}'; skipping entry",
                    BRACE_OPEN, entry_type, other
                );
                scanner.push_back(other);
            }
            None => warn!(
                "Expected '{}' after entry type '{}', found end of input",
                BRACE_OPEN, entry_type
            ),
        }
        skip_balanced(scanner, SkipMode::ToEntryEnd);
        return ParseOutcome::Skipped;
    }

    // ReadId
    scanner.skip_insignificant();
    let id = read_token(scanner, FIELD_SEPARATOR);
    if id.is_empty() {
        warn!(
            "Could not read a citation key for entry type '{}'; skipping entry",
            entry_type
        );
        skip_balanced(scanner, SkipMode::ToEntryEnd);
        return ParseOutcome::Skipped;
    }

    let mut record = Record::new(entry_type, id);

    // FieldLoop: one iteration per separator or field
    loop {
        scanner.skip_insignificant();
        let c = match scanner.next_char() {
            Some(c) => c,
            None => {
                warn!("Input ended inside entry '{}'; skipping entry", record.id);
                return ParseOutcome::Skipped;
            }
        };

        if c == BRACE_CLOSE {
            break;
        }

        if c == FIELD_SEPARATOR {
            scanner.skip_insignificant();
            match scanner.next_char() {
                None => {
                    warn!(
                        "Input ended after '{}' inside entry '{}'; skipping entry",
                        FIELD_SEPARATOR, record.id
                    );
                    return ParseOutcome::Skipped;
                }
                // Trailing comma before the closing brace
                Some(BRACE_CLOSE) => break,
                Some(next) => scanner.push_back(next),
            }
            continue;
        }

        scanner.push_back(c);

        let name = read_token(scanner, FIELD_ASSIGN);
        if name.is_empty() {
            warn!(
                "Could not read a field name in entry '{}'; skipping to the next field",
                record.id
            );
            if !recover_field(scanner, &record.id) {
                return ParseOutcome::Skipped;
            }
            continue;
        }

        scanner.skip_insignificant();
        let c = scanner.next_char();
        if c != Some(FIELD_ASSIGN) {
            match c {
                Some(other) => {
                    warn!(
                        "Expected '{}' after field '{}' in entry '{}', found '{}'; skipping to the next field",
                        FIELD_ASSIGN, name, record.id, other
                    );
                    scanner.push_back(other);
                }
                None => warn!(
                    "Expected '{}' after field '{}' in entry '{}', found end of input",
                    FIELD_ASSIGN, name, record.id
                ),
            }
            if !recover_field(scanner, &record.id) {
                return ParseOutcome::Skipped;
            }
            continue;
        }

        scanner.skip_insignificant();
        match read_value(scanner) {
            Ok(raw) => record.insert_field(name, normalize_value(&raw)),
            Err(err) => {
                warn!(
                    "Could not read the value of field '{}' in entry '{}': {}; skipping to the next field",
                    name, record.id, err
                );
                if !recover_field(scanner, &record.id) {
                    return ParseOutcome::Skipped;
                }
            }
        }
    }

    debug!(
        "Parsed entry '{}' ({} fields)",
        record.id,
        record.field_count()
    );
    ParseOutcome::Parsed(record)
}

/// Discard characters until the next entry marker, leaving it unconsumed
/// for the following parse call.
fn resync_to_entry_marker(scanner: &mut Scanner<'_>) {
    while let Some(c) = scanner.next_char() {
        if c == ENTRY_MARKER {
            scanner.push_back(c);
            break;
        }
    }
}

/// Skip forward tracking brace depth until the boundary the mode asks for.
///
/// Depth starts at zero: a `{` deepens, a `}` above zero shallows, and a
/// `}` at depth zero closes the entry.
fn skip_balanced(scanner: &mut Scanner<'_>, mode: SkipMode) -> SkipStop {
    let mut depth = 0usize;
    while let Some(c) = scanner.next_char() {
        match c {
            BRACE_OPEN => depth += 1,
            BRACE_CLOSE => {
                if depth == 0 {
                    if mode == SkipMode::ToFieldBoundary {
                        scanner.push_back(c);
                    }
                    return SkipStop::EntryClosed;
                }
                depth -= 1;
            }
            FIELD_SEPARATOR if depth == 0 && mode == SkipMode::ToFieldBoundary => {
                return SkipStop::FieldSeparator;
            }
            _ => {}
        }
    }
    SkipStop::EndOfStream
}

/// Skip a malformed field and report whether the entry can continue.
///
/// Returns `false` when the input ended before any field boundary, which
/// discards the whole entry.
fn recover_field(scanner: &mut Scanner<'_>, id: &str) -> bool {
    match skip_balanced(scanner, SkipMode::ToFieldBoundary) {
        SkipStop::EndOfStream => {
            warn!(
                "Input ended while skipping a malformed field in entry '{}'",
                id
            );
            false
        }
        SkipStop::EntryClosed | SkipStop::FieldSeparator => true,
    }
}
