//! Tests for token and value reading

use super::super::scanner::Scanner;
use super::super::value_reader::{ValueReadError, normalize_value, read_token, read_value};

#[test]
fn test_token_stops_at_terminator() {
    let mut scanner = Scanner::new("article{key");

    assert_eq!(read_token(&mut scanner, '{'), "article");
    // Terminator is left for the caller
    assert_eq!(scanner.next_char(), Some('{'));
}

#[test]
fn test_token_stops_at_whitespace() {
    let mut scanner = Scanner::new("title =");

    assert_eq!(read_token(&mut scanner, '='), "title");
    assert_eq!(scanner.next_char(), Some(' '));
}

#[test]
fn test_token_empty_when_terminator_is_first() {
    let mut scanner = Scanner::new("{key");

    assert_eq!(read_token(&mut scanner, '{'), "");
    assert_eq!(scanner.next_char(), Some('{'));
}

#[test]
fn test_token_at_end_of_input() {
    let mut scanner = Scanner::new("key1");

    assert_eq!(read_token(&mut scanner, ','), "key1");
    assert_eq!(scanner.next_char(), None);
}

#[test]
fn test_braced_value() {
    let mut scanner = Scanner::new("{Hello}");

    assert_eq!(read_value(&mut scanner).unwrap(), "Hello");
}

#[test]
fn test_quoted_value() {
    let mut scanner = Scanner::new("\"Hello\"");

    assert_eq!(read_value(&mut scanner).unwrap(), "Hello");
}

#[test]
fn test_nested_braces_are_kept() {
    let mut scanner = Scanner::new("{The {Special} Case}");

    assert_eq!(read_value(&mut scanner).unwrap(), "The {Special} Case");
}

#[test]
fn test_value_stops_at_matching_brace() {
    let mut scanner = Scanner::new("{a{b}c}, year");

    assert_eq!(read_value(&mut scanner).unwrap(), "a{b}c");
    assert_eq!(scanner.next_char(), Some(','));
}

#[test]
fn test_escaped_quote_does_not_terminate() {
    let mut scanner = Scanner::new(r#""say \"hi\"""#);

    assert_eq!(read_value(&mut scanner).unwrap(), "say \"hi\"");
}

#[test]
fn test_escaped_brace_does_not_change_depth() {
    let mut scanner = Scanner::new(r"{a \{ b}");

    assert_eq!(read_value(&mut scanner).unwrap(), "a { b");
}

#[test]
fn test_escape_drops_backslash() {
    let mut scanner = Scanner::new(r"{na\\ive}");

    // Double backslash collapses to one literal backslash
    assert_eq!(read_value(&mut scanner).unwrap(), "na\\ive");
}

#[test]
fn test_value_rejects_bare_text() {
    let mut scanner = Scanner::new("bare");

    assert_eq!(
        read_value(&mut scanner),
        Err(ValueReadError::MissingOpeningDelimiter { found: Some('b') })
    );
    // Offending character is pushed back
    assert_eq!(scanner.next_char(), Some('b'));
}

#[test]
fn test_value_at_end_of_input() {
    let mut scanner = Scanner::new("");

    assert_eq!(
        read_value(&mut scanner),
        Err(ValueReadError::MissingOpeningDelimiter { found: None })
    );
}

#[test]
fn test_unterminated_braced_value() {
    let mut scanner = Scanner::new("{never closed");

    assert_eq!(
        read_value(&mut scanner),
        Err(ValueReadError::UnterminatedValue)
    );
}

#[test]
fn test_unterminated_quoted_value() {
    let mut scanner = Scanner::new("\"never closed");

    assert_eq!(
        read_value(&mut scanner),
        Err(ValueReadError::UnterminatedValue)
    );
}

#[test]
fn test_normalize_collapses_line_breaks() {
    assert_eq!(normalize_value("Line one\nLine two"), "Line one Line two");
    assert_eq!(normalize_value("a\r\nb"), "a b");
}

#[test]
fn test_normalize_drops_leading_breaks() {
    assert_eq!(normalize_value("\n\nIndented start"), "Indented start");
}

#[test]
fn test_normalize_never_doubles_spaces() {
    assert_eq!(normalize_value("end \nnext"), "end next");
    assert_eq!(normalize_value("a\n\n\nb"), "a b");
}

#[test]
fn test_normalize_keeps_other_text_untouched() {
    assert_eq!(normalize_value("plain text"), "plain text");
    assert_eq!(normalize_value("double  space"), "double  space");
    assert_eq!(normalize_value(""), "");
}

#[test]
fn test_normalize_keeps_trailing_break_as_space() {
    assert_eq!(normalize_value("ends here\n"), "ends here ");
}
