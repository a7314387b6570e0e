use super::*;
use pretty_assertions::assert_eq;

// === Basic Navigation ===

#[test]
fn current_returns_first_char() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), Some('a'));
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn advance_char_steps_over_multibyte() {
    let mut cursor = Cursor::new("🍺b");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), Some('b'));
}

#[test]
fn advance_at_eof_is_noop() {
    let mut cursor = Cursor::new("x");
    cursor.advance_char();
    assert!(cursor.is_eof());
    cursor.advance_char();
    assert!(cursor.is_eof());
    assert_eq!(cursor.pos(), 1);
    assert_eq!(cursor.current(), None);
}

#[test]
fn empty_source_is_eof() {
    let cursor = Cursor::new("");
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), None);
}

// === Slicing ===

#[test]
fn slice_from_covers_consumed_text() {
    let mut cursor = Cursor::new("ab:cd");
    cursor.advance_char();
    cursor.advance_char();
    assert_eq!(cursor.slice_from(0), "ab");
    assert_eq!(cursor.tail_from(1), "b:cd");
}

// === Delimiter search ===

#[test]
fn eat_until_delimiter_stops_on_colon() {
    let mut cursor = Cursor::new("ビール :beer:");
    cursor.eat_until_delimiter();
    assert_eq!(cursor.current(), Some(':'));
    assert_eq!(cursor.slice_from(0), "ビール ");
}

#[test]
fn eat_until_delimiter_stays_on_colon() {
    let mut cursor = Cursor::new(":x");
    cursor.eat_until_delimiter();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn eat_until_delimiter_runs_to_eof() {
    let mut cursor = Cursor::new("no delimiters here");
    cursor.eat_until_delimiter();
    assert!(cursor.is_eof());
    assert_eq!(cursor.slice_from(0), "no delimiters here");
}
