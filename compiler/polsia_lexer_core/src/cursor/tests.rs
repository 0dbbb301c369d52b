use super::*;

// === Basic navigation ===

#[test]
fn empty_segment_is_at_end() {
    let cursor = Cursor::new("");
    assert!(cursor.is_end());
    assert!(cursor.is_empty());
    assert_eq!(cursor.current(), 0);
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn current_and_peek() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.current(), b'a');
    assert_eq!(cursor.peek(), b'b');
    assert_eq!(cursor.peek2(), b'c');
}

#[test]
fn peek_past_end_returns_zero() {
    let mut cursor = Cursor::new("ab");
    cursor.advance();
    assert_eq!(cursor.current(), b'b');
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn advance_stops_at_end() {
    let mut cursor = Cursor::new("x");
    cursor.advance();
    cursor.advance();
    cursor.advance_n(10);
    assert!(cursor.is_end());
    assert_eq!(cursor.pos(), 1);
}

#[test]
fn interior_null_is_not_end() {
    let cursor = Cursor::new("\0a");
    assert_eq!(cursor.current(), 0);
    assert!(!cursor.is_end());
}

// === UTF-8 ===

#[test]
fn utf8_char_widths() {
    assert_eq!(Cursor::utf8_char_width(b'a'), 1);
    assert_eq!(Cursor::utf8_char_width(0xC3), 2);
    assert_eq!(Cursor::utf8_char_width(0xE2), 3);
    assert_eq!(Cursor::utf8_char_width(0xF0), 4);
    assert_eq!(Cursor::utf8_char_width(0x80), 1);
}

#[test]
fn advance_char_skips_multibyte() {
    let mut cursor = Cursor::new("é→😀x");
    cursor.advance_char();
    assert_eq!(cursor.pos(), 2);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 5);
    cursor.advance_char();
    assert_eq!(cursor.pos(), 9);
    assert_eq!(cursor.current(), b'x');
}

// === Slicing ===

#[test]
fn slice_and_slice_from() {
    let mut cursor = Cursor::new("hello world");
    assert_eq!(cursor.slice(0, 5), "hello");
    cursor.advance_n(6);
    let start = cursor.pos();
    cursor.advance_n(5);
    assert_eq!(cursor.slice_from(start), "world");
}

#[test]
fn slice_out_of_bounds_is_empty() {
    let cursor = Cursor::new("abc");
    assert_eq!(cursor.slice(2, 10), "");
}

#[test]
fn slice_off_char_boundary_is_empty() {
    let cursor = Cursor::new("é");
    assert_eq!(cursor.slice(0, 1), "");
}

// === Bulk scanning ===

#[test]
fn eat_while_stops_on_predicate() {
    let mut cursor = Cursor::new("123abc");
    cursor.eat_while(|b| b.is_ascii_digit());
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn eat_while_stops_at_end_even_if_predicate_accepts_zero() {
    let mut cursor = Cursor::new("\0\0");
    cursor.eat_while(|_| true);
    assert_eq!(cursor.pos(), 2);
    assert!(cursor.is_end());
}

#[test]
fn eat_until_newline_stops_before_newline() {
    let mut cursor = Cursor::new("# note\nnext");
    cursor.eat_until_newline_or_end();
    assert_eq!(cursor.pos(), 6);
    assert_eq!(cursor.current(), b'\n');
}

#[test]
fn eat_until_newline_without_newline_reaches_end() {
    let mut cursor = Cursor::new("# note");
    cursor.eat_until_newline_or_end();
    assert!(cursor.is_end());
}

#[test]
fn skip_to_string_delim_finds_quote() {
    let mut cursor = Cursor::new("abc\"def");
    assert_eq!(cursor.skip_to_string_delim(), b'"');
    assert_eq!(cursor.pos(), 3);
}

#[test]
fn skip_to_string_delim_finds_backslash_first() {
    let mut cursor = Cursor::new("ab\\\"");
    assert_eq!(cursor.skip_to_string_delim(), b'\\');
    assert_eq!(cursor.pos(), 2);
}

#[test]
fn skip_to_string_delim_reaches_end() {
    let mut cursor = Cursor::new("plain text");
    assert_eq!(cursor.skip_to_string_delim(), 0);
    assert!(cursor.is_end());
}
