use crate::cursor::Cursor;
use pretty_assertions::assert_eq;

#[test]
fn current_and_advance() {
    let mut cursor = Cursor::new("ab");
    assert_eq!(cursor.current(), Some('a'));
    cursor.advance();
    assert_eq!(cursor.current(), Some('b'));
    cursor.advance();
    assert_eq!(cursor.current(), None);
}

#[test]
fn advance_moves_by_scalar_width() {
    let mut cursor = Cursor::new("🌱x");
    cursor.advance();
    assert_eq!(cursor.pos(), 4);
    assert_eq!(cursor.current(), Some('x'));
}

#[test]
fn advance_at_end_is_noop() {
    let mut cursor = Cursor::new("");
    cursor.advance();
    assert_eq!(cursor.pos(), 0);
}

#[test]
fn next_one_and_two() {
    let cursor = Cursor::new("📦⛔x");
    assert_eq!(cursor.next_one(), Some("📦"));
    assert_eq!(cursor.next_two(), Some("📦⛔"));
}

#[test]
fn next_two_requires_two_scalars() {
    let cursor = Cursor::new("a");
    assert_eq!(cursor.next_two(), None);
}

#[test]
fn slice_returns_consumed_text() {
    let mut cursor = Cursor::new("hello world");
    let start = cursor.pos();
    for _ in 0..5 {
        cursor.advance();
    }
    assert_eq!(cursor.slice(start), "hello");
}

#[test]
fn starts_with_checks_rest() {
    let mut cursor = Cursor::new("x💭rest");
    assert!(!cursor.starts_with("💭"));
    cursor.advance();
    assert!(cursor.starts_with("💭"));
}
