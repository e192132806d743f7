use crate::span_utils::{line_col, line_text};
use pretty_assertions::assert_eq;

#[test]
fn start_of_file_is_line_one_col_one() {
    assert_eq!(line_col("abc", 0), (1, 1));
}

#[test]
fn offset_within_first_line() {
    assert_eq!(line_col("abcdef", 3), (1, 4));
}

#[test]
fn offset_after_newline() {
    let src = "ab\ncd\nef";
    assert_eq!(line_col(src, 3), (2, 1));
    assert_eq!(line_col(src, 7), (3, 2));
}

#[test]
fn columns_count_scalars_not_bytes() {
    // 🌱 is 4 bytes but one scalar; the glyph after it is column 2.
    let src = "🌱🔚";
    assert_eq!(line_col(src, 4), (1, 2));
}

#[test]
fn offset_past_end_clamps() {
    assert_eq!(line_col("ab", 99), (1, 3));
}

#[test]
fn line_text_middle_line() {
    let src = "first\nsecond\nthird";
    assert_eq!(line_text(src, 8), "second");
}

#[test]
fn line_text_first_and_last() {
    let src = "first\nlast";
    assert_eq!(line_text(src, 0), "first");
    assert_eq!(line_text(src, 9), "last");
}
