//! Byte offset to line/column conversion.
//!
//! Spans store byte offsets only; rendering converts them to 1-based
//! line:column pairs on demand. Columns count Unicode scalars, not bytes,
//! so a glyph two scalars wide still advances the column by two — good
//! enough to locate a token in an emoji-dense line without grapheme logic.

/// Convert a byte offset into a 1-based `(line, column)` pair.
///
/// Offsets past the end of the source point just beyond the last line.
pub fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1u32;
    let mut col = 1u32;
    for (pos, ch) in source.char_indices() {
        if pos >= offset {
            break;
        }
        if ch == '\n' {
            line += 1;
            col = 1;
        } else {
            col += 1;
        }
    }
    (line, col)
}

/// The full text of the line containing `offset`, without its newline.
pub fn line_text(source: &str, offset: u32) -> &str {
    let offset = (offset as usize).min(source.len());
    let start = source[..offset].rfind('\n').map_or(0, |p| p + 1);
    let end = source[offset..]
        .find('\n')
        .map_or(source.len(), |p| offset + p);
    &source[start..end]
}

#[cfg(test)]
mod tests;
