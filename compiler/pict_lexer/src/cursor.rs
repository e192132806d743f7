//! Byte-position cursor over UTF-8 source.
//!
//! Advancement is always by whole Unicode scalars (or by a byte count that
//! came from a scalar-aligned slice), so `pos` stays on a char boundary.

pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// The scalar at the cursor, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Everything from the cursor to end of input.
    #[inline]
    pub fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    /// The source text from `start` to the cursor.
    #[inline]
    pub fn slice(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Advance past the current scalar. No-op at end of input.
    #[inline]
    pub fn advance(&mut self) {
        if let Some(ch) = self.current() {
            self.pos += ch.len_utf8();
        }
    }

    /// Advance by a byte count previously measured from a scalar-aligned
    /// slice of the remaining input.
    #[inline]
    pub fn advance_bytes(&mut self, bytes: usize) {
        self.pos = (self.pos + bytes).min(self.source.len());
    }

    /// Jump to end of input.
    #[inline]
    pub fn advance_to_end(&mut self) {
        self.pos = self.source.len();
    }

    /// Does the remaining input start with `prefix`?
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest().starts_with(prefix)
    }

    /// The next scalar as a string slice.
    pub fn next_one(&self) -> Option<&'src str> {
        let ch = self.current()?;
        Some(&self.rest()[..ch.len_utf8()])
    }

    /// The next two scalars as one string slice, if two remain.
    pub fn next_two(&self) -> Option<&'src str> {
        let mut chars = self.rest().chars();
        let first = chars.next()?;
        let second = chars.next()?;
        Some(&self.rest()[..first.len_utf8() + second.len_utf8()])
    }
}

#[cfg(test)]
mod tests;
