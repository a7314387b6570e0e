//! Character cursor over a `&str`.
//!
//! The scanner copies plain text in bulk and only walks character by
//! character inside a shortcode candidate. [`Cursor::eat_until_delimiter`]
//! jumps straight to the next `:` with `memchr`; [`Cursor::current`] and
//! [`Cursor::advance_char`] step through candidates one `char` at a time.
//!
//! Positions are byte offsets and always sit on a character boundary.

/// The shortcode delimiter.
pub(crate) const DELIMITER: char = ':';

/// Cursor over a source string.
///
/// The cursor is [`Copy`], so a scan position can be snapshotted cheaply.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    /// Byte offset of the current character.
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at position 0.
    pub(crate) fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    /// The character at the current position, `None` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    /// Advance past the current character. No-op at EOF.
    #[inline]
    pub(crate) fn advance_char(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` once every character has been consumed.
    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Current byte offset.
    #[inline]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Source text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        debug_assert!(start <= self.pos, "slice start {start} past cursor {}", self.pos);
        &self.src[start..self.pos]
    }

    /// Source text from `start` to the end.
    pub(crate) fn tail_from(&self, start: usize) -> &'a str {
        &self.src[start..]
    }

    /// Advance to the next delimiter or EOF using SIMD-accelerated search.
    ///
    /// The delimiter is ASCII, so the new position is a character boundary.
    pub(crate) fn eat_until_delimiter(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos..];
        match memchr::memchr(DELIMITER as u8, remaining) {
            Some(offset) => self.pos += offset,
            None => self.pos = self.src.len(),
        }
    }
}

#[cfg(test)]
mod tests;
