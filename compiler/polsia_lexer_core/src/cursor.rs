//! Byte cursor over a single input segment.
//!
//! A segment is a borrowed window of source text, conventionally one line.
//! The cursor never reads past the segment: [`Cursor::current`] and the peek
//! methods return `0x00` once the position reaches the end, so dispatch on
//! the current byte terminates naturally.
//!
//! # Interior Null Bytes
//!
//! A segment may contain U+0000. A null at `pos < len` is interior content;
//! a null read at `pos >= len` means end of segment. Use
//! [`Cursor::is_end`] to tell them apart.

/// Cursor over one segment of source text.
///
/// The cursor is [`Copy`], enabling cheap snapshots when a rule needs to
/// look ahead and then back out.
///
/// Positions are byte offsets from the start of the segment. Segments longer
/// than `u32::MAX` bytes are truncated to that length.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    src: &'a str,
    /// Current read position (byte index into `src`).
    pos: u32,
    /// Scannable length of `src`.
    len: u32,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, u32 = 4 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0 of `segment`.
    pub fn new(segment: &'a str) -> Self {
        Self {
            src: segment,
            pos: 0,
            len: u32::try_from(segment.len()).unwrap_or(u32::MAX),
        }
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        if pos < self.len {
            self.src.as_bytes()[pos as usize]
        } else {
            0
        }
    }

    /// Returns the byte at the current position, or `0x00` at the end.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Returns the byte one position ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(1))
    }

    /// Returns the byte two positions ahead of current, or `0x00` past the end.
    #[inline]
    pub fn peek2(&self) -> u8 {
        self.byte_at(self.pos.saturating_add(2))
    }

    /// Advance the cursor by one byte, stopping at the end of the segment.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the segment.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    /// Returns the number of bytes in the UTF-8 character starting with `byte`.
    ///
    /// - `0xC0..=0xDF`: 2 bytes
    /// - `0xE0..=0xEF`: 3 bytes
    /// - `0xF0..=0xF7`: 4 bytes
    /// - Everything else (ASCII, continuation, invalid): 1 byte
    #[inline]
    pub fn utf8_char_width(byte: u8) -> u32 {
        match byte {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        }
    }

    /// Advance the cursor past one full UTF-8 character.
    ///
    /// Keeps token boundaries on character boundaries so hosts can slice the
    /// segment with the offsets the scanner reports.
    #[inline]
    pub fn advance_char(&mut self) {
        let width = Self::utf8_char_width(self.current());
        self.advance_n(width);
    }

    /// Returns `true` once every byte of the segment has been consumed.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.len
    }

    /// Current byte offset in the segment.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Scannable length of the segment.
    #[inline]
    pub fn len(&self) -> u32 {
        self.len
    }

    /// Returns `true` for an empty segment.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Extract a substring of the segment.
    ///
    /// Returns `""` for a range that is out of bounds or not on character
    /// boundaries. Ranges produced by the scanner always satisfy both.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        self.src.get(start as usize..end as usize).unwrap_or_default()
    }

    /// Extract the substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at the end of the segment regardless of `pred(0)`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.pos < self.len && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance to the next `\n` byte or the end of the segment.
    ///
    /// Used by the comment rule; the newline itself is not consumed.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < len which fits in u32"
    )]
    pub fn eat_until_newline_or_end(&mut self) {
        let remaining = &self.src.as_bytes()[self.pos as usize..self.len as usize];
        match memchr::memchr(b'\n', remaining) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.len,
        }
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    ///
    /// Returns the byte found, or `0` when the segment ends first (the cursor
    /// is then positioned at the end).
    #[allow(
        clippy::cast_possible_truncation,
        reason = "offset < len which fits in u32"
    )]
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.src.as_bytes()[self.pos as usize..self.len as usize];
        if let Some(offset) = memchr::memchr2(b'"', b'\\', remaining) {
            self.pos += offset as u32;
            self.current()
        } else {
            self.pos = self.len;
            0
        }
    }
}

#[cfg(test)]
mod tests;
