//! Token classification produced by the scanner.
//!
//! [`TokenKind`] is a one-byte classification. [`Token`] pairs a kind with
//! the byte span it covers in the segment that produced it. Tokens are
//! ephemeral: hosts consume them for rendering and drop them.

use std::ops::Range;

/// Classification of a scanned span.
///
/// `None` marks a span that gets no styling (whitespace, commas, stray
/// punctuation).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Quoted string literal, or the part of one inside this segment.
    String = 0,
    /// `#` line comment.
    Comment = 1,
    /// Reserved word or built-in type name.
    Keyword = 2,
    /// JSON-style numeric literal.
    Number = 3,
    /// `{`, `}`, `[` or `]`.
    Bracket = 4,
    /// `:`.
    Operator = 5,
    /// Field name or dotted path.
    Identifier = 6,
    /// Unclassified single character.
    None = 7,
}

impl TokenKind {
    /// All kinds, in discriminant order.
    pub const ALL: [TokenKind; 8] = [
        TokenKind::String,
        TokenKind::Comment,
        TokenKind::Keyword,
        TokenKind::Number,
        TokenKind::Bracket,
        TokenKind::Operator,
        TokenKind::Identifier,
        TokenKind::None,
    ];

    /// Highlight tag name understood by stream-language editor drivers.
    ///
    /// Returns `None` for [`TokenKind::None`]: the host leaves those spans
    /// unstyled. Mapping tags to colors is the host's job.
    pub const fn style_tag(self) -> Option<&'static str> {
        match self {
            TokenKind::String => Some("string"),
            TokenKind::Comment => Some("comment"),
            TokenKind::Keyword => Some("keyword"),
            TokenKind::Number => Some("number"),
            TokenKind::Bracket => Some("bracket"),
            TokenKind::Operator => Some("operator"),
            TokenKind::Identifier => Some("variableName"),
            TokenKind::None => None,
        }
    }
}

/// A classified span of one segment.
///
/// `start` and `end` are byte offsets into the segment passed to the
/// scanner. Every token the scanner produces has `start < end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub start: u32,
    pub end: u32,
}

/// Size assertion: Token should fit in 12 bytes (u8 kind + 2×u32).
const _: () = assert!(std::mem::size_of::<Token>() <= 12);

impl Token {
    pub const fn new(kind: TokenKind, start: u32, end: u32) -> Self {
        Self { kind, start, end }
    }

    /// Byte length of the span.
    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    /// Returns `true` for a zero-length span. Never the case for scanner output.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The span as a `usize` range, ready for slicing the segment.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start as usize..self.end as usize
    }

    /// The text this token covers in `segment`.
    ///
    /// Returns `""` if `segment` is not the segment the token came from and
    /// the span does not fit.
    pub fn text<'s>(&self, segment: &'s str) -> &'s str {
        segment.get(self.range()).unwrap_or_default()
    }
}
