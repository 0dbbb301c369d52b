//! Hand-written segment scanner producing classified [`Token`]s.
//!
//! The scanner works on one segment at a time and threads a [`ScanState`]
//! in and out, so a host can resume scanning at any line boundary without
//! rescanning the document from the top.
//!
//! # Design
//!
//! Main dispatch is on the current byte. The rule sets are disjoint by
//! their first byte, so dispatch order is classification priority:
//!
//! 1. Continuation of an open string (checked before dispatch)
//! 2. `#` comment to end of line
//! 3. `"` opening a string
//! 4. Reserved word (whole-word table lookup)
//! 5. Number (`-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`)
//! 6. `{` / `[` opening brackets
//! 7. `}` / `]` closing brackets
//! 8. `:` operator
//! 9. Identifier, including dotted paths
//! 10. Anything else: one character, unclassified
//!
//! Malformed input is never an error. Unterminated strings carry over to
//! the next segment, surplus closing brackets are absorbed, and invalid
//! number shapes split into smaller tokens.

use crate::cursor::Cursor;
use crate::keywords::is_keyword;
use crate::state::ScanState;
use crate::tag::{Token, TokenKind};

/// Allocation-free scanner over one segment.
///
/// Produces one token per call to [`next_token`](Self::next_token). Every
/// token covers at least one byte; `None` means the segment is exhausted.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    state: ScanState,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `segment`, resuming from `state`.
    pub fn new(segment: &'a str, state: ScanState) -> Self {
        Self {
            cursor: Cursor::new(segment),
            state,
        }
    }

    /// State after everything consumed so far.
    #[inline]
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Byte offset of the next unconsumed byte.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.cursor.pos()
    }

    /// Consume the rest of the segment and return the final state.
    pub fn finish(mut self) -> ScanState {
        while self.next_token().is_some() {}
        self.state
    }

    /// Produce the next token, or `None` at the end of the segment.
    #[inline]
    pub fn next_token(&mut self) -> Option<Token> {
        if self.cursor.is_end() {
            return None;
        }
        let start = self.cursor.pos();
        let kind = if self.state.in_string {
            self.string_body()
        } else {
            match self.cursor.current() {
                b'#' => self.comment(),
                b'"' => self.string_open(),
                b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.word(start),
                b'0'..=b'9' => self.number(),
                b'-' if self.cursor.peek().is_ascii_digit() => self.number(),
                b'{' | b'[' => {
                    self.cursor.advance();
                    self.state.open_bracket();
                    TokenKind::Bracket
                }
                b'}' | b']' => {
                    self.cursor.advance();
                    self.state.close_bracket();
                    TokenKind::Bracket
                }
                b':' => {
                    self.cursor.advance();
                    TokenKind::Operator
                }
                _ => {
                    self.cursor.advance_char();
                    TokenKind::None
                }
            }
        };
        debug_assert!(self.cursor.pos() > start, "scanner made no progress");
        Some(Token::new(kind, start, self.cursor.pos()))
    }

    // ─── Comments ──────────────────────────────────────────────

    fn comment(&mut self) -> TokenKind {
        self.cursor.advance(); // consume '#'
        self.cursor.eat_until_newline_or_end();
        TokenKind::Comment
    }

    // ─── Strings ───────────────────────────────────────────────

    /// Opening quote plus as much of the body as this segment holds, so a
    /// literal closed on the same line comes out as a single token.
    fn string_open(&mut self) -> TokenKind {
        self.cursor.advance(); // consume opening '"'
        self.state.in_string = true;
        self.state.pending_escape = false;
        self.string_body()
    }

    /// Consume string content up to and including the closing quote, or to
    /// the end of the segment if the string stays open.
    fn string_body(&mut self) -> TokenKind {
        loop {
            if self.state.pending_escape {
                if self.cursor.is_end() {
                    break;
                }
                self.cursor.advance_char(); // escaped char is literal
                self.state.pending_escape = false;
                continue;
            }
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    self.cursor.advance(); // consume closing '"'
                    self.state.in_string = false;
                    break;
                }
                b'\\' => {
                    self.cursor.advance(); // consume '\'
                    self.state.pending_escape = true;
                }
                _ => break,
            }
        }
        TokenKind::String
    }

    // ─── Words: keywords and identifiers ───────────────────────

    fn word(&mut self, start: u32) -> TokenKind {
        self.cursor.advance(); // first char already validated
        self.cursor.eat_while(is_word_continue);
        if is_keyword(self.cursor.slice_from(start)) {
            return TokenKind::Keyword;
        }
        // Not reserved: extend over dotted path segments.
        self.cursor.eat_while(is_ident_continue);
        TokenKind::Identifier
    }

    // ─── Numbers ───────────────────────────────────────────────

    /// Scan the longest prefix matching JSON number syntax.
    ///
    /// The caller guarantees the cursor is on a digit, or on `-` followed by
    /// a digit. Optional parts are only consumed when complete, so `1.` and
    /// `1e` stop after the `1`.
    fn number(&mut self) -> TokenKind {
        if self.cursor.current() == b'-' {
            self.cursor.advance();
        }

        // Integer part: a lone `0`, or digits without a leading zero.
        if self.cursor.current() == b'0' {
            self.cursor.advance();
        } else {
            self.eat_digits();
        }

        // Fraction
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.advance(); // consume '.'
            self.eat_digits();
        }

        // Exponent
        if matches!(self.cursor.current(), b'e' | b'E') {
            let signed = matches!(self.cursor.peek(), b'+' | b'-');
            let first_digit = if signed {
                self.cursor.peek2()
            } else {
                self.cursor.peek()
            };
            if first_digit.is_ascii_digit() {
                self.cursor.advance_n(if signed { 2 } else { 1 });
                self.eat_digits();
            }
        }

        TokenKind::Number
    }

    #[inline]
    fn eat_digits(&mut self) {
        self.cursor.eat_while(|b| b.is_ascii_digit());
    }
}

impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Returns `true` for bytes that continue a word: `[A-Za-z0-9_]`.
#[inline]
fn is_word_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Returns `true` for bytes that continue an identifier: `[A-Za-z0-9_.]`.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_word_continue(b) || b == b'.'
}

/// Scan a whole segment, returning its tokens and the state at its end.
///
/// Convenience over [`Scanner`] for hosts that want the tokens collected.
pub fn scan_segment(segment: &str, state: ScanState) -> (Vec<Token>, ScanState) {
    let mut scanner = Scanner::new(segment, state);
    let mut tokens = Vec::new();
    while let Some(tok) = scanner.next_token() {
        tokens.push(tok);
    }
    (tokens, scanner.state())
}

/// Result of scanning one line of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineScan {
    /// State entering the line.
    pub start_state: ScanState,
    /// Tokens, with offsets relative to the start of the line.
    pub tokens: Vec<Token>,
    /// State leaving the line.
    pub end_state: ScanState,
}

/// Split `text` into the lines a host would feed the scanner.
///
/// Splits on `\n` and drops one trailing `\r` per line. A trailing newline
/// yields a final empty line, as in an editor buffer.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Scan every line of `text` from [`ScanState::INITIAL`], threading the
/// state from each line into the next.
pub fn scan_lines(text: &str) -> Vec<LineScan> {
    let mut state = ScanState::INITIAL;
    split_lines(text)
        .map(|line| {
            let start_state = state;
            let (tokens, end_state) = scan_segment(line, state);
            state = end_state;
            LineScan {
                start_state,
                tokens,
                end_state,
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
