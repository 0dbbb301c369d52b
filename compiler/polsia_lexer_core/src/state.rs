//! Scan state threaded between segments.

/// State carried from the end of one segment to the start of the next.
///
/// A plain value: the host stores the state reached at each line boundary
/// and hands it back when it rescans the following line. The scanner keeps
/// no state of its own.
///
/// # Invariants
///
/// - `bracket_depth` never underflows; surplus closing brackets are absorbed.
/// - `pending_escape` is only meaningful while `in_string` is set, and is
///   cleared as soon as the escaped character is consumed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScanState {
    /// Inside a quoted string that has not been closed yet.
    pub in_string: bool,
    /// The last consumed string byte was an unescaped `\`.
    pub pending_escape: bool,
    /// Unclosed `{` / `[` seen so far, clamped at zero.
    pub bracket_depth: u32,
}

impl ScanState {
    /// State at the top of a document.
    pub const INITIAL: ScanState = ScanState {
        in_string: false,
        pending_escape: false,
        bracket_depth: 0,
    };

    #[inline]
    pub(crate) fn open_bracket(&mut self) {
        self.bracket_depth = self.bracket_depth.saturating_add(1);
    }

    #[inline]
    pub(crate) fn close_bracket(&mut self) {
        self.bracket_depth = self.bracket_depth.saturating_sub(1);
    }
}
