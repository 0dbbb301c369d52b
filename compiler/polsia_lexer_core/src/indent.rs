//! Indentation hints derived from bracket depth.
//!
//! The hint is advisory: the host decides whether to apply it on newline or
//! reformat.

use crate::state::ScanState;

/// Default indentation unit, in spaces.
pub const INDENT_UNIT: usize = 2;

/// Suggested indentation level for a line.
///
/// `state` is the state entering the line and `text_after` is the line's
/// text. A line whose first non-whitespace character closes a bracket sits
/// one level shallower than its content would.
pub fn indent_level(state: ScanState, text_after: &str) -> u32 {
    let level = state.bracket_depth;
    if starts_with_closer(text_after) {
        level.saturating_sub(1)
    } else {
        level
    }
}

/// Suggested indentation width in columns: `level × unit`.
pub fn indent_width(state: ScanState, text_after: &str, unit: usize) -> usize {
    (indent_level(state, text_after) as usize).saturating_mul(unit)
}

fn starts_with_closer(text: &str) -> bool {
    matches!(text.trim_start().as_bytes().first(), Some(b'}' | b']'))
}
