//! Reserved-word table.
//!
//! Keyword recognition runs after the scanner has isolated a whole word, so
//! matching is a constant-table lookup instead of a pattern cascade. Adding a
//! word means adding one arm to [`is_keyword`] and one entry to [`KEYWORDS`].
//!
//! The table covers the value keywords (`null`, `true`, `false`), the
//! `noexport` annotation, and the built-in type names.

/// Every reserved word, in no particular order.
pub const KEYWORDS: [&str; 12] = [
    "noexport", "null", "true", "false", "Any", "Nothing", "Int", "Number", "Rational", "Float",
    "String", "Boolean",
];

/// Returns `true` if `word` is a reserved word.
///
/// `word` must be the complete word; prefixes of longer identifiers never
/// reach this function. Uses length-bucketing for fast rejection: reserved
/// words are 3-8 bytes long.
#[inline]
pub fn is_keyword(word: &str) -> bool {
    match word.len() {
        3 => matches!(word, "Any" | "Int"),
        4 => matches!(word, "null" | "true"),
        5 => matches!(word, "false" | "Float"),
        6 => matches!(word, "Number" | "String"),
        7 => matches!(word, "Nothing" | "Boolean"),
        8 => matches!(word, "noexport" | "Rational"),
        _ => false,
    }
}
