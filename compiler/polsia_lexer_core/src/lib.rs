//! Incremental tokenizer for Polsia configuration source.
//!
//! Polsia is a JSON superset (comments, unquoted dotted keys, type names,
//! duplicate-key merging). This crate classifies source text for syntax
//! highlighting and computes auto-indentation hints. It does not parse:
//! there is no AST and no validity checking beyond string and bracket
//! delimiters.
//!
//! The scanner is driven one segment (normally one line) at a time. All
//! state that must survive a segment boundary lives in [`ScanState`], which
//! the host stores per line and passes back in:
//!
//! ```
//! use polsia_lexer_core::{scan_segment, ScanState, TokenKind};
//!
//! let (tokens, state) = scan_segment("name: \"multi", ScanState::INITIAL);
//! assert!(state.in_string);
//! assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::String));
//!
//! let (tokens, state) = scan_segment("line\" }", state);
//! assert!(!state.in_string);
//! assert_eq!(tokens[0].kind, TokenKind::String);
//! ```
//!
//! The scanner never fails. Unterminated strings, unbalanced brackets and
//! malformed numbers degrade to plausible classifications, so highlighting
//! keeps working while the user is mid-edit.

mod cursor;
mod indent;
mod keywords;
mod scanner;
mod state;
mod tag;

pub use cursor::Cursor;
pub use indent::{indent_level, indent_width, INDENT_UNIT};
pub use keywords::{is_keyword, KEYWORDS};
pub use scanner::{scan_lines, scan_segment, split_lines, LineScan, Scanner};
pub use state::ScanState;
pub use tag::{Token, TokenKind};
