//! Command handlers for the `polsia-hl` CLI.
//!
//! Each submodule implements one command. Shared helpers like `read_file`
//! live here in the module root.

use std::path::Path;

use crate::error::CliError;

mod eval;
mod fmt;
mod lex;

pub use eval::eval_file;
pub use fmt::format_file;
pub use lex::{lex_file, render_tokens};

/// Read a source file, attaching the path to any I/O error.
pub(crate) fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
