//! `fmt`: re-indent a file.

use std::path::Path;

use tracing::info;

use super::read_file;
use crate::config::Config;
use crate::error::CliError;
use crate::reindent::reindent;

/// Re-indent a file with `config.indent_unit`.
///
/// Prints the result, or writes it back in place when `write` is set. An
/// already formatted file is left untouched.
pub fn format_file(path: &Path, config: &Config, write: bool) -> Result<(), CliError> {
    let source = read_file(path)?;
    let formatted = reindent(&source, config.indent_unit);

    if !write {
        print!("{formatted}");
        return Ok(());
    }
    if formatted == source {
        info!(path = %path.display(), "already formatted");
        return Ok(());
    }
    std::fs::write(path, formatted).map_err(|source| CliError::Write {
        path: path.to_owned(),
        source,
    })?;
    info!(path = %path.display(), "reformatted");
    Ok(())
}
