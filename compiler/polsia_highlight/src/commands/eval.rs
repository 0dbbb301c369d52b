//! `eval`: run the configured evaluator on a file.

use std::path::Path;

use super::read_file;
use crate::config::Config;
use crate::error::CliError;
use crate::session::Session;

/// Evaluate a file and return the evaluator's output.
///
/// A failed evaluation comes back as [`CliError::Evaluation`] carrying the
/// evaluator's diagnostic unchanged.
pub fn eval_file(path: &Path, config: &Config) -> Result<String, CliError> {
    let source = read_file(path)?;
    let session = Session::open(&source, config.evaluator()?);
    session
        .evaluation()
        .map(str::to_owned)
        .map_err(|diagnostic| CliError::Evaluation(diagnostic.to_owned()))
}
