//! Errors surfaced by the `polsia-hl` front end.
//!
//! The tokenizer itself has no error type; these cover file access,
//! command-line mistakes and evaluation failures.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write `{}`: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Usage(String),

    #[error("invalid value `{value}` for {name}: {reason}")]
    InvalidConfig {
        name: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("no evaluator configured (set {} or pass --evaluator=CMD)", crate::config::EVALUATOR_VAR)]
    NoEvaluator,

    /// The evaluator's diagnostic, passed through unchanged.
    #[error("{0}")]
    Evaluation(String),
}

impl CliError {
    /// Process exit code for this error: 2 for command-line mistakes, 1 for
    /// everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) | CliError::InvalidConfig { .. } => 2,
            CliError::Read { .. }
            | CliError::Write { .. }
            | CliError::NoEvaluator
            | CliError::Evaluation(_) => 1,
        }
    }
}
