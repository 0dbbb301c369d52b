//! Front-end configuration from the environment and command-line flags.
//!
//! Precedence, lowest to highest: built-in defaults, environment variables,
//! flags. A malformed environment variable is logged and ignored; a
//! malformed flag is a usage error.

use polsia_lexer_core::INDENT_UNIT;
use tracing::warn;

use crate::error::CliError;
use crate::evaluator::CommandEvaluator;

/// Indentation unit in spaces.
pub const INDENT_UNIT_VAR: &str = "POLSIA_INDENT_UNIT";
/// Command line of the external evaluator, e.g. `polsia --json`.
pub const EVALUATOR_VAR: &str = "POLSIA_EVALUATOR";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Spaces per indentation level. Always at least 1.
    pub indent_unit: usize,
    /// Command line used to start the evaluator, if any.
    pub evaluator_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent_unit: INDENT_UNIT,
            evaluator_command: None,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(INDENT_UNIT_VAR) {
            match parse_indent_unit(INDENT_UNIT_VAR, &value) {
                Ok(unit) => config.indent_unit = unit,
                Err(e) => warn!("ignoring environment: {e}"),
            }
        }
        if let Some(value) = lookup(EVALUATOR_VAR) {
            if value.trim().is_empty() {
                warn!("ignoring empty {EVALUATOR_VAR}");
            } else {
                config.evaluator_command = Some(value);
            }
        }
        config
    }

    /// Apply recognized flags from `args` and return the remaining ones.
    ///
    /// Recognized: `--indent=N`, `--evaluator=CMD`.
    pub fn apply_flags(&mut self, args: &[String]) -> Result<Vec<String>, CliError> {
        let mut rest = Vec::new();
        for arg in args {
            if let Some(value) = arg.strip_prefix("--indent=") {
                self.indent_unit = parse_indent_unit("--indent", value)?;
            } else if let Some(value) = arg.strip_prefix("--evaluator=") {
                if value.trim().is_empty() {
                    return Err(CliError::InvalidConfig {
                        name: "--evaluator",
                        value: value.to_owned(),
                        reason: "expected a command",
                    });
                }
                self.evaluator_command = Some(value.to_owned());
            } else {
                rest.push(arg.clone());
            }
        }
        Ok(rest)
    }

    /// The configured evaluator.
    pub fn evaluator(&self) -> Result<CommandEvaluator, CliError> {
        self.evaluator_command
            .as_deref()
            .and_then(CommandEvaluator::from_command_line)
            .ok_or(CliError::NoEvaluator)
    }
}

fn parse_indent_unit(name: &'static str, value: &str) -> Result<usize, CliError> {
    match value.trim().parse::<usize>() {
        Ok(unit) if unit > 0 => Ok(unit),
        Ok(_) => Err(CliError::InvalidConfig {
            name,
            value: value.to_owned(),
            reason: "must be at least 1",
        }),
        Err(_) => Err(CliError::InvalidConfig {
            name,
            value: value.to_owned(),
            reason: "expected a positive integer",
        }),
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "test assertions use unwrap for clarity"
)]
mod tests;
