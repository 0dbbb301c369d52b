//! Hookup to the language engine.
//!
//! The engine that parses, unifies and renders Polsia source lives outside
//! this crate. The highlighter only needs its contract: full source in,
//! rendered output or a human-readable diagnostic out.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

/// The external language engine.
///
/// `Ok` carries the rendered output (typically JSON text), `Err` carries a
/// diagnostic meant to be shown to the user unchanged.
pub trait Evaluator {
    fn evaluate(&self, source: &str) -> Result<String, String>;
}

impl<F> Evaluator for F
where
    F: Fn(&str) -> Result<String, String>,
{
    fn evaluate(&self, source: &str) -> Result<String, String> {
        self(source)
    }
}

/// Evaluator backed by an external program.
///
/// The source is written to the program's stdin. Exit status 0 yields
/// `Ok(stdout)`; any other status yields `Err(stderr)`. Failures to start
/// or talk to the program are reported as `Err` too.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandEvaluator {
    program: String,
    args: Vec<String>,
}

impl CommandEvaluator {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a whitespace-separated command line such as
    /// `"polsia --json"`. Returns `None` for a blank command line.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Evaluator for CommandEvaluator {
    #[tracing::instrument(level = "debug", skip_all, fields(program = %self.program, bytes = source.len()))]
    fn evaluate(&self, source: &str) -> Result<String, String> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| format!("failed to start evaluator `{}`: {e}", self.program))?;

        // Feed stdin from a separate thread so a chatty evaluator cannot
        // deadlock against a full stdout pipe.
        let writer = child.stdin.take().map(|mut stdin| {
            let input = source.to_owned();
            std::thread::spawn(move || stdin.write_all(input.as_bytes()))
        });

        let output = child
            .wait_with_output()
            .map_err(|e| format!("failed to wait for evaluator `{}`: {e}", self.program))?;

        if let Some(writer) = writer {
            // An evaluator that exits without reading its input is not an
            // error in itself; its exit status decides.
            if let Ok(Err(e)) = writer.join() {
                debug!(error = %e, "evaluator did not consume all input");
            }
        }

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stderr = stderr.trim_end();
            if stderr.is_empty() {
                Err(format!("evaluator `{}` exited with {}", self.program, output.status))
            } else {
                Err(stderr.to_owned())
            }
        }
    }
}
