//! Editor-side driver for the Polsia tokenizer.
//!
//! Wraps `polsia_lexer_core` with the pieces an editor host needs:
//!
//! - [`Highlighter`]: a per-line cache of tokens and scan states that
//!   rescans only the lines an edit can affect
//! - [`reindent`]: whole-document re-indentation from the indentation hint
//! - [`Evaluator`] / [`Session`]: re-run an external evaluation engine on
//!   every edit and keep its latest output or diagnostic
//!
//! The `polsia-hl` binary exposes these through the [`commands`] module.

use std::sync::Once;

pub mod commands;
pub mod config;
mod document;
pub mod error;
mod evaluator;
mod reindent;
mod session;

pub use config::Config;
pub use document::{Highlighter, RescanStats};
pub use error::CliError;
pub use evaluator::{CommandEvaluator, Evaluator};
pub use reindent::reindent;
pub use session::Session;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debugging.
///
/// Only installs a subscriber when `RUST_LOG` is set, e.g.
/// `RUST_LOG=polsia_highlight=debug polsia-hl lex file.polsia`. Without it
/// the CLI's stderr carries nothing but error messages. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
