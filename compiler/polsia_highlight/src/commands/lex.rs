//! `lex`: dump the token stream of a file.

use std::fmt::Write;
use std::path::Path;

use polsia_lexer_core::TokenKind;

use super::read_file;
use crate::document::Highlighter;
use crate::error::CliError;

/// Lex a file and print its classified tokens.
pub fn lex_file(path: &Path) -> Result<(), CliError> {
    let content = read_file(path)?;
    let listing = render_tokens(&content);
    println!("Tokens for '{}':", path.display());
    print!("{listing}");
    Ok(())
}

/// One line per classified token as `line:start..end Kind "text"`, then the
/// state at the end of the document. Unclassified spans are omitted.
pub fn render_tokens(source: &str) -> String {
    let highlighter = Highlighter::new(source);
    // Writing to a String is infallible
    let mut out = String::new();
    for (index, (text, tokens)) in highlighter.lines().enumerate() {
        for tok in tokens.iter().filter(|t| t.kind != TokenKind::None) {
            let _ = writeln!(
                out,
                "  {}:{}..{} {:?} {:?}",
                index + 1,
                tok.start,
                tok.end,
                tok.kind,
                tok.text(text)
            );
        }
    }
    let _ = writeln!(out, "End state: {:?}", highlighter.end_state());
    out
}
