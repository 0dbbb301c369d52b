//! Whole-document reformat driven by indentation hints.

use polsia_lexer_core::{indent_width, ScanState, Scanner};

/// Re-indent every line of `text` to its bracket depth.
///
/// Each line's leading whitespace is replaced by the indentation hint for
/// the state entering it. Lines that begin inside a string are copied
/// verbatim, since their leading whitespace is string content.
/// Whitespace-only lines become empty. Every line keeps its own ending
/// (`\n` or `\r\n`), and a trailing newline is preserved.
pub fn reindent(text: &str, unit: usize) -> String {
    let mut out = String::with_capacity(text.len());
    let mut state = ScanState::INITIAL;

    for (i, raw) in text.split('\n').enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if state.in_string {
            out.push_str(line);
        } else {
            let content = line.trim_start();
            if !content.is_empty() {
                let width = indent_width(state, content, unit);
                out.push_str(&" ".repeat(width));
                out.push_str(content);
            }
        }
        if line.len() < raw.len() {
            out.push('\r');
        }
        state = Scanner::new(line, state).finish();
    }
    out
}

#[cfg(test)]
mod tests;
