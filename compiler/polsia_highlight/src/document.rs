//! Per-line token cache with rescan-on-state-change.
//!
//! [`Highlighter`] keeps, for every line of a document, the state entering
//! the line, its tokens, and the state leaving it. An edit rescans the
//! replaced lines and then walks forward only while the state flowing into
//! the next line differs from what that line was last scanned with. Typing
//! inside a line usually rescans exactly one line; opening a string or a
//! bracket rescans until the effect stops propagating.

use std::ops::Range;

use polsia_lexer_core::{indent_width, scan_segment, split_lines, ScanState, Token};
use tracing::debug;

/// One cached line.
#[derive(Clone, Debug)]
struct Line {
    text: String,
    start_state: ScanState,
    tokens: Vec<Token>,
    end_state: ScanState,
}

impl Line {
    fn scanned(text: String, start_state: ScanState) -> Self {
        let (tokens, end_state) = scan_segment(&text, start_state);
        Self {
            text,
            start_state,
            tokens,
            end_state,
        }
    }

    fn rescan(&mut self, start_state: ScanState) {
        let (tokens, end_state) = scan_segment(&self.text, start_state);
        self.start_state = start_state;
        self.tokens = tokens;
        self.end_state = end_state;
    }
}

/// Work done by one edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RescanStats {
    /// Lines removed by the edit.
    pub removed: usize,
    /// Lines inserted by the edit.
    pub inserted: usize,
    /// Lines scanned: the inserted ones plus downstream lines whose incoming
    /// state changed.
    pub rescanned: usize,
}

/// Tokenized document, kept current across line edits.
///
/// Always holds at least one line. Line indices past the end are clamped
/// rather than rejected.
#[derive(Clone, Debug)]
pub struct Highlighter {
    lines: Vec<Line>,
}

impl Highlighter {
    /// Tokenize `text` from the top.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = text.len()))]
    pub fn new(text: &str) -> Self {
        let mut state = ScanState::INITIAL;
        let lines: Vec<Line> = split_lines(text)
            .map(|text| {
                let line = Line::scanned(text.to_owned(), state);
                state = line.end_state;
                line
            })
            .collect();
        debug!(lines = lines.len(), "document scanned");
        Self { lines }
    }

    /// Number of lines, including a final empty line after a trailing newline.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line_text(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(|l| l.text.as_str())
    }

    /// Tokens of `line`, with offsets relative to the start of the line.
    pub fn line_tokens(&self, line: usize) -> Option<&[Token]> {
        self.lines.get(line).map(|l| l.tokens.as_slice())
    }

    /// Iterate `(text, tokens)` for every line in order.
    pub fn lines(&self) -> impl Iterator<Item = (&str, &[Token])> + '_ {
        self.lines
            .iter()
            .map(|l| (l.text.as_str(), l.tokens.as_slice()))
    }

    /// State entering `line`. For `line >= line_count()` this is the state at
    /// the end of the document.
    pub fn state_before(&self, line: usize) -> ScanState {
        match self.lines.get(line) {
            Some(l) => l.start_state,
            None => self.end_state(),
        }
    }

    /// State leaving `line`.
    pub fn state_after(&self, line: usize) -> Option<ScanState> {
        self.lines.get(line).map(|l| l.end_state)
    }

    /// State at the end of the document.
    pub fn end_state(&self) -> ScanState {
        self.lines
            .last()
            .map_or(ScanState::INITIAL, |l| l.end_state)
    }

    /// The document text, lines joined with `\n`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&line.text);
        }
        out
    }

    /// Indentation width for `line` if its content were `text_after`.
    ///
    /// Used when the user presses enter: `line` is the index the new line
    /// will occupy and `text_after` is whatever follows the cursor.
    pub fn indent_hint(&self, line: usize, text_after: &str, unit: usize) -> usize {
        indent_width(self.state_before(line), text_after, unit)
    }

    /// Replace the lines in `range` with `new_lines` and bring the cache up
    /// to date.
    ///
    /// Entries of `new_lines` containing `\n` are split into several lines.
    /// The range is clamped to the document.
    #[tracing::instrument(level = "debug", skip(self, new_lines), fields(inserted = new_lines.len()))]
    pub fn replace_lines(&mut self, range: Range<usize>, new_lines: &[&str]) -> RescanStats {
        let len = self.lines.len();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);

        let mut state = self.state_before(start);
        let inserted: Vec<Line> = new_lines
            .iter()
            .copied()
            .flat_map(split_lines)
            .map(|text| {
                let line = Line::scanned(text.to_owned(), state);
                state = line.end_state;
                line
            })
            .collect();

        let mut stats = RescanStats {
            removed: end - start,
            inserted: inserted.len(),
            rescanned: inserted.len(),
        };
        self.lines.splice(start..end, inserted);

        let mut next = start + stats.inserted;
        while let Some(line) = self.lines.get_mut(next) {
            if line.start_state == state {
                break;
            }
            line.rescan(state);
            state = line.end_state;
            stats.rescanned += 1;
            next += 1;
        }

        if self.lines.is_empty() {
            self.lines.push(Line::scanned(String::new(), ScanState::INITIAL));
        }

        debug!(
            removed = stats.removed,
            inserted = stats.inserted,
            rescanned = stats.rescanned,
            "lines replaced"
        );
        stats
    }

    /// Replace the text of a single line.
    pub fn set_line(&mut self, line: usize, text: &str) -> RescanStats {
        self.replace_lines(line..line.saturating_add(1), &[text])
    }
}
