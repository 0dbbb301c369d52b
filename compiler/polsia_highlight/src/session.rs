//! An open document: highlighting plus live evaluation.

use std::ops::Range;

use crate::document::{Highlighter, RescanStats};
use crate::evaluator::Evaluator;

/// A document being edited, paired with the engine that evaluates it.
///
/// Every edit updates the highlighting incrementally and then re-evaluates
/// the whole document. The two are independent: a failed evaluation never
/// changes how the document is tokenized.
#[derive(Debug)]
pub struct Session<E> {
    highlighter: Highlighter,
    evaluator: E,
    evaluation: Result<String, String>,
}

impl<E: Evaluator> Session<E> {
    /// Open `text`, tokenizing and evaluating it once.
    pub fn open(text: &str, evaluator: E) -> Self {
        let highlighter = Highlighter::new(text);
        let evaluation = evaluator.evaluate(text);
        Self {
            highlighter,
            evaluator,
            evaluation,
        }
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    /// Result of the most recent evaluation.
    pub fn evaluation(&self) -> Result<&str, &str> {
        self.evaluation.as_deref().map_err(String::as_str)
    }

    /// Replace lines (see [`Highlighter::replace_lines`]) and re-evaluate.
    pub fn replace_lines(&mut self, range: Range<usize>, new_lines: &[&str]) -> RescanStats {
        let stats = self.highlighter.replace_lines(range, new_lines);
        self.reevaluate();
        stats
    }

    /// Replace one line and re-evaluate.
    pub fn set_line(&mut self, line: usize, text: &str) -> RescanStats {
        let stats = self.highlighter.set_line(line, text);
        self.reevaluate();
        stats
    }

    fn reevaluate(&mut self) {
        let text = self.highlighter.text();
        self.evaluation = self.evaluator.evaluate(&text);
        if let Err(diagnostic) = &self.evaluation {
            tracing::debug!(%diagnostic, "evaluation failed");
        }
    }
}

#[cfg(test)]
mod tests;
