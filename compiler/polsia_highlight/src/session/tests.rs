use std::cell::Cell;

use super::*;
use polsia_lexer_core::TokenKind;

/// Toy engine: rejects documents with unbalanced braces, otherwise echoes
/// the line count.
fn brace_checker(source: &str) -> Result<String, String> {
    let opens = source.matches('{').count();
    let closes = source.matches('}').count();
    if opens == closes {
        Ok(format!("{} lines", source.lines().count()))
    } else {
        Err(format!("unbalanced braces: {opens} open, {closes} close"))
    }
}

#[test]
fn open_evaluates_once() {
    let session = Session::open("{\n  a: 1\n}", brace_checker);
    assert_eq!(session.evaluation(), Ok("3 lines"));
    assert_eq!(session.highlighter().line_count(), 3);
}

#[test]
fn every_edit_reevaluates() {
    let calls = Cell::new(0);
    let counting = |source: &str| -> Result<String, String> {
        calls.set(calls.get() + 1);
        Ok(source.to_owned())
    };
    let mut session = Session::open("a: 1", counting);
    session.set_line(0, "a: 2");
    session.replace_lines(1..1, &["b: 3"]);
    assert_eq!(calls.get(), 3);
    assert_eq!(session.evaluation(), Ok("a: 2\nb: 3"));
}

#[test]
fn failed_evaluation_is_surfaced_unchanged() {
    let mut session = Session::open("{\n}", brace_checker);
    session.set_line(1, "");
    assert_eq!(session.evaluation(), Err("unbalanced braces: 1 open, 0 close"));
}

#[test]
fn evaluation_failure_does_not_affect_tokens() {
    let failing = |_: &str| -> Result<String, String> { Err("nope".to_owned()) };
    let mut session = Session::open("{\n  a: \"x\"\n}", failing);
    session.set_line(1, "  a: Int");
    let tokens = session.highlighter().line_tokens(1).unwrap_or_default();
    assert!(tokens.iter().any(|t| t.kind == TokenKind::Keyword));
    assert_eq!(session.evaluation(), Err("nope"));
}
