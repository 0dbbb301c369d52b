use super::*;
use pretty_assertions::assert_eq;

#[test]
fn nested_objects_and_arrays() {
    let input = "{\nname: \"demo\"\nports: [\n80,\n443\n]\n}";
    let expected = "{\n  name: \"demo\"\n  ports: [\n    80,\n    443\n  ]\n}";
    assert_eq!(reindent(input, 2), expected);
}

#[test]
fn existing_indentation_is_replaced() {
    let input = "{\n        a: 1\n}";
    assert_eq!(reindent(input, 4), "{\n    a: 1\n}");
}

#[test]
fn tabs_are_replaced_with_spaces() {
    assert_eq!(reindent("{\n\ta: 1\n\t}", 2), "{\n  a: 1\n}");
}

#[test]
fn already_formatted_is_unchanged() {
    let input = "a: {\n  b: [\n    1\n  ]\n}\n";
    assert_eq!(reindent(input, 2), input);
}

#[test]
fn blank_lines_are_emptied() {
    assert_eq!(reindent("{\n   \na: 1\n}", 2), "{\n\n  a: 1\n}");
}

#[test]
fn line_starting_inside_string_is_verbatim() {
    let input = "{\ntext: \"first\n   second\"\nnext: 1\n}";
    let expected = "{\n  text: \"first\n   second\"\n  next: 1\n}";
    assert_eq!(reindent(input, 2), expected);
}

#[test]
fn brackets_in_comments_do_not_indent() {
    let input = "# {\na: 1";
    assert_eq!(reindent(input, 2), input);
}

#[test]
fn surplus_closers_never_go_negative() {
    assert_eq!(reindent("}\n]\na: 1", 2), "}\n]\na: 1");
}

#[test]
fn crlf_endings_are_preserved() {
    assert_eq!(reindent("{\r\na: 1\r\n}\r\n", 2), "{\r\n  a: 1\r\n}\r\n");
}

#[test]
fn mixed_endings_stay_per_line() {
    assert_eq!(reindent("{\r\na\nb\n}", 2), "{\r\n  a\n  b\n}");
    assert_eq!(reindent("{\na\r\n}\r\n", 2), "{\n  a\r\n}\r\n");
}

#[test]
fn empty_input() {
    assert_eq!(reindent("", 2), "");
}

#[test]
fn several_closers_on_one_line() {
    let input = "a: {\nb: [\n1\n]}\nc: 2";
    assert_eq!(reindent(input, 2), "a: {\n  b: [\n    1\n  ]}\nc: 2");
}
