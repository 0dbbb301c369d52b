use super::*;
use pretty_assertions::assert_eq;

fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| (*value).to_owned())
    }
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

// === Environment ===

#[test]
fn defaults_without_environment() {
    let config = Config::from_lookup(env(&[]));
    assert_eq!(config, Config::default());
    assert_eq!(config.indent_unit, 2);
    assert_eq!(config.evaluator_command, None);
}

#[test]
fn environment_overrides_defaults() {
    let config = Config::from_lookup(env(&[
        ("POLSIA_INDENT_UNIT", "4"),
        ("POLSIA_EVALUATOR", "polsia --json"),
    ]));
    assert_eq!(config.indent_unit, 4);
    assert_eq!(config.evaluator_command.as_deref(), Some("polsia --json"));
}

#[test]
fn invalid_environment_values_are_ignored() {
    let config = Config::from_lookup(env(&[
        ("POLSIA_INDENT_UNIT", "wide"),
        ("POLSIA_EVALUATOR", "   "),
    ]));
    assert_eq!(config, Config::default());

    let config = Config::from_lookup(env(&[("POLSIA_INDENT_UNIT", "0")]));
    assert_eq!(config.indent_unit, 2);
}

// === Flags ===

#[test]
fn flags_override_environment() {
    let mut config = Config::from_lookup(env(&[("POLSIA_INDENT_UNIT", "4")]));
    let rest = config
        .apply_flags(&args(&["file.polsia", "--indent=8", "--evaluator=cat -u", "--write"]))
        .unwrap();
    assert_eq!(rest, args(&["file.polsia", "--write"]));
    assert_eq!(config.indent_unit, 8);
    assert_eq!(config.evaluator_command.as_deref(), Some("cat -u"));
}

#[test]
fn invalid_indent_flag_is_an_error() {
    let mut config = Config::default();
    let err = config.apply_flags(&args(&["--indent=-1"])).unwrap_err();
    assert!(matches!(err, CliError::InvalidConfig { name: "--indent", .. }));
    assert_eq!(err.exit_code(), 2);

    let err = config.apply_flags(&args(&["--indent=0"])).unwrap_err();
    assert_eq!(err.to_string(), "invalid value `0` for --indent: must be at least 1");
}

#[test]
fn empty_evaluator_flag_is_an_error() {
    let mut config = Config::default();
    let err = config.apply_flags(&args(&["--evaluator="])).unwrap_err();
    assert!(matches!(err, CliError::InvalidConfig { name: "--evaluator", .. }));
}

// === Evaluator ===

#[test]
fn evaluator_requires_configuration() {
    let err = Config::default().evaluator().unwrap_err();
    assert!(matches!(err, CliError::NoEvaluator));
    assert!(err.to_string().contains("POLSIA_EVALUATOR"));
}

#[test]
fn evaluator_is_built_from_command_line() {
    let config = Config {
        evaluator_command: Some("polsia --json".to_owned()),
        ..Config::default()
    };
    let eval = config.evaluator().unwrap();
    assert_eq!(eval.program(), "polsia");
    assert_eq!(eval.args(), &["--json".to_owned()][..]);
}
