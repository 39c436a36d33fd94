use std::collections::HashMap;

use super::*;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_without_env() {
    let config = Config::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.scene_path, PathBuf::from("scene.json"));
    assert!(!config.dry_run);
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.log_level, tracing::Level::WARN);
}

#[test]
fn env_values_override_defaults() {
    let config = Config::from_lookup(lookup(&[
        ("NODETAG_SCENE", "levels/arena.json"),
        ("NODETAG_DRY_RUN", "yes"),
        ("NODETAG_OUTPUT", "json"),
        ("NODETAG_LOG", "debug"),
    ]))
    .expect("config");
    assert_eq!(config.scene_path, PathBuf::from("levels/arena.json"));
    assert!(config.dry_run);
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.log_level, tracing::Level::DEBUG);
}

#[test]
fn blank_scene_path_falls_back_to_default() {
    let config = Config::from_lookup(lookup(&[("NODETAG_SCENE", "  ")])).expect("config");
    assert_eq!(config.scene_path, PathBuf::from(DEFAULT_SCENE_PATH));
}

#[test]
fn dry_run_accepts_common_spellings() {
    assert_eq!(parse_bool("V", Some("TRUE"), false), Ok(true));
    assert_eq!(parse_bool("V", Some(" 0 "), true), Ok(false));
    assert_eq!(parse_bool("V", Some(""), true), Ok(true));
    assert_eq!(parse_bool("V", None, false), Ok(false));
}

#[test]
fn invalid_dry_run_is_rejected() {
    let err = Config::from_lookup(lookup(&[("NODETAG_DRY_RUN", "maybe")])).expect_err("invalid");
    assert_eq!(
        err,
        ConfigError::Invalid {
            var: "NODETAG_DRY_RUN",
            value: "maybe".to_owned(),
            expected: "a boolean",
        }
    );
}

#[test]
fn invalid_output_is_rejected() {
    let err = Config::from_lookup(lookup(&[("NODETAG_OUTPUT", "yaml")])).expect_err("invalid");
    assert!(err.to_string().contains("NODETAG_OUTPUT"));
}

#[test]
fn invalid_log_level_is_rejected() {
    let err = Config::from_lookup(lookup(&[("NODETAG_LOG", "loud")])).expect_err("invalid");
    assert!(matches!(err, ConfigError::Invalid { var: "NODETAG_LOG", .. }));
}

#[test]
fn blank_values_count_as_unset() {
    let config = Config::from_lookup(lookup(&[
        ("NODETAG_DRY_RUN", ""),
        ("NODETAG_OUTPUT", "  "),
        ("NODETAG_LOG", ""),
    ]))
    .expect("config");
    assert!(!config.dry_run);
    assert_eq!(config.output, OutputFormat::Text);
    assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
}

#[test]
fn values_are_trimmed() {
    let config = Config::from_lookup(lookup(&[("NODETAG_OUTPUT", " json "), ("NODETAG_LOG", "info\n")]))
        .expect("config");
    assert_eq!(config.output, OutputFormat::Json);
    assert_eq!(config.log_level, tracing::Level::INFO);
}

// =============================================================
// Flag overrides
// =============================================================

#[test]
fn flags_override_environment() {
    let env = Config::from_lookup(lookup(&[
        ("NODETAG_SCENE", "env.json"),
        ("NODETAG_OUTPUT", "json"),
    ]))
    .expect("config");
    let config = env.with_overrides(Some(PathBuf::from("flag.json")), true, Some(OutputFormat::Text));
    assert_eq!(config.scene_path, PathBuf::from("flag.json"));
    assert!(config.dry_run);
    assert_eq!(config.output, OutputFormat::Text);
}

#[test]
fn absent_flags_keep_environment() {
    let env = Config::from_lookup(lookup(&[
        ("NODETAG_SCENE", "env.json"),
        ("NODETAG_DRY_RUN", "1"),
        ("NODETAG_OUTPUT", "json"),
    ]))
    .expect("config");
    let config = env.clone().with_overrides(None, false, None);
    assert_eq!(config, env);
}
