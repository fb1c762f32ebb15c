use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::rules::sample_rule;

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(color_choice_to_mode(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(color_choice_to_mode(ColorChoice::Always), ColorMode::Always);
    assert_eq!(color_choice_to_mode(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn no_config_returns_defaults() {
    let config = load_config(Some(Path::new("does-not-exist.toml")), true).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn explicit_config_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("guard.toml");
    fs::write(&path, "[check]\nlevel = \"strict\"\nmax_line_length = 80\n").unwrap();

    let config = load_config(Some(&path), false).unwrap();
    assert_eq!(config.check.level, crate::checker::CheckLevel::Strict);
    assert_eq!(config.check.max_line_length, 80);
}

#[test]
fn missing_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = load_config(Some(&dir.path().join("missing.toml")), false);
    assert!(matches!(result, Err(RpgGuardError::FileRead { .. })));
}

#[test]
fn rules_path_prefers_explicit_then_config() {
    let mut config = Config::default();
    assert_eq!(
        resolve_rules_path(None, &config),
        PathBuf::from(DEFAULT_RULES_FILE)
    );

    config.check.custom_rules = Some(PathBuf::from("team-rules.json"));
    assert_eq!(
        resolve_rules_path(None, &config),
        PathBuf::from("team-rules.json")
    );
    assert_eq!(
        resolve_rules_path(Some(Path::new("mine.json")), &config),
        PathBuf::from("mine.json")
    );
}

#[test]
fn custom_rules_skip_invalid_patterns() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    let mut store = CustomRuleStore::open(&path).unwrap();
    store.add(sample_rule("GOOD", Some("DSPLY"))).unwrap();
    store.add(sample_rule("BAD", Some("(unclosed"))).unwrap();

    let rules = load_custom_rules(&path, true).unwrap();
    assert_eq!(rules.len(), 1);
}

#[test]
fn custom_rules_missing_file_is_empty() {
    let dir = TempDir::new().unwrap();
    let rules = load_custom_rules(&dir.path().join("none.json"), true).unwrap();
    assert!(rules.is_empty());
}

#[test]
fn custom_rules_malformed_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("rules.json");
    fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        load_custom_rules(&path, true),
        Err(RpgGuardError::CustomRules(_))
    ));
}

#[test]
fn read_sources_skips_unreadable_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.rpgle");
    fs::write(&good, "     H DFTACTGRP(*NO)\n").unwrap();
    let sources = vec![
        SourceInput::File(good.clone()),
        SourceInput::File(dir.path().join("missing.rpgle")),
    ];

    let loaded = read_sources(&sources, true).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, good.display().to_string());
    assert_eq!(loaded[0].content, "     H DFTACTGRP(*NO)\n");
}

#[test]
fn read_sources_replaces_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin.rpgle");
    fs::write(&path, b"     C* caf\xe9\n").unwrap();

    let loaded = read_sources(&[SourceInput::File(path)], true).unwrap();
    assert!(loaded[0].content.starts_with("     C* caf"));
    assert!(loaded[0].content.contains('\u{fffd}'));
}

#[test]
fn write_output_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reports").join("out.txt");
    write_output(Some(&path), "content", true).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "content");
}
