use std::fs;

use tempfile::TempDir;

use super::*;
use crate::checker::CheckLevel;
use crate::config::{Config, DEFAULT_MAX_LINE_LENGTH};

fn init_args(dir: &TempDir, force: bool) -> InitArgs {
    InitArgs {
        output: dir.path().join(".rpgle-guard.toml"),
        force,
    }
}

#[test]
fn template_parses_to_defaults() {
    let config: Config = toml::from_str(&generate_config_template()).unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
    assert_eq!(config.check.level, CheckLevel::Standard);
    assert_eq!(config.check.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    assert!(config.check.disabled_rules.is_empty());
    assert!(config.check.custom_rules.is_none());
    assert_eq!(config.scanner.extensions, vec!["rpgle", "rpg", "sqlrpgle"]);
    assert!(config.scanner.recursive);
}

#[test]
fn init_creates_config_file() {
    let dir = TempDir::new().unwrap();
    let args = init_args(&dir, false);

    assert_eq!(run_init(&args), EXIT_SUCCESS);
    let content = fs::read_to_string(&args.output).unwrap();
    assert_eq!(content, generate_config_template());
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    let args = init_args(&dir, false);
    fs::write(&args.output, "# mine").unwrap();

    assert!(matches!(run_init_impl(&args), Err(RpgGuardError::Config(_))));
    assert_eq!(run_init(&args), EXIT_CONFIG_ERROR);
    assert_eq!(fs::read_to_string(&args.output).unwrap(), "# mine");
}

#[test]
fn init_force_overwrites() {
    let dir = TempDir::new().unwrap();
    let args = init_args(&dir, true);
    fs::write(&args.output, "# mine").unwrap();

    run_init_impl(&args).unwrap();
    assert!(fs::read_to_string(&args.output).unwrap().contains("[check]"));
}
