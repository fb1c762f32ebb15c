//! Integration tests for the `rules` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

fn add_dsply_rule(fixture: &TestFixture) {
    rpgle_guard!()
        .current_dir(fixture.path())
        .args([
            "rules",
            "add",
            "NO_DSPLY",
            "--pattern",
            "DSPLY",
            "--message",
            "Avoid DSPLY",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added rule 'NO_DSPLY'"));
}

#[test]
fn rules_list_empty() {
    let fixture = TestFixture::new();

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No custom rules defined."));
}

#[test]
fn rules_add_writes_default_file() {
    let fixture = TestFixture::new();
    add_dsply_rule(&fixture);

    let content = fixture.read_file("rpg-custom-rules.json");
    let json: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(json["rules"][0]["id"], "NO_DSPLY");
    assert_eq!(json["rules"][0]["enabled"], true);

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("NO_DSPLY"));
}

#[test]
fn rules_add_duplicate_fails() {
    let fixture = TestFixture::new();
    add_dsply_rule(&fixture);

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "add", "NO_DSPLY", "--message", "again"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn rules_disable_and_show() {
    let fixture = TestFixture::new();
    add_dsply_rule(&fixture);

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "disable", "NO_DSPLY"])
        .assert()
        .success();

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "show", "NO_DSPLY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"enabled\": false"));
}

#[test]
fn rules_unknown_id_exits_two() {
    let fixture = TestFixture::new();

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "remove", "MISSING"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("MISSING"));
}

#[test]
fn rules_export_import_with_custom_file() {
    let fixture = TestFixture::new();
    add_dsply_rule(&fixture);

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "export", "-o", "shared.json"])
        .assert()
        .success();

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "--file", "team.json", "import", "shared.json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 rules"));

    assert!(fixture.read_file("team.json").contains("NO_DSPLY"));
}

#[test]
fn rules_reset_clears_file() {
    let fixture = TestFixture::new();
    add_dsply_rule(&fixture);

    rpgle_guard!()
        .current_dir(fixture.path())
        .args(["rules", "reset"])
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&fixture.read_file("rpg-custom-rules.json")).unwrap();
    assert!(json["rules"].as_array().unwrap().is_empty());
}
