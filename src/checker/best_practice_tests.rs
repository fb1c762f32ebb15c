use super::*;
use crate::parser::classify;
use crate::parser::test_fixtures::{c_spec, d_spec};
use crate::rules::{CompiledRuleSet, CustomRule};
use crate::checker::Severity;

fn rules(source: &str, level: CheckLevel) -> Vec<String> {
    BestPracticeChecker::default()
        .check(&classify(source), level)
        .into_iter()
        .map(|issue| issue.rule)
        .collect()
}

#[test]
fn deprecated_opcodes_are_warnings_at_every_level() {
    let source = c_spec("", "MOVE", "FIELDA");
    let issues = BestPracticeChecker::default().check(&classify(&source), CheckLevel::Basic);
    assert_eq!(issues.len(), 1);
    let issue = &issues[0];
    assert_eq!(issue.rule, "DEPRECATED_OPCODE");
    assert_eq!(issue.severity, Severity::Warning);
    assert_eq!(issue.category, Category::Deprecated);
    assert_eq!((issue.column, issue.end_column), (Some(26), Some(35)));
    assert!(issue.message.contains("'MOVE'"));
    assert_eq!(issue.suggestion.as_deref(), Some("Use EVAL with %CHAR, %DEC or %SUBST"));
}

#[test]
fn condition_suffixes_and_extenders_match_the_list() {
    assert_eq!(rules(&c_spec("A", "CABEQ", "B"), CheckLevel::Basic), ["DEPRECATED_OPCODE"]);
    assert_eq!(rules(&c_spec("", "Z-ADD(H)", "1"), CheckLevel::Basic), ["DEPRECATED_OPCODE"]);
    assert!(rules(&c_spec("", "EVAL", "X = 1"), CheckLevel::Strict)
        .iter()
        .all(|rule| rule != "DEPRECATED_OPCODE"));
}

#[test]
fn goto_is_an_error_from_standard() {
    let source = c_spec("", "GOTO", "ENDPGM");
    assert_eq!(rules(&source, CheckLevel::Basic), ["DEPRECATED_OPCODE"]);
    assert_eq!(rules(&source, CheckLevel::Standard), ["DEPRECATED_OPCODE", "NO_GOTO"]);
}

#[test]
fn each_numbered_indicator_is_reported() {
    let source = c_spec("", "EVAL", "*IN03 = *in99");
    assert!(rules(&source, CheckLevel::Basic).is_empty());

    let issues = BestPracticeChecker::default().check(&classify(&source), CheckLevel::Standard);
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|issue| issue.rule == "INDICATOR_USAGE"));
    assert_eq!((issues[0].column, issues[0].end_column), (Some(36), Some(40)));
    assert!(issues[1].message.contains("'*in99'"));
}

#[test]
fn indicators_in_comments_are_ignored() {
    assert!(rules("      * set *IN03 on exit", CheckLevel::Standard).is_empty());
}

#[test]
fn fully_free_is_recommended_for_fixed_sources_in_strict() {
    let source = d_spec("counter", "S", "10", "I", "0");
    assert!(rules(&source, CheckLevel::Standard).is_empty());
    let issues = BestPracticeChecker::default().check(&classify(&source), CheckLevel::Strict);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "RECOMMEND_FULLY_FREE");
    assert_eq!(issues[0].line, 1);
    assert_eq!(issues[0].severity, Severity::Info);

    assert!(rules("      * only a comment", CheckLevel::Strict).is_empty());
    assert!(rules("**FREE\ndcl-s x int(10);", CheckLevel::Strict).is_empty());
}

#[test]
fn custom_rules_run_at_every_level() {
    let rule = CustomRule {
        id: "NO_DSPLY".to_string(),
        name: "No DSPLY".to_string(),
        description: String::new(),
        category: Category::BestPractice,
        severity: Severity::Error,
        enabled: true,
        pattern: Some("dsply".to_string()),
        message: "DSPLY is for debugging only".to_string(),
        suggestion: None,
    };
    let (compiled, diagnostics) = CompiledRuleSet::compile([&rule]);
    assert!(diagnostics.is_empty());
    let checker = BestPracticeChecker::new(compiled);

    let issues = checker.check(&classify(&c_spec("", "DSPLY", "MSG")), CheckLevel::Basic);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "NO_DSPLY");
    assert!(issues[0].is_error());
}
