use super::*;
use crate::checker::Severity;
use crate::parser::test_fixtures::{c_spec, d_spec};
use crate::rules::CustomRule;

fn program() -> String {
    [
        "     H DFTACTGRP(*NO)".to_string(),
        d_spec("counter", "S", "10", "I", "0"),
        c_spec("", "EVAL", "counter = counter + 1"),
        c_spec("", "RETURN", ""),
    ]
    .join("\n")
}

fn rules(report: &CheckReport) -> Vec<&str> {
    report.issues.iter().map(|issue| issue.rule.as_str()).collect()
}

/// Calculation followed by a definition, plus a deprecated opcode.
fn misordered() -> String {
    [
        c_spec("", "MOVE", "counter"),
        d_spec("counter", "S", "10", "I", "0"),
    ]
    .join("\n")
}

#[test]
fn minimal_program_is_valid() {
    let report = Engine::default().check_source(&program(), Some("prog.rpgle"));
    assert!(report.valid, "{:?}", report.issues);
    assert!(report.issues.iter().all(|issue| issue.line != 2));
    assert_eq!(report.file_path.as_deref(), Some("prog.rpgle"));

    let summary = &report.summary;
    assert_eq!(summary.checked_lines, 4);
    assert_eq!(summary.errors, 0);
    assert_eq!(summary.specification_counts[&SpecType::H], 1);
    assert_eq!(summary.specification_counts[&SpecType::D], 1);
    assert_eq!(summary.specification_counts[&SpecType::C], 2);
    assert_eq!(summary.specification_counts.len(), SpecType::ALL.len());
}

#[test]
fn fully_free_source_is_rejected() {
    let report = Engine::default().check_source("// header\n**FREE\ndcl-s x int(10);", None);
    assert!(!report.valid);
    assert_eq!(report.issues.len(), 1);

    let issue = &report.issues[0];
    assert_eq!(issue.rule, "UNSUPPORTED_FREE_FORMAT");
    assert_eq!(issue.line, 2);
    assert_eq!(issue.column, Some(1));
    assert_eq!(issue.code_snippet.as_deref(), Some("**FREE"));

    assert_eq!(report.summary.checked_lines, 0);
    assert_eq!(report.summary.errors, 1);
    assert!(report.summary.specification_counts.values().all(|&count| count == 0));
}

#[test]
fn free_rejection_applies_to_every_scope() {
    let report = Engine::default().check_scoped("**FREE", None, CheckScope::Naming);
    assert_eq!(rules(&report), ["UNSUPPORTED_FREE_FORMAT"]);
}

#[test]
fn issues_sort_by_line_then_severity() {
    let report = Engine::default().check_source(&misordered(), None);
    assert!(!report.valid);
    let keys: Vec<_> = report
        .issues
        .iter()
        .map(|issue| (issue.line, issue.severity))
        .collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
    assert!(rules(&report).contains(&"SPEC_ORDER"));
    assert!(rules(&report).contains(&"DEPRECATED_OPCODE"));
}

#[test]
fn disabled_rules_are_dropped() {
    let engine = Engine::new(EngineOptions {
        disabled_rules: vec!["SPEC_ORDER".to_string(), "DEPRECATED_OPCODE".to_string()],
        ..EngineOptions::default()
    });
    let report = engine.check_source(&misordered(), None);
    assert!(!rules(&report).contains(&"SPEC_ORDER"));
    assert!(!rules(&report).contains(&"DEPRECATED_OPCODE"));
    assert_eq!(report.summary.total_issues, report.issues.len());
}

#[test]
fn order_scope_reports_only_spec_order() {
    let report = Engine::default().check_scoped(&misordered(), None, CheckScope::Order);
    assert_eq!(rules(&report), ["SPEC_ORDER"]);
    assert!(!report.valid);
}

#[test]
fn columns_scope_keeps_column_rules_and_line_length() {
    let long = format!("{}{}", c_spec("", "EVAL", "x = 1"), " ".repeat(100));
    let source = format!("{}\n{long}", misordered());
    let report = Engine::default().check_scoped(&source, None, CheckScope::Columns);
    assert!(rules(&report).contains(&"LINE_LENGTH"));
    assert!(
        rules(&report)
            .iter()
            .all(|rule| rule.contains("_SPEC_") || *rule == "LINE_LENGTH")
    );
}

#[test]
fn best_practice_scope_runs_at_standard() {
    let engine = Engine::new(EngineOptions {
        level: CheckLevel::Basic,
        ..EngineOptions::default()
    });
    let report = engine.check_scoped(&c_spec("", "GOTO", "ENDPGM"), None, CheckScope::BestPractice);
    assert_eq!(rules(&report), ["NO_GOTO", "DEPRECATED_OPCODE"]);
    assert_eq!(report.summary.errors, 1);
    assert_eq!(report.summary.warnings, 1);
}

#[test]
fn naming_scope_reports_only_naming_rules() {
    let source = [d_spec("1total", "S", "10", "I", "0"), c_spec("", "MOVE", "x")].join("\n");
    let report = Engine::default().check_scoped(&source, None, CheckScope::Naming);
    assert_eq!(rules(&report), ["VAR_NAME_STARTS_WITH_DIGIT"]);
}

#[test]
fn custom_rules_flow_through_options() {
    let rule = CustomRule {
        id: "NO_DSPLY".to_string(),
        name: "No DSPLY".to_string(),
        description: String::new(),
        category: Category::BestPractice,
        severity: Severity::Warning,
        enabled: true,
        pattern: Some("DSPLY".to_string()),
        message: "Remove DSPLY".to_string(),
        suggestion: None,
    };
    let (custom_rules, _) = CompiledRuleSet::compile([&rule]);
    let engine = Engine::new(EngineOptions {
        custom_rules,
        ..EngineOptions::default()
    });
    let report = engine.check_source(&c_spec("", "DSPLY", "'hi'"), None);
    assert!(rules(&report).contains(&"NO_DSPLY"));
    assert!(report.has_warnings());
}

#[test]
fn scope_parses_from_cli_names() {
    assert_eq!("best-practice".parse::<CheckScope>(), Ok(CheckScope::BestPractice));
    assert_eq!("ORDER".parse::<CheckScope>(), Ok(CheckScope::Order));
    assert!("layout".parse::<CheckScope>().is_err());
}

#[test]
fn aggregate_sums_reports() {
    let engine = Engine::default();
    let reports = [
        engine.check_source(&program(), None),
        engine.check_source(&misordered(), None),
    ];
    let total = CheckReport::aggregate(&reports);
    assert_eq!(total.checked_lines, 6);
    assert_eq!(
        total.total_issues,
        reports[0].issues.len() + reports[1].issues.len()
    );
    assert_eq!(total.specification_counts[&SpecType::D], 2);
}
