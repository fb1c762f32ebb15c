use super::*;
use crate::checker::Severity;
use crate::parser::{classify, test_fixtures::c_spec};
use crate::rules::sample_rule;

#[test]
fn patterns_match_case_insensitively() {
    let rules = [sample_rule("NO_DUMP", Some("\\bdump\\b"))];
    let (set, diagnostics) = CompiledRuleSet::compile(&rules);
    assert!(diagnostics.is_empty());
    assert_eq!(set.len(), 1);

    let source = [c_spec("", "DUMP", ""), c_spec("", "EVAL", "X = 1")].join("\n");
    let issues = set.check(&classify(&source));
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "NO_DUMP");
    assert_eq!(issues[0].line, 1);
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].message, "NO_DUMP matched");
    assert_eq!(issues[0].code_snippet.as_deref(), Some(c_spec("", "DUMP", "").as_str()));
}

#[test]
fn comments_are_never_matched() {
    let rules = [sample_rule("NO_DUMP", Some("DUMP"))];
    let (set, _) = CompiledRuleSet::compile(&rules);
    assert!(set.check(&classify("      * DUMP here")).is_empty());
}

#[test]
fn disabled_and_patternless_rules_are_skipped() {
    let mut disabled = sample_rule("OFF", Some("DUMP"));
    disabled.enabled = false;
    let rules = [disabled, sample_rule("NOPAT", None)];
    let (set, diagnostics) = CompiledRuleSet::compile(&rules);
    assert!(set.is_empty());
    assert!(diagnostics.is_empty());
}

#[test]
fn invalid_patterns_become_diagnostics() {
    let rules = [sample_rule("BROKEN", Some("(unclosed")), sample_rule("OK", Some("EVAL"))];
    let (set, diagnostics) = CompiledRuleSet::compile(&rules);
    assert_eq!(set.len(), 1);
    assert_eq!(set.iter().next().unwrap().rule().id, "OK");
    assert_eq!(diagnostics.len(), 1);
    assert!(matches!(&diagnostics[0], RpgGuardError::InvalidRegex { rule, .. } if rule == "BROKEN"));
}

#[test]
fn description_and_suggestion_carry_over() {
    let mut rule = sample_rule("NO_DUMP", Some("DUMP"));
    rule.description = "Avoid DUMP in production".to_string();
    rule.suggestion = Some("Remove the DUMP".to_string());
    let (set, _) = CompiledRuleSet::compile([&rule]);

    let issues = set.check(&classify(&c_spec("", "DUMP", "")));
    assert_eq!(issues[0].rule_description.as_deref(), Some("Avoid DUMP in production"));
    assert_eq!(issues[0].suggestion.as_deref(), Some("Remove the DUMP"));
}
