use super::*;
use crate::checker::Severity;
use crate::parser::classify;
use crate::parser::test_fixtures::{f_spec, p_spec};

fn rules(source: &str, level: CheckLevel) -> Vec<String> {
    ColumnRulesChecker
        .check(&classify(source), level)
        .into_iter()
        .map(|issue| issue.rule)
        .collect()
}

#[test]
fn valid_f_spec_passes() {
    let source = f_spec("ORDERS", "IF   E           K DISK");
    assert!(rules(&source, CheckLevel::Strict).is_empty());
}

#[test]
fn invalid_file_type() {
    let source = f_spec("ORDERS", "XF   E           K DISK");
    assert_eq!(rules(&source, CheckLevel::Standard), vec!["F_SPEC_FILE_TYPE"]);
    assert!(rules(&source, CheckLevel::Basic).is_empty());
}

#[test]
fn unknown_device_warns() {
    let source = f_spec("ORDERS", "IF   E           K TAPE");
    let issues = ColumnRulesChecker.check(&classify(&source), CheckLevel::Standard);
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].rule, "F_SPEC_DEVICE");
    assert_eq!(issues[0].severity, Severity::Warning);
    assert_eq!(issues[0].column, Some(36));
    assert_eq!(issues[0].end_column, Some(42));
}

#[test]
fn f_continuation_lines_are_not_checked() {
    let source = f_spec("", "X                  TAPE");
    assert!(rules(&source, CheckLevel::Strict).is_empty());
}

#[test]
fn bare_h_spec_is_strict_warning() {
    assert_eq!(rules("     H", CheckLevel::Strict), vec!["H_SPEC_KEYWORD"]);
    assert!(rules("     H", CheckLevel::Standard).is_empty());
    assert!(rules("     H DFTACTGRP(*NO)", CheckLevel::Strict).is_empty());
}

#[test]
fn procedure_begin_end_column() {
    assert!(rules(&p_spec("getTotal", "B"), CheckLevel::Standard).is_empty());
    assert!(rules(&p_spec("getTotal", "e"), CheckLevel::Standard).is_empty());
    assert_eq!(
        rules(&p_spec("getTotal", "X"), CheckLevel::Standard),
        vec!["P_SPEC_BEGIN_END"]
    );
}

#[test]
fn procedure_name_continuation_is_skipped() {
    assert!(rules("     PcalculateOrderTotalAmount...", CheckLevel::Strict).is_empty());
}

#[test]
fn comment_lines_are_ignored() {
    assert!(rules("     H*", CheckLevel::Strict).is_empty());
}
