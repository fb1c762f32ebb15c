//! Report builders shared by the formatter tests.

use crate::checker::{Category, Issue};
use crate::counter::LineStatistics;
use crate::engine::{CheckReport, Summary};
use crate::parser::classify;

pub const SOURCE: &str = "     H DFTACTGRP(*NO)\n     C                   MOVE      A";

pub fn clean_report(path: &str) -> CheckReport {
    let summary = Summary::new(&[], &LineStatistics::collect(&classify(SOURCE)));
    CheckReport::new(Vec::new(), summary, Some(path))
}

pub fn failing_report(path: &str) -> CheckReport {
    let issues = vec![
        Issue::error(Category::Structure, 2, "SPEC_ORDER", "C specification out of order")
            .at_column(6)
            .with_description("Specifications must follow H F D P I C O.")
            .with_suggestion("Move the line")
            .with_snippet("     C                   MOVE      A"),
        Issue::warning(Category::Deprecated, 2, "DEPRECATED_OPCODE", "Deprecated operation 'MOVE'")
            .with_columns(26, 35)
            .with_correction("     C                   EVAL      X = A"),
        Issue::info(Category::BestPractice, 1, "RECOMMEND_FULLY_FREE", "Consider **FREE"),
    ];
    let summary = Summary::new(&issues, &LineStatistics::collect(&classify(SOURCE)));
    CheckReport::new(issues, summary, Some(path))
}
