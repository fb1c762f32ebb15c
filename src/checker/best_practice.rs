//! Legacy constructs and modernization hints, plus user-defined rules.

use crate::parser::analyzer::{IndicatorScanner, base_opcode, find_deprecated_opcodes};
use crate::parser::{CSpecFields, ClassifiedLine, SpecType};
use crate::rules::CompiledRuleSet;

use super::{Category, CheckLevel, Checker, Issue};

#[derive(Debug, Default)]
pub struct BestPracticeChecker {
    indicators: IndicatorScanner,
    custom_rules: CompiledRuleSet,
}

impl BestPracticeChecker {
    #[must_use]
    pub fn new(custom_rules: CompiledRuleSet) -> Self {
        Self {
            indicators: IndicatorScanner::new(),
            custom_rules,
        }
    }

    fn check_indicators(&self, lines: &[ClassifiedLine]) -> Vec<Issue> {
        self.indicators
            .lines_using(lines)
            .into_iter()
            .flat_map(|line| {
                self.indicators.find(&line.raw).into_iter().map(move |found| {
                    Issue::warning(
                        Category::BestPractice,
                        line.line_number,
                        "INDICATOR_USAGE",
                        format!("Numbered indicator '{}' should be avoided", found.text),
                    )
                    .with_columns(found.column, found.column + found.text.chars().count() - 1)
                    .with_description("Numbered indicators (*IN01-*IN99) hurt readability.")
                    .with_suggestion("Use named indicators or boolean variables such as isValid")
                    .with_line(line)
                })
            })
            .collect()
    }
}

impl Checker for BestPracticeChecker {
    fn name(&self) -> &'static str {
        "best-practice"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        let mut issues = check_deprecated_opcodes(lines);
        if level.at_least_standard() {
            issues.extend(self.check_indicators(lines));
            issues.extend(lines.iter().filter_map(check_goto));
        }
        if level.is_strict() {
            issues.extend(recommend_fully_free(lines));
        }
        issues.extend(self.custom_rules.check(lines));
        issues
    }
}

fn check_deprecated_opcodes(lines: &[ClassifiedLine]) -> Vec<Issue> {
    find_deprecated_opcodes(lines)
        .into_iter()
        .map(|(line, entry)| {
            Issue::warning(
                Category::Deprecated,
                line.line_number,
                "DEPRECATED_OPCODE",
                format!(
                    "Deprecated operation '{}' is used: {}",
                    entry.opcode, entry.reason
                ),
            )
            .at_span(CSpecFields::OPCODE)
            .with_description(format!("The {} operation is deprecated.", entry.opcode))
            .with_suggestion(entry.alternative)
            .with_line(line)
        })
        .collect()
}

fn check_goto(line: &ClassifiedLine) -> Option<Issue> {
    if line.is_comment {
        return None;
    }
    let opcode = line.c_fields()?.opcode.as_deref()?;
    if base_opcode(opcode) != "GOTO" {
        return None;
    }
    Some(
        Issue::error(
            Category::BestPractice,
            line.line_number,
            "NO_GOTO",
            "GOTO breaks structured programming",
        )
        .at_span(CSpecFields::OPCODE)
        .with_description("GOTO tangles control flow and makes code harder to maintain.")
        .with_suggestion("Use IF/ELSE, DO loops or SELECT/WHEN")
        .with_line(line),
    )
}

/// Fixed-format code with no `**FREE` at all.
fn recommend_fully_free(lines: &[ClassifiedLine]) -> Option<Issue> {
    let has_free = lines.iter().any(|line| line.spec_type == SpecType::Free);
    let has_fixed = lines
        .iter()
        .any(|line| !line.is_comment && line.spec_type.is_fixed_spec());
    if has_free || !has_fixed {
        return None;
    }
    Some(
        Issue::info(
            Category::BestPractice,
            1,
            "RECOMMEND_FULLY_FREE",
            "Consider converting the source to fully free format (**FREE)",
        )
        .with_description("Fully free-form source is easier to read and maintain.")
        .with_suggestion("Add **FREE on the first line and convert the code to free format"),
    )
}

#[cfg(test)]
#[path = "best_practice_tests.rs"]
mod tests;
