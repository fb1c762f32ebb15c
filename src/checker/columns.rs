//! Column checks for H, F, P and C specifications.

use crate::parser::analyzer::is_name_continuation;
use crate::parser::columns::slice_from;
use crate::parser::{ClassifiedLine, FSpecFields, PSpecFields, Span, SpecType};

use super::{Category, CheckLevel, Checker, Issue};

const SPEC_LETTER: Span = Span::at(5);
const VALID_FILE_TYPES: &str = "IOUC";
const KNOWN_DEVICES: &[&str] = &["DISK", "PRINTER", "WORKSTN", "SPECIAL"];

#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnRulesChecker;

impl Checker for ColumnRulesChecker {
    fn name(&self) -> &'static str {
        "columns"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        let mut issues = Vec::new();
        for line in lines.iter().filter(|line| !line.is_comment) {
            match line.spec_type {
                SpecType::H => check_h(line, level, &mut issues),
                SpecType::F => check_f(line, level, &mut issues),
                SpecType::P => check_p(line, level, &mut issues),
                SpecType::C => issues.extend(spec_letter_issue(line, 'C')),
                _ => {}
            }
        }
        issues
    }
}

fn spec_letter_issue(line: &ClassifiedLine, expected: char) -> Option<Issue> {
    let found = line.char_at(SPEC_LETTER.start)?;
    if found.eq_ignore_ascii_case(&expected) {
        return None;
    }
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            &format!("{expected}_SPEC_COL6"),
            format!("Column 6 of a {expected} specification must be '{expected}', found '{found}'"),
        )
        .at_span(SPEC_LETTER)
        .with_line(line),
    )
}

fn check_h(line: &ClassifiedLine, level: CheckLevel, issues: &mut Vec<Issue>) {
    issues.extend(spec_letter_issue(line, 'H'));
    if level.is_strict() && slice_from(&line.raw, 6).trim().is_empty() {
        issues.push(
            Issue::warning(
                Category::Structure,
                line.line_number,
                "H_SPEC_KEYWORD",
                "Control specification has no keywords",
            )
            .at_column(7)
            .with_suggestion("Add control keywords such as DFTACTGRP(*NO) or remove the line")
            .with_line(line),
        );
    }
}

fn check_f(line: &ClassifiedLine, level: CheckLevel, issues: &mut Vec<Issue>) {
    issues.extend(spec_letter_issue(line, 'F'));
    if line.is_continuation() || !level.at_least_standard() {
        return;
    }

    if let Some(file_type) = FSpecFields::FILE_TYPE.extract(&line.raw)
        && !file_type
            .chars()
            .all(|c| VALID_FILE_TYPES.contains(c.to_ascii_uppercase()))
    {
        issues.push(
            Issue::error(
                Category::Structure,
                line.line_number,
                "F_SPEC_FILE_TYPE",
                format!("Invalid file type '{file_type}' in column 17"),
            )
            .at_span(FSpecFields::FILE_TYPE)
            .with_description("File type must be I (input), O (output), U (update) or C (combined).")
            .with_line(line),
        );
    }

    if let Some(device) = FSpecFields::DEVICE.extract(&line.raw) {
        let upper = device.to_ascii_uppercase();
        if !KNOWN_DEVICES.iter().any(|known| upper.starts_with(known)) {
            issues.push(
                Issue::warning(
                    Category::Structure,
                    line.line_number,
                    "F_SPEC_DEVICE",
                    format!("Unknown device '{device}' in columns 36-42"),
                )
                .at_span(FSpecFields::DEVICE)
                .with_description("Device is usually DISK, PRINTER, WORKSTN or SPECIAL.")
                .with_line(line),
            );
        }
    }
}

fn check_p(line: &ClassifiedLine, level: CheckLevel, issues: &mut Vec<Issue>) {
    issues.extend(spec_letter_issue(line, 'P'));
    if is_name_continuation(&line.raw) || !level.at_least_standard() {
        return;
    }
    if let Some(begin_end) = PSpecFields::BEGIN_END.extract(&line.raw)
        && !matches!(begin_end, "B" | "b" | "E" | "e")
    {
        issues.push(
            Issue::error(
                Category::Structure,
                line.line_number,
                "P_SPEC_BEGIN_END",
                format!("Column 24 must be 'B' or 'E', found '{begin_end}'"),
            )
            .at_span(PSpecFields::BEGIN_END)
            .with_suggestion("Use B to begin and E to end the procedure")
            .with_line(line),
        );
    }
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
