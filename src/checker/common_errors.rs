//! Error patterns that commonly slip into hand-edited fixed-format source.

use crate::parser::analyzer::{Directive, directive, is_name_continuation, strip_string_literals};
use crate::parser::columns::{char_at, slice_chars, slice_from};
use crate::parser::{ClassifiedLine, FSpecFields, PSpecFields, SpecType};

use super::{Category, CheckLevel, Checker, Issue};

const FILE_NAME_WIDTH: usize = 10;

#[derive(Debug, Default, Clone, Copy)]
pub struct CommonErrorsChecker;

impl Checker for CommonErrorsChecker {
    fn name(&self) -> &'static str {
        "common-errors"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        let mut issues: Vec<Issue> = lines.iter().filter_map(check_file_name_spacing).collect();
        issues.extend(check_continuation_gaps(lines));
        issues.extend(check_free_misuse(lines));
        issues.extend(check_definitions_after_calculations(lines));
        if level.at_least_standard() {
            let groups = statement_groups(lines);
            issues.extend(groups.iter().filter_map(check_parentheses));
            issues.extend(groups.iter().filter_map(check_quotes));
        }
        issues
    }
}

/// A ten-character file name must be followed by a blank in column 17.
fn check_file_name_spacing(line: &ClassifiedLine) -> Option<Issue> {
    if line.spec_type != SpecType::F
        || line.is_comment
        || line.char_len() <= FSpecFields::FILE_TYPE.start
    {
        return None;
    }
    let raw = &line.raw;
    let name = FSpecFields::FILE_NAME.slice(raw).trim();
    if name.chars().count() != FILE_NAME_WIDTH
        || char_at(raw, FSpecFields::FILE_TYPE.start) == Some(' ')
    {
        return None;
    }
    let split = FSpecFields::FILE_TYPE.start;
    let corrected = format!("{} {}", slice_chars(raw, 0, split), slice_from(raw, split));
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "F_SPEC_SPACING",
            "File name fills columns 7-16 and runs into column 17",
        )
        .at_column(FSpecFields::FILE_TYPE.first_column())
        .with_description("When the file name is ten characters long, column 17 must be blank.")
        .with_suggestion("Insert a blank at column 17")
        .with_line(line)
        .with_correction(corrected),
    )
}

fn check_continuation_gaps(lines: &[ClassifiedLine]) -> Vec<Issue> {
    lines
        .windows(2)
        .filter(|pair| pair[0].has_continuation_marker() && pair[1].is_blank())
        .map(|pair| {
            Issue::warning(
                Category::Syntax,
                pair[0].line_number,
                "CONTINUATION_FOLLOWED_BY_BLANK",
                "Continuation line is followed by a blank line",
            )
            .with_suggestion("Remove the blank line or check the continuation marker")
            .with_line(&pair[0])
        })
        .collect()
}

fn check_free_misuse(lines: &[ClassifiedLine]) -> Vec<Issue> {
    let fully_free = lines.iter().any(|line| line.spec_type == SpecType::Free);
    let mut seen_fixed_calc = false;
    let mut issues = Vec::new();

    for line in lines {
        if directive(line) == Some(Directive::Free) {
            if fully_free {
                issues.push(
                    Issue::warning(
                        Category::Syntax,
                        line.line_number,
                        "FREE_FORMAT_CONFUSION",
                        "/FREE is used in a **FREE source",
                    )
                    .with_description(
                        "/FREE opens a column-limited free block; **FREE makes the whole member free form.",
                    )
                    .with_suggestion("Remove /FREE when the member uses **FREE")
                    .with_line(line),
                );
            }
            if seen_fixed_calc {
                issues.push(
                    Issue::info(
                        Category::BestPractice,
                        line.line_number,
                        "FREE_AFTER_FIXED",
                        "/FREE follows fixed-format calculation code",
                    )
                    .with_suggestion("Consider converting the whole member to free form")
                    .with_line(line),
                );
            }
        }
        if !line.is_comment && matches!(line.spec_type, SpecType::C | SpecType::I | SpecType::O) {
            seen_fixed_calc = true;
        }
    }
    issues
}

/// Main-section D specifications must precede main-section C specifications.
fn check_definitions_after_calculations(lines: &[ClassifiedLine]) -> Option<Issue> {
    let mut in_procedure = false;
    let mut first_calc: Option<usize> = None;

    for line in lines.iter().filter(|line| line.is_code()) {
        if line.spec_type == SpecType::P && line.char_len() >= 24 && !is_name_continuation(&line.raw) {
            match line.char_at(PSpecFields::BEGIN_END.start) {
                Some('B' | 'b') => in_procedure = true,
                Some('E' | 'e') => in_procedure = false,
                _ => {}
            }
        }
        if in_procedure {
            continue;
        }
        match (line.spec_type, first_calc) {
            (SpecType::C, None) => first_calc = Some(line.line_number),
            (SpecType::D, Some(calc)) => {
                return Some(
                    Issue::error(
                        Category::Structure,
                        line.line_number,
                        "D_AFTER_C",
                        "Definition specification appears after calculation specifications",
                    )
                    .with_description(
                        "Main-section D specifications must come before C specifications; \
                         subprocedure definitions are exempt.",
                    )
                    .with_suggestion(format!("Move the D specification before line {calc}"))
                    .with_line(line),
                );
            }
            _ => {}
        }
    }
    None
}

/// A statement head with the text of the lines that continue it.
struct StatementGroup<'a> {
    head: &'a ClassifiedLine,
    text: String,
}

fn statement_groups(lines: &[ClassifiedLine]) -> Vec<StatementGroup<'_>> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.is_code() && !line.continues_statement())
        .map(|(index, head)| {
            let mut text = head.raw.clone();
            for next in &lines[index + 1..] {
                if next.continues_statement() && next.spec_type == head.spec_type {
                    text.push_str(&next.raw);
                } else if !next.is_comment {
                    break;
                }
            }
            StatementGroup { head, text }
        })
        .collect()
}

fn check_parentheses(group: &StatementGroup<'_>) -> Option<Issue> {
    let text = strip_string_literals(&group.text);
    let open = text.matches('(').count();
    let close = text.matches(')').count();
    (open != close).then(|| {
        Issue::warning(
            Category::Syntax,
            group.head.line_number,
            "UNMATCHED_PARENTHESES",
            format!("Unbalanced parentheses ({open} opening, {close} closing)"),
        )
        .with_suggestion("Add the missing parenthesis")
        .with_line(group.head)
    })
}

fn check_quotes(group: &StatementGroup<'_>) -> Option<Issue> {
    let head = group.head.raw.trim_end();
    if head.ends_with('-') || head.ends_with('+') {
        return None;
    }
    let quotes = group.text.matches('\'').count();
    (quotes % 2 != 0).then(|| {
        Issue::warning(
            Category::Syntax,
            group.head.line_number,
            "UNMATCHED_QUOTES",
            "Unbalanced single quotes",
        )
        .with_suggestion("Close the string literal")
        .with_line(group.head)
    })
}

#[cfg(test)]
#[path = "common_errors_tests.rs"]
mod tests;
