//! Continuation chains, `/FREE` blocks and statement separation.

use crate::parser::analyzer::{Directive, directive, strip_string_literals};
use crate::parser::{ClassifiedLine, SpecType};

use super::{Category, CheckLevel, Checker, Issue};

#[derive(Debug, Default, Clone, Copy)]
pub struct SyntaxChecker;

impl Checker for SyntaxChecker {
    fn name(&self) -> &'static str {
        "syntax"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        let mut issues = check_continuations(lines);
        if level.at_least_standard() {
            issues.extend(check_multiple_statements(lines));
        }
        issues.extend(check_free_directives(lines));
        if level.is_strict() {
            issues.extend(check_fully_free(lines));
        }
        issues
    }
}

fn is_comment_like(line: &ClassifiedLine) -> bool {
    line.is_comment || line.spec_type == SpecType::Comment
}

fn continuation_issue(line: &ClassifiedLine, rule: &str, message: impl Into<String>) -> Issue {
    Issue::error(Category::Syntax, line.line_number, rule, message)
        .at_column(7)
        .with_line(line)
}

/// Explicit `-`/`+` continuations must follow a code line of the same type.
fn check_continuations(lines: &[ClassifiedLine]) -> Vec<Issue> {
    let mut issues = Vec::new();
    for (index, line) in lines.iter().enumerate() {
        if !line.has_continuation_marker() {
            continue;
        }
        if index == 0 {
            issues.push(
                continuation_issue(
                    line,
                    "CONTINUATION_NO_PREVIOUS",
                    "Continuation line has no line to continue",
                )
                .with_description("A line with '-' or '+' in column 7 continues the previous line.")
                .with_suggestion("Remove the continuation marker or add the line it continues"),
            );
            continue;
        }

        let previous = lines[..index].iter().rev().find(|prev| !is_comment_like(prev));
        match previous {
            None => issues.push(
                continuation_issue(
                    line,
                    "CONTINUATION_AFTER_COMMENT",
                    "Continuation line is preceded only by comments",
                )
                .with_suggestion("A continuation cannot continue a comment"),
            ),
            Some(prev)
                if prev.spec_type != line.spec_type && prev.spec_type != SpecType::Unknown =>
            {
                issues.push(
                    continuation_issue(
                        line,
                        "CONTINUATION_TYPE_MISMATCH",
                        format!(
                            "Continuation line type ({}) does not match the previous line ({})",
                            line.spec_type, prev.spec_type
                        ),
                    )
                    .with_description(
                        "A continuation line must have the same specification type as the line it continues.",
                    ),
                );
            }
            Some(_) => {}
        }
    }
    issues
}

fn semicolons(raw: &str) -> usize {
    strip_string_literals(raw).matches(';').count()
}

fn multiple_statements_issue(line: &ClassifiedLine, count: usize, context: &str) -> Issue {
    Issue::error(
        Category::Syntax,
        line.line_number,
        "MULTIPLE_STATEMENTS",
        format!("{count} statements on one line {context}"),
    )
    .with_description("Only one statement may be written per line (RNF5508).")
    .with_suggestion("Put each statement on its own line")
    .with_line(line)
}

fn check_multiple_statements(lines: &[ClassifiedLine]) -> Vec<Issue> {
    let fully_free = lines.iter().any(|line| line.spec_type == SpecType::Free);
    let mut in_free_block = false;
    let mut issues = Vec::new();

    for line in lines {
        match directive(line) {
            Some(Directive::Free) => {
                in_free_block = true;
                continue;
            }
            Some(Directive::EndFree) => {
                in_free_block = false;
                continue;
            }
            None => {}
        }
        if line.is_comment {
            continue;
        }

        let count = semicolons(&line.raw);
        if count <= 1 {
            continue;
        }
        if line.spec_type == SpecType::C {
            issues.push(multiple_statements_issue(line, count, "in a calculation"));
        }
        if in_free_block {
            issues.push(multiple_statements_issue(line, count, "inside /FREE"));
        }
        let trimmed = line.trimmed.as_str();
        if fully_free
            && line.spec_type == SpecType::Unknown
            && !trimmed.starts_with("**")
            && !trimmed.starts_with("//")
        {
            issues.push(multiple_statements_issue(line, count, "in **FREE source"));
        }
    }
    issues
}

fn check_free_directives(lines: &[ClassifiedLine]) -> Vec<Issue> {
    let mut open: Vec<&ClassifiedLine> = Vec::new();
    let mut issues = Vec::new();

    for line in lines {
        match directive(line) {
            Some(Directive::Free) => open.push(line),
            Some(Directive::EndFree) => {
                if open.pop().is_none() {
                    issues.push(
                        Issue::error(
                            Category::Syntax,
                            line.line_number,
                            "UNMATCHED_END_FREE",
                            "/END-FREE without a matching /FREE",
                        )
                        .with_suggestion("Add the missing /FREE or remove this /END-FREE")
                        .with_line(line),
                    );
                }
            }
            None => {}
        }
    }

    issues.extend(open.into_iter().map(|line| {
        Issue::error(
            Category::Syntax,
            line.line_number,
            "UNMATCHED_FREE",
            "/FREE without a matching /END-FREE",
        )
        .with_suggestion("Add /END-FREE after the free-form block")
    }));
    issues
}

fn check_fully_free(lines: &[ClassifiedLine]) -> Vec<Issue> {
    let Some(sentinel) = lines.iter().position(|line| line.spec_type == SpecType::Free) else {
        return Vec::new();
    };
    let is_fixed_code = |line: &&ClassifiedLine| line.spec_type.is_fixed_spec() && !line.is_comment;
    let mut issues = Vec::new();

    if lines.iter().any(|line| is_fixed_code(&line)) {
        issues.push(
            Issue::warning(
                Category::Syntax,
                1,
                "MIXED_FORMAT",
                "**FREE source is mixed with fixed-format specifications",
            )
            .with_suggestion("Convert the whole member to fully free form"),
        );
    }
    if let Some(first) = lines[..sentinel].iter().find(is_fixed_code) {
        issues.push(
            Issue::warning(
                Category::Syntax,
                first.line_number,
                "FREE_POSITION",
                "**FREE should be the first line of the member",
            )
            .with_suggestion("Move **FREE to line 1")
            .with_line(first),
        );
    }
    issues
}

#[cfg(test)]
#[path = "syntax_tests.rs"]
mod tests;
