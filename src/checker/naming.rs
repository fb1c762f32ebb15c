//! Naming conventions for definitions, procedures and files.

use regex::Regex;

use crate::parser::analyzer::{code_area, is_name_continuation};
use crate::parser::columns::slice_from;
use crate::parser::{ClassifiedLine, DSpecFields, FSpecFields, PSpecFields, Span, SpecType};

use super::{Category, CheckLevel, Checker, Issue, Severity};

const LOOP_VARIABLES: &[&str] = &["I", "J", "K", "X", "Y", "Z"];
const RESERVED_WORDS: &[&str] = &[
    "IF", "ELSE", "ENDIF", "DO", "ENDDO", "FOR", "ENDFOR", "SELECT", "WHEN", "OTHER", "ENDSL",
    "DOU", "DOW",
];
const VERB_PREFIXES: &[&str] = &[
    "get", "set", "calc", "calculate", "check", "validate", "process", "update", "delete",
    "create", "read", "write", "load", "save", "init", "initialize", "open", "close", "add",
    "remove", "find", "search", "format", "parse", "build", "generate", "convert", "transform",
];
const MAX_RECOMMENDED_NAME_LENGTH: usize = 15;

#[derive(Debug, Clone)]
pub struct NamingChecker {
    invalid_chars: Regex,
    generic_name: Regex,
    case_styles: [Regex; 4],
}

impl Default for NamingChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingChecker {
    /// # Panics
    /// Panics if the built-in patterns are invalid (they are not).
    #[must_use]
    pub fn new() -> Self {
        Self {
            invalid_chars: Regex::new(r"[^A-Za-z0-9_#@$]").expect("Invalid regex"),
            generic_name: Regex::new(r"(?i)^(temp|tmp|var|data|value|x|y|z)\d*$")
                .expect("Invalid regex"),
            case_styles: [
                Regex::new(r"^[a-z][a-zA-Z0-9]*$").expect("Invalid regex"),
                Regex::new(r"^[A-Z][a-zA-Z0-9]*$").expect("Invalid regex"),
                Regex::new(r"^[a-z][a-z0-9_]*$").expect("Invalid regex"),
                Regex::new(r"^[A-Z][A-Z0-9_]*$").expect("Invalid regex"),
            ],
        }
    }

    fn check_variable(&self, line: &ClassifiedLine, name: &str, level: CheckLevel) -> Vec<Issue> {
        let issue = |severity: Severity, rule: &str, message: String| {
            Issue::new(severity, Category::Naming, line.line_number, rule, message)
                .at_span(DSpecFields::NAME)
        };
        let mut issues = Vec::new();

        if name.chars().count() == 1 && !LOOP_VARIABLES.contains(&name.to_ascii_uppercase().as_str())
        {
            issues.push(
                issue(
                    Severity::Warning,
                    "VAR_NAME_TOO_SHORT",
                    format!("Variable name '{name}' is too short"),
                )
                .with_suggestion("Use a name that says what the variable holds, e.g. counter or total"),
            );
        }
        if self.invalid_chars.is_match(name) {
            issues.push(
                issue(
                    Severity::Error,
                    "VAR_NAME_INVALID_CHARS",
                    format!("Variable name '{name}' contains invalid characters"),
                )
                .with_description("Names may use letters, digits, _, #, @ and $ only."),
            );
        }
        if starts_with_digit(name) {
            issues.push(issue(
                Severity::Error,
                "VAR_NAME_STARTS_WITH_DIGIT",
                format!("Variable name '{name}' starts with a digit"),
            ));
        }
        if level.is_strict() && RESERVED_WORDS.contains(&name.to_ascii_uppercase().as_str()) {
            issues.push(issue(
                Severity::Error,
                "VAR_NAME_RESERVED",
                format!("Variable name '{name}' is a reserved word"),
            ));
        }
        if level.at_least_standard() && self.generic_name.is_match(name) {
            issues.push(
                issue(
                    Severity::Info,
                    "VAR_NAME_GENERIC",
                    format!("Variable name '{name}' is too generic"),
                )
                .with_suggestion("Name the variable after its content, e.g. customerName"),
            );
        }
        let length = name.chars().count();
        if level.is_strict() && length > MAX_RECOMMENDED_NAME_LENGTH {
            issues.push(issue(
                Severity::Info,
                "VAR_NAME_TOO_LONG",
                format!("Variable name '{name}' may be too long ({length} characters)"),
            ));
        }
        issues
    }

    fn check_procedure(&self, line: &ClassifiedLine, name: &str, level: CheckLevel) -> Vec<Issue> {
        let issue = |severity: Severity, rule: &str, message: String| {
            Issue::new(severity, Category::Naming, line.line_number, rule, message)
                .at_span(PSpecFields::NAME)
        };
        let mut issues = Vec::new();

        if self.invalid_chars.is_match(name) {
            issues.push(issue(
                Severity::Error,
                "PROC_NAME_INVALID_CHARS",
                format!("Procedure name '{name}' contains invalid characters"),
            ));
        }
        if starts_with_digit(name) {
            issues.push(issue(
                Severity::Error,
                "PROC_NAME_STARTS_WITH_DIGIT",
                format!("Procedure name '{name}' starts with a digit"),
            ));
        }
        let lower = name.to_lowercase();
        if name.chars().count() > 3 && !VERB_PREFIXES.iter().any(|verb| lower.starts_with(verb)) {
            issues.push(
                issue(
                    Severity::Info,
                    "PROC_NAME_VERB_PREFIX",
                    format!("Procedure name '{name}' should start with a verb"),
                )
                .with_suggestion("Start with a verb such as get, set, calc, check or process"),
            );
        }
        if level.is_strict()
            && name.chars().count() > 1
            && !self.case_styles.iter().any(|style| style.is_match(name))
        {
            issues.push(
                issue(
                    Severity::Info,
                    "PROC_NAME_CASE_STYLE",
                    format!("Procedure name '{name}' mixes naming styles"),
                )
                .with_suggestion("Use camelCase, PascalCase or snake_case, e.g. getUserData"),
            );
        }
        issues
    }

    fn check_file(&self, line: &ClassifiedLine, name: &str) -> Option<Issue> {
        self.invalid_chars.is_match(name).then(|| {
            Issue::error(
                Category::Naming,
                line.line_number,
                "FILE_NAME_INVALID_CHARS",
                format!("File name '{name}' contains invalid characters"),
            )
            .at_span(FSpecFields::FILE_NAME)
        })
    }
}

impl Checker for NamingChecker {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        let mut issues = Vec::new();
        for line in lines.iter().filter(|line| !line.is_comment) {
            match line.spec_type {
                SpecType::D => {
                    if let Some(name) = name_in(DSpecFields::NAME, line) {
                        issues.extend(self.check_variable(line, name, level));
                    }
                }
                SpecType::P if level.at_least_standard() => {
                    let begins = line
                        .p_fields()
                        .and_then(|fields| fields.begin_end.as_deref())
                        .is_some_and(|begin_end| begin_end.eq_ignore_ascii_case("B"));
                    if begins && let Some(name) = name_in(PSpecFields::NAME, line) {
                        issues.extend(self.check_procedure(line, name, level));
                    }
                }
                SpecType::F if level.is_strict() => {
                    if let Some(name) = name_in(FSpecFields::FILE_NAME, line) {
                        issues.extend(self.check_file(line, name));
                    }
                }
                _ => {}
            }
        }
        issues
    }
}

/// Name in `span` with any trailing `...` continuation marker removed.
///
/// A long name continued with `...` may run past the field, up to column 80.
fn name_in(span: Span, line: &ClassifiedLine) -> Option<&str> {
    let name = if is_name_continuation(&line.raw) {
        slice_from(code_area(&line.raw), span.start).trim()
    } else {
        span.extract(&line.raw)?
    };
    let name = name.strip_suffix("...").unwrap_or(name).trim_end();
    (!name.is_empty()).then_some(name)
}

fn starts_with_digit(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_digit())
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
