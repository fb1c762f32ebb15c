use std::fmt;

use serde::{Deserialize, Serialize};

use crate::parser::{ClassifiedLine, Span};

/// Issue severity. Ordered so that errors sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(format!("Unknown severity: {s}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Structure,
    Syntax,
    Naming,
    BestPractice,
    Deprecated,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::Syntax => "syntax",
            Self::Naming => "naming",
            Self::BestPractice => "best-practice",
            Self::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "structure" => Ok(Self::Structure),
            "syntax" => Ok(Self::Syntax),
            "naming" => Ok(Self::Naming),
            "best-practice" | "best_practice" => Ok(Self::BestPractice),
            "deprecated" => Ok(Self::Deprecated),
            _ => Err(format!("Unknown category: {s}")),
        }
    }
}

/// A single finding. Columns are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub severity: Severity,
    pub category: Category,
    pub line: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_column: Option<usize>,
    pub message: String,
    pub rule: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrected_code: Option<String>,
}

impl Issue {
    #[must_use]
    pub fn new(
        severity: Severity,
        category: Category,
        line: usize,
        rule: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            category,
            line,
            column: None,
            end_column: None,
            message: message.into(),
            rule: rule.to_string(),
            rule_description: None,
            suggestion: None,
            code_snippet: None,
            corrected_code: None,
        }
    }

    #[must_use]
    pub fn error(category: Category, line: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, line, rule, message)
    }

    #[must_use]
    pub fn warning(
        category: Category,
        line: usize,
        rule: &str,
        message: impl Into<String>,
    ) -> Self {
        Self::new(Severity::Warning, category, line, rule, message)
    }

    #[must_use]
    pub fn info(category: Category, line: usize, rule: &str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, line, rule, message)
    }

    #[must_use]
    pub const fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    #[must_use]
    pub const fn with_columns(mut self, column: usize, end_column: usize) -> Self {
        self.column = Some(column);
        self.end_column = Some(end_column);
        self
    }

    /// Points the issue at a fixed-format field.
    #[must_use]
    pub const fn at_span(self, span: Span) -> Self {
        if span.end - span.start == 1 {
            self.at_column(span.first_column())
        } else {
            self.with_columns(span.first_column(), span.last_column())
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.rule_description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.code_snippet = Some(snippet.into());
        self
    }

    /// Attaches the offending line as the snippet.
    #[must_use]
    pub fn with_line(self, line: &ClassifiedLine) -> Self {
        self.with_snippet(line.raw.clone())
    }

    #[must_use]
    pub fn with_correction(mut self, corrected: impl Into<String>) -> Self {
        self.corrected_code = Some(corrected.into());
        self
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.severity, Severity::Error)
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
