use crate::config::DEFAULT_MAX_LINE_LENGTH;
use crate::parser::ClassifiedLine;
use crate::parser::columns::slice_chars;
use crate::parser::dbcs;

use super::{Category, CheckLevel, Checker, Issue};

const SNIPPET_CHARS: usize = 50;

/// Flags lines longer than the configured limit.
#[derive(Debug, Clone, Copy)]
pub struct LineLengthChecker {
    max_length: usize,
    consider_dbcs: bool,
}

impl Default for LineLengthChecker {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LENGTH, false)
    }
}

impl LineLengthChecker {
    #[must_use]
    pub const fn new(max_length: usize, consider_dbcs: bool) -> Self {
        Self {
            max_length,
            consider_dbcs,
        }
    }

    /// Length as the compiler sees it: characters, or DBCS bytes with
    /// shift framing when enabled.
    fn measure(&self, raw: &str) -> usize {
        if self.consider_dbcs {
            dbcs::byte_length(raw)
        } else {
            raw.chars().count()
        }
    }

    fn check_line(&self, line: &ClassifiedLine) -> Option<Issue> {
        let length = self.measure(&line.raw);
        if length <= self.max_length {
            return None;
        }
        let max = self.max_length;
        let mut message = format!("Line length exceeds limit ({length} > {max})");
        if self.consider_dbcs && dbcs::contains_dbcs(&line.raw) {
            let analysis = dbcs::analyze(&line.raw);
            message.push_str(&format!(
                " ({} DBCS characters, {} shift characters)",
                analysis.dbcs_count, analysis.shift_characters
            ));
        }
        Some(
            Issue::error(Category::Structure, line.line_number, "LINE_LENGTH", message)
                .at_column(max + 1)
                .with_description(format!("A line must be at most {max} columns."))
                .with_suggestion("Split the line or use continuation lines")
                .with_snippet(format!("{}...", slice_chars(&line.raw, 0, SNIPPET_CHARS))),
        )
    }
}

impl Checker for LineLengthChecker {
    fn name(&self) -> &'static str {
        "line-length"
    }

    fn check(&self, lines: &[ClassifiedLine], _level: CheckLevel) -> Vec<Issue> {
        lines.iter().filter_map(|line| self.check_line(line)).collect()
    }
}

#[cfg(test)]
#[path = "line_length_tests.rs"]
mod tests;
