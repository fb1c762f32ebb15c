use std::fmt::Write;

use crate::checker::{Issue, Severity};
use crate::engine::{CheckReport, Summary};
use crate::error::Result;

use super::OutputFormatter;

pub struct MarkdownFormatter {
    verbose: bool,
}

impl MarkdownFormatter {
    #[must_use]
    pub const fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    const fn verdict(valid: bool) -> &'static str {
        if valid { "✅ Passed" } else { "❌ Failed" }
    }

    fn write_summary_table(output: &mut String, summary: &Summary) {
        writeln!(output, "| Item | Value |").ok();
        writeln!(output, "|------|---:|").ok();
        writeln!(output, "| Total issues | {} |", summary.total_issues).ok();
        writeln!(output, "| Errors | {} |", summary.errors).ok();
        writeln!(output, "| Warnings | {} |", summary.warnings).ok();
        writeln!(output, "| Infos | {} |", summary.infos).ok();
        writeln!(output, "| Checked lines | {} |", summary.checked_lines).ok();
        writeln!(output).ok();
    }

    fn write_issue(&self, output: &mut String, issue: &Issue) {
        let location = match issue.column {
            Some(column) => format!("**Line {}:{column}**", issue.line),
            None => format!("**Line {}**", issue.line),
        };
        writeln!(output, "- {location} - {}", issue.message).ok();

        if self.verbose {
            writeln!(output, "  - **Rule:** `{}`", issue.rule).ok();
            if let Some(description) = &issue.rule_description {
                writeln!(output, "  - **Description:** {description}").ok();
            }
        }
        if let Some(suggestion) = &issue.suggestion {
            writeln!(output, "  - **Suggestion:** {suggestion}").ok();
        }
        if self.verbose {
            if let Some(snippet) = &issue.code_snippet {
                writeln!(output, "  - **Code:** `{snippet}`").ok();
            }
            if let Some(corrected) = &issue.corrected_code {
                writeln!(output, "  - **Corrected:** `{corrected}`").ok();
            }
        }
    }

    fn write_report(&self, output: &mut String, report: &CheckReport) {
        match &report.file_path {
            Some(path) => writeln!(output, "## `{path}`").ok(),
            None => writeln!(output, "## Source").ok(),
        };
        writeln!(output).ok();
        Self::write_summary_table(output, &report.summary);
        writeln!(output, "**Result:** {}", Self::verdict(report.valid)).ok();
        writeln!(output).ok();

        if report.issues.is_empty() {
            writeln!(output, "✓ No issues found.").ok();
            writeln!(output).ok();
            return;
        }

        for (severity, heading) in [
            (Severity::Error, "Errors"),
            (Severity::Warning, "Warnings"),
            (Severity::Info, "Infos"),
        ] {
            let mut issues = report
                .issues
                .iter()
                .filter(|issue| issue.severity == severity)
                .peekable();
            if issues.peek().is_none() {
                continue;
            }
            writeln!(output, "### {heading}").ok();
            writeln!(output).ok();
            for issue in issues {
                self.write_issue(output, issue);
            }
            writeln!(output).ok();
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new(false)
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, reports: &[CheckReport]) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "# RPG Check Result").ok();
        writeln!(output).ok();

        if reports.len() > 1 {
            let valid = reports.iter().filter(|report| report.valid).count();
            writeln!(output, "**Files:** {} ({valid} passed)", reports.len()).ok();
            writeln!(output).ok();
            Self::write_summary_table(&mut output, &CheckReport::aggregate(reports));
        }

        for report in reports {
            self.write_report(&mut output, report);
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
