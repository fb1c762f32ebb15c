use std::io::Write;

use crate::checker::{Issue, Severity};
use crate::engine::{CheckReport, Summary};
use crate::error::Result;
use crate::parser::SpecType;

use super::{ColorMode, OutputFormatter, ansi};

const RULE_WIDTH: usize = 80;

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: mode.use_colors_on_stdout(),
            verbose,
        }
    }

    #[cfg(test)]
    const fn plain(verbose: u8) -> Self {
        Self {
            use_colors: false,
            verbose,
        }
    }

    const fn severity_label(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => "✗ [ERROR]",
            Severity::Warning => "⚠ [WARNING]",
            Severity::Info => "ℹ [INFO]",
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn severity_color(severity: Severity) -> &'static str {
        match severity {
            Severity::Error => ansi::RED,
            Severity::Warning => ansi::YELLOW,
            Severity::Info => ansi::CYAN,
        }
    }

    fn format_summary(summary: &Summary, output: &mut Vec<u8>) {
        writeln!(output, "[Summary]").ok();
        writeln!(output, "Total issues: {}", summary.total_issues).ok();
        writeln!(output, "  Errors: {}", summary.errors).ok();
        writeln!(output, "  Warnings: {}", summary.warnings).ok();
        writeln!(output, "  Infos: {}", summary.infos).ok();
        writeln!(output, "Checked lines: {}", summary.checked_lines).ok();
        writeln!(output).ok();
    }

    fn format_spec_counts(summary: &Summary, output: &mut Vec<u8>) {
        writeln!(output, "[Specification Counts]").ok();
        for (spec, count) in &summary.specification_counts {
            if *count > 0 && *spec != SpecType::Unknown {
                writeln!(output, "  {spec} ({}): {count} lines", spec.description()).ok();
            }
        }
        writeln!(output).ok();
    }

    fn format_issue(&self, issue: &Issue, output: &mut Vec<u8>) {
        let label = self.colorize(
            Self::severity_label(issue.severity),
            Self::severity_color(issue.severity),
        );
        let location = match issue.column {
            Some(column) => format!("Line {}:{column}", issue.line),
            None => format!("Line {}", issue.line),
        };
        writeln!(output, "{label} {location} - {}", issue.message).ok();

        if self.verbose > 0 {
            writeln!(output, "  Rule: {}", issue.rule).ok();
            if let Some(description) = &issue.rule_description {
                writeln!(output, "  Description: {description}").ok();
            }
        }
        if let Some(suggestion) = &issue.suggestion {
            writeln!(output, "  Suggestion: {suggestion}").ok();
        }
        if self.verbose > 0 {
            if let Some(snippet) = &issue.code_snippet {
                writeln!(output, "  Code: {snippet}").ok();
            }
            if let Some(corrected) = &issue.corrected_code {
                writeln!(output, "  Corrected: {corrected}").ok();
            }
        }
        writeln!(output).ok();
    }

    fn format_report(&self, report: &CheckReport, output: &mut Vec<u8>) {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(output, "{rule}").ok();
        writeln!(output, "RPG Check Result").ok();
        writeln!(output, "{rule}").ok();
        writeln!(output).ok();

        if let Some(path) = &report.file_path {
            writeln!(output, "File: {path}").ok();
            writeln!(output).ok();
        }

        Self::format_summary(&report.summary, output);
        if self.verbose > 0 {
            Self::format_spec_counts(&report.summary, output);
        }

        if report.issues.is_empty() {
            writeln!(output, "No issues found.").ok();
            writeln!(output).ok();
        } else {
            writeln!(output, "[Issues]").ok();
            writeln!(output).ok();
            for issue in &report.issues {
                self.format_issue(issue, output);
            }
        }

        let verdict = if report.valid {
            self.colorize("✓ PASSED", ansi::GREEN)
        } else {
            self.colorize("✗ FAILED", ansi::RED)
        };
        writeln!(output, "{rule}").ok();
        writeln!(output, "Result: {verdict}").ok();
        writeln!(output, "{rule}").ok();
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[CheckReport]) -> Result<String> {
        let mut output = Vec::new();

        for (index, report) in reports.iter().enumerate() {
            if index > 0 {
                writeln!(output).ok();
            }
            self.format_report(report, &mut output);
        }

        if reports.len() > 1 {
            let total = CheckReport::aggregate(reports);
            let failed = reports.iter().filter(|report| !report.valid).count();
            writeln!(output).ok();
            writeln!(
                output,
                "Checked {} files ({failed} failed): {} errors, {} warnings, {} infos",
                reports.len(),
                total.errors,
                total.warnings,
                total.infos
            )
            .ok();
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
