use std::io::Write;

use serde::Serialize;

use crate::counter::LineStatistics;
use crate::error::Result;
use crate::parser::SpecType;

#[derive(Debug, Clone, Serialize)]
pub struct FileStatistics {
    pub path: String,
    #[serde(flatten)]
    pub stats: LineStatistics,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStatistics {
    pub total_files: usize,
    pub total: LineStatistics,
    pub files: Vec<FileStatistics>,
}

impl ProjectStatistics {
    #[must_use]
    pub fn new(files: Vec<FileStatistics>) -> Self {
        let total = files
            .iter()
            .fold(LineStatistics::default(), |mut total, file| {
                total.merge(&file.stats);
                total
            });
        Self {
            total_files: files.len(),
            total,
            files,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for StatsFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown stats format: {s}")),
        }
    }
}

pub trait StatsFormatter {
    /// Format the project statistics into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, stats: &ProjectStatistics) -> Result<String>;
}

pub struct StatsTextFormatter;

impl StatsTextFormatter {
    fn spec_breakdown(stats: &LineStatistics) -> String {
        SpecType::CANONICAL_ORDER
            .into_iter()
            .chain([SpecType::Free])
            .filter_map(|spec| {
                let count = stats.count(spec);
                (count > 0).then(|| format!("{spec}={count}"))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl StatsFormatter for StatsTextFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        let mut output = Vec::new();

        for file in &stats.files {
            let s = &file.stats;
            writeln!(
                output,
                "{}: {} lines (code={}, comment={}, empty={}, continuation={})",
                file.path,
                s.total_lines,
                s.code_lines,
                s.comment_lines,
                s.empty_lines,
                s.continuation_lines
            )
            .ok();
            let breakdown = Self::spec_breakdown(s);
            if !breakdown.is_empty() {
                writeln!(output, "  specs: {breakdown}").ok();
            }
        }

        if !stats.files.is_empty() {
            writeln!(output).ok();
        }

        let total = &stats.total;
        writeln!(output, "Summary:").ok();
        writeln!(output, "  Files: {}", stats.total_files).ok();
        writeln!(output, "  Total lines: {}", total.total_lines).ok();
        writeln!(output, "  Code: {}", total.code_lines).ok();
        writeln!(output, "  Comments: {}", total.comment_lines).ok();
        writeln!(output, "  Empty: {}", total.empty_lines).ok();
        writeln!(output, "  Continuations: {}", total.continuation_lines).ok();
        for spec in SpecType::ALL {
            let count = total.count(spec);
            if count > 0 {
                writeln!(output, "  {} ({spec}): {count}", spec.description()).ok();
            }
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

pub struct StatsJsonFormatter;

impl StatsFormatter for StatsJsonFormatter {
    fn format(&self, stats: &ProjectStatistics) -> Result<String> {
        Ok(serde_json::to_string_pretty(stats)?)
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
