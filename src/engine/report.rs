use serde::Serialize;

use crate::checker::{Issue, Severity};
use crate::counter::{LineStatistics, SpecCounts, zeroed_spec_counts};

/// Aggregate counts for one checked source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_issues: usize,
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub checked_lines: usize,
    pub specification_counts: SpecCounts,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            total_issues: 0,
            errors: 0,
            warnings: 0,
            infos: 0,
            checked_lines: 0,
            specification_counts: zeroed_spec_counts(),
        }
    }
}

impl Summary {
    #[must_use]
    pub fn new(issues: &[Issue], stats: &LineStatistics) -> Self {
        let mut summary = Self {
            checked_lines: stats.total_lines,
            specification_counts: stats.specification_counts.clone(),
            ..Self::default()
        };
        summary.count_issues(issues);
        summary
    }

    fn count_issues(&mut self, issues: &[Issue]) {
        self.total_issues = issues.len();
        for issue in issues {
            match issue.severity {
                Severity::Error => self.errors += 1,
                Severity::Warning => self.warnings += 1,
                Severity::Info => self.infos += 1,
            }
        }
    }

    /// Adds another report's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        self.total_issues += other.total_issues;
        self.errors += other.errors;
        self.warnings += other.warnings;
        self.infos += other.infos;
        self.checked_lines += other.checked_lines;
        for (spec, count) in &other.specification_counts {
            *self.specification_counts.entry(*spec).or_default() += count;
        }
    }
}

/// Outcome of checking one source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    /// True when no error-severity issue was found.
    pub valid: bool,
    pub issues: Vec<Issue>,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_path: Option<String>,
}

impl CheckReport {
    #[must_use]
    pub fn new(issues: Vec<Issue>, summary: Summary, file_path: Option<&str>) -> Self {
        Self {
            valid: !issues.iter().any(Issue::is_error),
            issues,
            summary,
            file_path: file_path.map(str::to_string),
        }
    }

    #[must_use]
    pub fn has_warnings(&self) -> bool {
        self.summary.warnings > 0
    }

    /// Summary across several reports.
    #[must_use]
    pub fn aggregate(reports: &[Self]) -> Summary {
        reports.iter().fold(Summary::default(), |mut total, report| {
            total.merge(&report.summary);
            total
        })
    }
}
