use indexmap::IndexMap;
use serde::Serialize;

use crate::parser::{ClassifiedLine, SpecType};

/// Line count per specification type, in [`SpecType::ALL`] order.
pub type SpecCounts = IndexMap<SpecType, usize>;

/// Counts with an entry for every specification type.
#[must_use]
pub fn zeroed_spec_counts() -> SpecCounts {
    SpecType::ALL.iter().map(|&spec| (spec, 0)).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStatistics {
    pub total_lines: usize,
    pub comment_lines: usize,
    /// Lines that are neither comments nor blank.
    pub code_lines: usize,
    pub continuation_lines: usize,
    pub empty_lines: usize,
    pub specification_counts: SpecCounts,
}

impl Default for LineStatistics {
    fn default() -> Self {
        Self {
            total_lines: 0,
            comment_lines: 0,
            code_lines: 0,
            continuation_lines: 0,
            empty_lines: 0,
            specification_counts: zeroed_spec_counts(),
        }
    }
}

impl LineStatistics {
    #[must_use]
    pub fn collect(lines: &[ClassifiedLine]) -> Self {
        let mut stats = lines.iter().fold(Self::default(), |mut stats, line| {
            stats.total_lines += 1;
            stats.comment_lines += usize::from(line.is_comment);
            stats.continuation_lines += usize::from(line.is_continuation());
            stats.empty_lines += usize::from(line.is_blank());
            *stats.specification_counts.entry(line.spec_type).or_default() += 1;
            stats
        });
        stats.code_lines = stats.total_lines - stats.comment_lines - stats.empty_lines;
        stats
    }

    /// Adds another file's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        self.total_lines += other.total_lines;
        self.comment_lines += other.comment_lines;
        self.code_lines += other.code_lines;
        self.continuation_lines += other.continuation_lines;
        self.empty_lines += other.empty_lines;
        for (spec, count) in &other.specification_counts {
            *self.specification_counts.entry(*spec).or_default() += count;
        }
    }

    #[must_use]
    pub fn count(&self, spec: SpecType) -> usize {
        self.specification_counts.get(&spec).copied().unwrap_or(0)
    }
}

#[cfg(test)]
#[path = "line_stats_tests.rs"]
mod tests;
