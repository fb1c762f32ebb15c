mod line_stats;

pub use line_stats::{LineStatistics, SpecCounts, zeroed_spec_counts};
