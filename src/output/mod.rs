mod error_output;
mod json;
mod markdown;
mod progress;
mod stats;
mod text;

#[cfg(test)]
mod test_reports;

pub use error_output::{ErrorOutput, print_error_full, print_warning};
pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use progress::ScanProgress;
pub use stats::{
    FileStatistics, ProjectStatistics, StatsFormat, StatsFormatter, StatsJsonFormatter,
    StatsTextFormatter,
};
pub use text::TextFormatter;

use std::io::IsTerminal;

use crate::engine::CheckReport;
use crate::error::Result;

/// Trait for formatting check reports into various output formats.
pub trait OutputFormatter {
    /// Format the check reports into a string.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[CheckReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "markdown" | "md" => Ok(Self::Markdown),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl ColorMode {
    /// Resolves the mode for a stream that may or may not be a terminal.
    #[must_use]
    pub fn use_colors(self, is_terminal: bool) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            // Presence of NO_COLOR (any value) disables color.
            Self::Auto => std::env::var_os("NO_COLOR").is_none() && is_terminal,
        }
    }

    #[must_use]
    pub fn use_colors_on_stdout(self) -> bool {
        self.use_colors(std::io::stdout().is_terminal())
    }
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
