use std::io::IsTerminal;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use indicatif::{ProgressBar, ProgressStyle};

/// Progress bar for per-file work (checking or counting sources).
///
/// Hidden in quiet mode or when stderr is not a TTY.
#[derive(Clone)]
pub struct ScanProgress {
    progress_bar: ProgressBar,
    counter: Arc<AtomicU64>,
}

impl ScanProgress {
    /// Creates a progress bar labelled with `action` (e.g. "Checking").
    ///
    /// The bar draws on stderr so that stdout stays clean for reports.
    #[must_use]
    pub fn new(total: u64, quiet: bool, action: &str) -> Self {
        let is_tty = std::io::stderr().is_terminal();
        Self::new_with_visibility(total, action, !quiet && is_tty)
    }

    fn new_with_visibility(total: u64, action: &str, visible: bool) -> Self {
        let progress_bar = if visible {
            Self::create_visible_progress_bar(total, action)
        } else {
            ProgressBar::hidden()
        };

        Self {
            progress_bar,
            counter: Arc::new(AtomicU64::new(0)),
        }
    }

    fn create_visible_progress_bar(total: u64, action: &str) -> ProgressBar {
        let template = format!(
            "{{spinner:.green}} {action} [{{bar:40.cyan/blue}}] {{pos}}/{{len}} files ({{percent}}%)"
        );
        let pb = ProgressBar::new(total);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(&template)
                .expect("valid template")
                .progress_chars("█▓░"),
        );
        pb
    }

    /// Thread-safe for use with rayon parallel iterators.
    pub fn inc(&self) {
        let count = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
        self.progress_bar.set_position(count);
    }

    #[must_use]
    pub fn position(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Finishes the progress bar and clears it from the terminal.
    pub fn finish(&self) {
        self.progress_bar.finish_and_clear();
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
