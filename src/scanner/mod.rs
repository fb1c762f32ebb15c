mod filter;

pub use filter::{FileFilter, GlobFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::ScannerConfig;
use crate::error::Result;

/// Path argument that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
    recursive: bool,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F, recursive: bool) -> Self {
        Self { filter, recursive }
    }

    fn scan_impl(&self, root: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };
        WalkDir::new(root)
            .max_depth(max_depth)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|e| e.file_type().is_file() && self.filter.should_include(e.path()))
            .map(walkdir::DirEntry::into_path)
            .collect()
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        Ok(self.scan_impl(root))
    }
}

/// One source to check: a file on disk or standard input.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceInput {
    Stdin,
    File(PathBuf),
}

impl SourceInput {
    /// Name used in reports.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            Self::Stdin => "<stdin>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// Expands command-line paths into the sources to check.
///
/// `-` means stdin, directories are scanned through the filter, and files
/// named explicitly are always kept. The result is de-duplicated and keeps
/// the argument order.
///
/// # Errors
/// Returns an error if an exclude pattern is invalid or a scan fails.
pub fn collect_sources(
    paths: &[PathBuf],
    config: &ScannerConfig,
    extra_excludes: &[String],
) -> Result<Vec<SourceInput>> {
    let mut excludes = config.exclude.clone();
    excludes.extend_from_slice(extra_excludes);
    let scanner = DirectoryScanner::new(
        GlobFilter::new(config.extensions.clone(), &excludes)?,
        config.recursive,
    );

    let mut sources = Vec::new();
    for path in paths {
        if path.as_os_str() == STDIN_PATH {
            sources.push(SourceInput::Stdin);
        } else if path.is_dir() {
            sources.extend(scanner.scan(path)?.into_iter().map(SourceInput::File));
        } else {
            sources.push(SourceInput::File(path.clone()));
        }
    }

    let mut seen = std::collections::HashSet::new();
    sources.retain(|source| seen.insert(source.clone()));
    Ok(sources)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
