use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::checker::CheckLevel;

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

pub const DEFAULT_MAX_LINE_LENGTH: usize = 100;

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckConfig {
    /// basic, standard or strict.
    #[serde(default)]
    pub level: CheckLevel,

    /// Measure line length in DBCS bytes (SO/SI framing included).
    #[serde(default)]
    pub consider_dbcs: bool,

    #[serde(default = "default_max_line_length")]
    pub max_line_length: usize,

    /// Rule ids whose issues are dropped from reports.
    #[serde(default)]
    pub disabled_rules: Vec<String>,

    /// Custom rules JSON file. Relative paths resolve against the working
    /// directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_rules: Option<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            level: CheckLevel::default(),
            consider_dbcs: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            disabled_rules: Vec::new(),
            custom_rules: None,
        }
    }
}

/// Source file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScannerConfig {
    /// Extensions (without the dot) treated as RPG source.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns for files and directories to skip.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Descend into subdirectories (default: true).
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
            exclude: Vec::new(),
            recursive: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub check: CheckConfig,

    #[serde(default)]
    pub scanner: ScannerConfig,
}

fn default_extensions() -> Vec<String> {
    vec![
        "rpgle".to_string(),
        "rpg".to_string(),
        "sqlrpgle".to_string(),
    ]
}

const fn default_max_line_length() -> usize {
    DEFAULT_MAX_LINE_LENGTH
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
