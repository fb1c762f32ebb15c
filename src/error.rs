use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpgGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Invalid pattern in custom rule '{rule}'")]
    InvalidRegex {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Custom rules error: {0}")]
    CustomRules(String),

    #[error("Custom rule not found: {0}")]
    RuleNotFound(String),

    #[error("Custom rule already exists: {0}")]
    RuleAlreadyExists(String),
}

impl RpgGuardError {
    /// Short category label used as the heading of stderr diagnostics.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } | Self::Io(_) => "IO",
            Self::InvalidPattern { .. } => "Pattern",
            Self::JsonSerialize(_) => "JSON",
            Self::InvalidRegex { .. }
            | Self::CustomRules(_)
            | Self::RuleNotFound(_)
            | Self::RuleAlreadyExists(_) => "Rules",
        }
    }

    /// Human-readable detail from the underlying source error, if any.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileRead { source, .. } => Some(source.to_string()),
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::InvalidRegex { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint printed under the error.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the syntax of .rpgle-guard.toml or run `rpgle-guard init`")
            }
            Self::RuleNotFound(_) => Some("Run `rpgle-guard rules list` to see known rule ids"),
            Self::RuleAlreadyExists(_) => {
                Some("Choose a different id or remove the existing rule first")
            }
            Self::InvalidRegex { .. } => Some("Custom rule patterns use Rust regex syntax"),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RpgGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
