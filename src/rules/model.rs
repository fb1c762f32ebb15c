use serde::{Deserialize, Serialize};

use crate::checker::{Category, Severity};

pub const RULES_FILE_VERSION: &str = "1.0.0";

/// A user-defined, pattern-based rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRule {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Case-insensitive regex tested against each raw source line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

/// On-disk layout of the custom rules file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRulesConfig {
    #[serde(default = "default_version")]
    pub version: String,
    pub rules: Vec<CustomRule>,
}

impl Default for CustomRulesConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            rules: Vec::new(),
        }
    }
}

/// Partial update for an existing rule. The id cannot be changed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RulePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
    pub severity: Option<Severity>,
    pub enabled: Option<bool>,
    pub pattern: Option<String>,
    pub message: Option<String>,
    pub suggestion: Option<String>,
}

impl RulePatch {
    #[must_use]
    pub const fn enabled(enabled: bool) -> Self {
        Self {
            name: None,
            description: None,
            category: None,
            severity: None,
            enabled: Some(enabled),
            pattern: None,
            message: None,
            suggestion: None,
        }
    }

    pub fn apply(self, rule: &mut CustomRule) {
        if let Some(name) = self.name {
            rule.name = name;
        }
        if let Some(description) = self.description {
            rule.description = description;
        }
        if let Some(category) = self.category {
            rule.category = category;
        }
        if let Some(severity) = self.severity {
            rule.severity = severity;
        }
        if let Some(enabled) = self.enabled {
            rule.enabled = enabled;
        }
        if self.pattern.is_some() {
            rule.pattern = self.pattern;
        }
        if let Some(message) = self.message {
            rule.message = message;
        }
        if self.suggestion.is_some() {
            rule.suggestion = self.suggestion;
        }
    }
}

fn default_version() -> String {
    RULES_FILE_VERSION.to_string()
}

const fn default_true() -> bool {
    true
}
