//! User-defined pattern rules and their JSON store.

mod compiled;
mod model;
mod store;

pub use compiled::{CompiledRule, CompiledRuleSet};
pub use model::{CustomRule, CustomRulesConfig, RULES_FILE_VERSION, RulePatch};
pub use store::{CustomRuleStore, DEFAULT_RULES_FILE};

#[cfg(test)]
pub(crate) fn sample_rule(id: &str, pattern: Option<&str>) -> CustomRule {
    CustomRule {
        id: id.to_string(),
        name: format!("{id} rule"),
        description: String::new(),
        category: crate::checker::Category::BestPractice,
        severity: crate::checker::Severity::Warning,
        enabled: true,
        pattern: pattern.map(str::to_string),
        message: format!("{id} matched"),
        suggestion: None,
    }
}
