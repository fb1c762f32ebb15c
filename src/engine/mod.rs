//! Runs every checker over a source and assembles the report.

mod report;

pub use report::{CheckReport, Summary};

use std::collections::HashSet;

use crate::checker::{
    BestPracticeChecker, Category, CheckLevel, Checker, CommonErrorsChecker, Issue,
    NamingChecker, StructureChecker, SyntaxChecker,
};
use crate::config::{CheckConfig, DEFAULT_MAX_LINE_LENGTH};
use crate::counter::LineStatistics;
use crate::parser::{ClassifiedLine, SpecType, classify};
use crate::rules::CompiledRuleSet;

/// Subset of checks to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckScope {
    #[default]
    All,
    /// Specification order only, at basic level.
    Order,
    /// Column and line-length rules, at standard level.
    Columns,
    /// Naming rules, at standard level.
    Naming,
    /// Best-practice rules, at standard level.
    BestPractice,
}

impl std::str::FromStr for CheckScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "order" => Ok(Self::Order),
            "columns" => Ok(Self::Columns),
            "naming" => Ok(Self::Naming),
            "best-practice" | "best_practice" => Ok(Self::BestPractice),
            _ => Err(format!("Unknown check scope: {s}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngineOptions {
    pub level: CheckLevel,
    pub consider_dbcs: bool,
    pub max_line_length: usize,
    pub disabled_rules: Vec<String>,
    pub custom_rules: CompiledRuleSet,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            level: CheckLevel::default(),
            consider_dbcs: false,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
            disabled_rules: Vec::new(),
            custom_rules: CompiledRuleSet::default(),
        }
    }
}

impl EngineOptions {
    /// Options from the `[check]` config section; custom rules are compiled
    /// separately.
    #[must_use]
    pub fn from_config(config: &CheckConfig, custom_rules: CompiledRuleSet) -> Self {
        Self {
            level: config.level,
            consider_dbcs: config.consider_dbcs,
            max_line_length: config.max_line_length,
            disabled_rules: config.disabled_rules.clone(),
            custom_rules,
        }
    }
}

#[derive(Debug)]
pub struct Engine {
    level: CheckLevel,
    disabled_rules: HashSet<String>,
    structure: StructureChecker,
    naming: NamingChecker,
    best_practice: BestPracticeChecker,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl Engine {
    #[must_use]
    pub fn new(options: EngineOptions) -> Self {
        Self {
            level: options.level,
            disabled_rules: options.disabled_rules.into_iter().collect(),
            structure: StructureChecker::new(options.max_line_length, options.consider_dbcs),
            naming: NamingChecker::new(),
            best_practice: BestPracticeChecker::new(options.custom_rules),
        }
    }

    #[must_use]
    pub const fn level(&self) -> CheckLevel {
        self.level
    }

    /// Run every checker at the configured level.
    #[must_use]
    pub fn check_source(&self, code: &str, file_path: Option<&str>) -> CheckReport {
        self.check_scoped(code, file_path, CheckScope::All)
    }

    #[must_use]
    pub fn check_scoped(
        &self,
        code: &str,
        file_path: Option<&str>,
        scope: CheckScope,
    ) -> CheckReport {
        let lines = classify(code);
        if let Some(free) = lines.iter().find(|line| line.spec_type == SpecType::Free) {
            return unsupported_free_format(free, file_path);
        }

        let mut issues: Vec<Issue> = self
            .run(&lines, scope)
            .into_iter()
            .filter(|issue| !self.disabled_rules.contains(&issue.rule))
            .collect();
        issues.sort_by_key(|issue| (issue.line, issue.severity));

        let summary = Summary::new(&issues, &LineStatistics::collect(&lines));
        CheckReport::new(issues, summary, file_path)
    }

    fn run(&self, lines: &[ClassifiedLine], scope: CheckScope) -> Vec<Issue> {
        match scope {
            CheckScope::All => {
                let passes: [&dyn Checker; 5] = [
                    &self.structure,
                    &SyntaxChecker,
                    &self.naming,
                    &self.best_practice,
                    &CommonErrorsChecker,
                ];
                passes
                    .iter()
                    .flat_map(|pass| pass.check(lines, self.level))
                    .collect()
            }
            CheckScope::Order => self
                .structure
                .check(lines, CheckLevel::Basic)
                .into_iter()
                .filter(|issue| issue.rule == "SPEC_ORDER")
                .collect(),
            CheckScope::Columns => self
                .structure
                .check(lines, CheckLevel::Standard)
                .into_iter()
                .filter(|issue| issue.rule.contains("_SPEC_") || issue.rule == "LINE_LENGTH")
                .collect(),
            CheckScope::Naming => self.naming.check(lines, CheckLevel::Standard),
            CheckScope::BestPractice => self.best_practice.check(lines, CheckLevel::Standard),
        }
    }
}

/// Fully free-form sources are rejected as a whole.
fn unsupported_free_format(free: &ClassifiedLine, file_path: Option<&str>) -> CheckReport {
    let issue = Issue::error(
        Category::Structure,
        free.line_number,
        "UNSUPPORTED_FREE_FORMAT",
        "Fully free-form (**FREE) RPG source is not supported",
    )
    .at_column(1)
    .with_description("Only fixed-format and column-limited free-form RPG can be checked.")
    .with_line(free);
    let summary = Summary {
        total_issues: 1,
        errors: 1,
        ..Summary::default()
    };
    CheckReport::new(vec![issue], summary, file_path)
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
