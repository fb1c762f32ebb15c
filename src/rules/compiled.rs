use regex::{Regex, RegexBuilder};

use crate::checker::Issue;
use crate::error::RpgGuardError;
use crate::parser::ClassifiedLine;

use super::model::CustomRule;

/// An enabled rule with its pattern compiled.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    rule: CustomRule,
    pattern: Regex,
}

impl CompiledRule {
    #[must_use]
    pub const fn rule(&self) -> &CustomRule {
        &self.rule
    }

    /// Issue for `line` when the pattern matches. Comments never match.
    #[must_use]
    pub fn apply(&self, line: &ClassifiedLine) -> Option<Issue> {
        if line.is_comment || !self.pattern.is_match(&line.raw) {
            return None;
        }
        let rule = &self.rule;
        let mut issue = Issue::new(
            rule.severity,
            rule.category,
            line.line_number,
            &rule.id,
            rule.message.clone(),
        )
        .with_line(line);
        if !rule.description.is_empty() {
            issue = issue.with_description(rule.description.clone());
        }
        if let Some(suggestion) = &rule.suggestion {
            issue = issue.with_suggestion(suggestion.clone());
        }
        Some(issue)
    }
}

/// Enabled custom rules ready to run against source lines.
#[derive(Debug, Clone, Default)]
pub struct CompiledRuleSet {
    rules: Vec<CompiledRule>,
}

impl CompiledRuleSet {
    /// Compile the enabled rules that carry a pattern. Invalid patterns are
    /// skipped and returned as diagnostics.
    pub fn compile<'a>(
        rules: impl IntoIterator<Item = &'a CustomRule>,
    ) -> (Self, Vec<RpgGuardError>) {
        let mut compiled = Vec::new();
        let mut diagnostics = Vec::new();

        for rule in rules.into_iter().filter(|rule| rule.enabled) {
            let Some(pattern) = rule.pattern.as_deref() else {
                continue;
            };
            match RegexBuilder::new(pattern).case_insensitive(true).build() {
                Ok(pattern) => compiled.push(CompiledRule {
                    rule: rule.clone(),
                    pattern,
                }),
                Err(source) => diagnostics.push(RpgGuardError::InvalidRegex {
                    rule: rule.id.clone(),
                    source,
                }),
            }
        }
        (Self { rules: compiled }, diagnostics)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledRule> {
        self.rules.iter()
    }

    /// Every match of every rule, line by line.
    #[must_use]
    pub fn check(&self, lines: &[ClassifiedLine]) -> Vec<Issue> {
        lines
            .iter()
            .flat_map(|line| self.rules.iter().filter_map(move |rule| rule.apply(line)))
            .collect()
    }
}

#[cfg(test)]
#[path = "compiled_tests.rs"]
mod tests;
