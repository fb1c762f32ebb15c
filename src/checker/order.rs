use crate::parser::analyzer::is_name_continuation;
use crate::parser::{ClassifiedLine, PSpecFields, SpecType};

use super::{Category, CheckLevel, Checker, Issue};

/// Accumulator for the specification-order fold.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrderState {
    /// Canonical index of the last main-section specification seen.
    pub last_index: Option<usize>,
    /// Between a `P ... B` and its `P ... E`.
    pub in_procedure: bool,
    last_type: Option<SpecType>,
}

impl OrderState {
    /// Folds one line into the state, returning an issue when the line's
    /// specification type belongs before the previous one.
    pub fn step(&mut self, line: &ClassifiedLine) -> Option<Issue> {
        if !line.is_code() {
            return None;
        }
        let spec = line.spec_type;

        if spec == SpecType::P && !is_name_continuation(&line.raw) && line.char_len() >= 24 {
            match line.char_at(PSpecFields::BEGIN_END.start) {
                Some('B' | 'b') => self.in_procedure = true,
                Some('E' | 'e') => self.in_procedure = false,
                _ => {}
            }
        }

        if self.in_procedure && matches!(spec, SpecType::D | SpecType::C) {
            return None;
        }

        let index = spec.order_index()?;
        let issue = match (self.last_index, self.last_type) {
            (Some(last), Some(previous)) if index < last => Some(
                Issue::error(
                    Category::Structure,
                    line.line_number,
                    "SPEC_ORDER",
                    format!("{spec} specification appears after {previous} specification"),
                )
                .at_column(6)
                .with_description(
                    "Specifications must appear in the order H, F, D, P, I, C, O.",
                )
                .with_suggestion(format!(
                    "Move this {spec} specification before the {previous} specifications"
                ))
                .with_line(line),
            ),
            _ => None,
        };
        self.last_index = Some(index);
        self.last_type = Some(spec);
        issue
    }
}

/// Reports specifications that appear out of canonical order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SpecOrderChecker;

impl Checker for SpecOrderChecker {
    fn name(&self) -> &'static str {
        "spec-order"
    }

    fn check(&self, lines: &[ClassifiedLine], _level: CheckLevel) -> Vec<Issue> {
        let mut state = OrderState::default();
        lines.iter().filter_map(|line| state.step(line)).collect()
    }
}

#[cfg(test)]
#[path = "order_tests.rs"]
mod tests;
