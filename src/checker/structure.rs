use crate::parser::ClassifiedLine;

use super::{
    CheckLevel, Checker, ColumnRulesChecker, ColumnShiftDetector, Issue, LineLengthChecker,
    SpecOrderChecker,
};

/// Layout checks: specification order, per-type columns, D-spec column
/// shifts and line length.
#[derive(Debug, Default, Clone, Copy)]
pub struct StructureChecker {
    line_length: LineLengthChecker,
}

impl StructureChecker {
    #[must_use]
    pub const fn new(max_line_length: usize, consider_dbcs: bool) -> Self {
        Self {
            line_length: LineLengthChecker::new(max_line_length, consider_dbcs),
        }
    }

    fn passes(&self) -> [&dyn Checker; 4] {
        [
            &SpecOrderChecker,
            &ColumnRulesChecker,
            &ColumnShiftDetector,
            &self.line_length,
        ]
    }
}

impl Checker for StructureChecker {
    fn name(&self) -> &'static str {
        "structure"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        self.passes()
            .iter()
            .flat_map(|pass| pass.check(lines, level))
            .collect()
    }
}

#[cfg(test)]
#[path = "structure_tests.rs"]
mod tests;
