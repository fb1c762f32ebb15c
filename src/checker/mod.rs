mod best_practice;
mod column_shift;
mod columns;
mod common_errors;
mod issue;
mod level;
mod line_length;
mod naming;
mod order;
mod structure;
mod syntax;

pub use best_practice::BestPracticeChecker;
pub use column_shift::{ColumnShiftDetector, realign_size_and_type};
pub use columns::ColumnRulesChecker;
pub use common_errors::CommonErrorsChecker;
pub use issue::{Category, Issue, Severity};
pub use level::CheckLevel;
pub use line_length::LineLengthChecker;
pub use naming::NamingChecker;
pub use order::{OrderState, SpecOrderChecker};
pub use structure::StructureChecker;
pub use syntax::SyntaxChecker;

use crate::parser::ClassifiedLine;

/// One analysis pass over a classified source file.
pub trait Checker {
    /// Short identifier used in diagnostics.
    fn name(&self) -> &'static str;

    /// Run the pass. Issues come back in line order per pass; the engine
    /// merges and sorts across passes.
    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
