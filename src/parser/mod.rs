//! Fixed-column line classification.
//!
//! Every physical line is classified once into a [`ClassifiedLine`]; all
//! checkers work on that immutable sequence.

pub mod analyzer;
mod classifier;
pub mod columns;
pub mod dbcs;
mod line;
mod spec_type;

pub use classifier::{classify, classify_line, detect_spec_type};
pub use columns::{Span, extract_column};
pub use line::{
    CSpecFields, ClassifiedLine, ColumnData, ContinuationKind, DSpecFields, FSpecFields,
    HSpecFields, PSpecFields,
};
pub use spec_type::SpecType;

#[cfg(test)]
pub(crate) mod test_fixtures;
