use super::columns::{Span, char_at};
use super::line::{
    ClassifiedLine, ColumnData, ContinuationKind, CSpecFields, DSpecFields, FSpecFields,
    PSpecFields,
};
use super::spec_type::SpecType;

const FREE_SENTINEL: &str = "**FREE";
const SPEC_LETTER_INDEX: usize = 5;
const MARKER_INDEX: usize = 6;

/// Classifies every physical line of `source`.
///
/// Lines are split on `\n` (trailing `\r` characters are dropped), so every segment,
/// including blank ones and a final empty one, yields a line.
#[must_use]
pub fn classify(source: &str) -> Vec<ClassifiedLine> {
    source
        .split('\n')
        .enumerate()
        .map(|(index, raw)| classify_line(index + 1, raw.trim_end_matches('\r')))
        .collect()
}

/// Classifies a single line. Pure: the same `raw` always gives the same result.
#[must_use]
pub fn classify_line(line_number: usize, raw: &str) -> ClassifiedLine {
    let spec_type = detect_spec_type(raw);
    ClassifiedLine {
        line_number,
        raw: raw.to_string(),
        trimmed: raw.trim().to_string(),
        spec_type,
        is_comment: char_at(raw, MARKER_INDEX) == Some('*'),
        continuation: detect_continuation(raw, spec_type),
        columns: ColumnData::extract(spec_type, raw),
    }
}

/// Decides the specification type from the `**FREE` sentinel and column 6.
#[must_use]
pub fn detect_spec_type(raw: &str) -> SpecType {
    if raw.trim().starts_with(FREE_SENTINEL) {
        return SpecType::Free;
    }
    match char_at(raw, SPEC_LETTER_INDEX) {
        None => SpecType::Unknown,
        Some('*') => SpecType::Comment,
        Some(letter) => SpecType::from_letter(letter).unwrap_or(SpecType::Unknown),
    }
}

/// Field whose blankness marks a continuation line for `spec_type`.
const fn continuation_key(spec_type: SpecType) -> Option<Span> {
    match spec_type {
        SpecType::F | SpecType::O | SpecType::I => Some(FSpecFields::FILE_NAME),
        SpecType::D => Some(DSpecFields::NAME),
        SpecType::P => Some(PSpecFields::NAME),
        SpecType::C => Some(CSpecFields::FACTOR1),
        SpecType::H | SpecType::Free | SpecType::Comment | SpecType::Unknown => None,
    }
}

fn detect_continuation(raw: &str, spec_type: SpecType) -> Option<ContinuationKind> {
    if !spec_type.is_fixed_spec() {
        return None;
    }
    if matches!(char_at(raw, MARKER_INDEX), Some('-' | '+')) {
        return Some(ContinuationKind::Marker);
    }
    let key = continuation_key(spec_type)?;
    (key.fits(raw) && key.is_blank(raw)).then_some(ContinuationKind::BlankField)
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
