//! Column-shift detection for D (definition) specifications.
//!
//! A single inserted or deleted blank moves every later D-spec field, and the
//! compiler then reports confusing errors far from the real cause. These
//! checks look for the tell-tale traces of such a shift and, for the common
//! "size and type fused together" case, propose a re-aligned line.

use crate::parser::analyzer::is_name_continuation;
use crate::parser::columns::{char_at, char_len, slice_from};
use crate::parser::{ClassifiedLine, ContinuationKind, DSpecFields, Span, SpecType};

use super::{Category, CheckLevel, Checker, Issue};

const VALID_DECLARATION_TYPES: &[&str] = &["PR", "PI", "DS", "S", "C", "E"];
const MISPLACED_DECLARATION_TYPES: &[&str] = &["DS", "PR", "PI"];
const VALID_DATA_TYPES: &str = "ABCDFGINOPSTUZ*";
const MAX_DECIMAL_POSITIONS: u32 = 63;

/// Keywords that may start a nameless D line.
const NAMELESS_KEYWORDS: &[&str] = &[
    "TEMPLATE",
    "LIKEDS",
    "LIKE",
    "EXTPROC",
    "EXTPGM",
    "BASED",
    "QUALIFIED",
];

/// Keywords whose appearance in the size field betrays a leftward shift.
const SHIFT_KEYWORDS: &[&str] = &[
    "LIKEDS",
    "LIKE",
    "CONST",
    "VARYING",
    "VALUE",
    "INZ",
    "DIM",
    "EXTPROC",
    "EXTPGM",
    "OVERLAY",
    "BASED",
    "TEMPLATE",
    "QUALIFIED",
    "NOOPT",
    "STATIC",
    "DTAARA",
    "PREFIX",
    "EXPORT",
    "IMPORT",
    "ALIGN",
    "OPTIONS",
    "ASCEND",
    "DESCEND",
    "CTDATA",
];
const SHIFT_KEYWORD_PREFIX: usize = 7;

const SPEC_LETTER: Span = Span::at(5);
/// Columns 22-23: where a declaration type lands after a one-column shift.
const SHIFTED_DECLARATION: Span = Span::new(21, 23);
/// Columns 33-42: size through decimals, where bleeding keywords land.
const SHIFT_AREA: Span = Span::new(32, 42);
/// Columns 33-40: size plus data type.
const SIZE_AND_TYPE: Span = Span::new(32, 40);
/// Width the fused-token correction pads the line to.
const CORRECTION_WIDTH: usize = 42;

/// Checks D lines for column-shift corruption.
#[derive(Debug, Default, Clone, Copy)]
pub struct ColumnShiftDetector;

impl Checker for ColumnShiftDetector {
    fn name(&self) -> &'static str {
        "column-shift"
    }

    fn check(&self, lines: &[ClassifiedLine], level: CheckLevel) -> Vec<Issue> {
        lines
            .iter()
            .filter(|line| line.spec_type == SpecType::D)
            .flat_map(|line| check_line(line, level))
            .collect()
    }
}

/// Runs every D-spec check that applies to `line` at `level`.
#[must_use]
pub fn check_line(line: &ClassifiedLine, level: CheckLevel) -> Vec<Issue> {
    let mut issues = Vec::new();
    if line.is_comment {
        return issues;
    }

    issues.extend(check_spec_letter(line));

    match line.continuation {
        Some(ContinuationKind::Marker) => return issues,
        Some(ContinuationKind::BlankField) => {
            issues.extend(check_missing_name(line));
            return issues;
        }
        None => {}
    }

    if is_name_continuation(&line.raw) {
        if level.at_least_standard() {
            issues.extend(check_period_before_name_marker(line));
        }
        return issues;
    }

    issues.extend(check_position_order(line));
    if level.at_least_standard() {
        issues.extend(check_declaration_type(line));
        issues.extend(check_misplaced_declaration(line));
        issues.extend(check_trailing_period(line));
        issues.extend(check_data_type(line));
        issues.extend(check_size_field(line));
        issues.extend(check_decimal_positions(line));
        issues.extend(check_keyword_bleed(line));
    }
    issues.extend(check_fused_size_and_type(line));
    if level.is_strict() {
        issues.extend(check_name_position(line));
    }
    issues
}

fn check_spec_letter(line: &ClassifiedLine) -> Option<Issue> {
    let letter = char_at(&line.raw, SPEC_LETTER.start)?;
    (!letter.eq_ignore_ascii_case(&'D')).then(|| {
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_COL6",
            format!("Column 6 of a D specification must be 'D', found '{letter}'"),
        )
        .at_span(SPEC_LETTER)
        .with_line(line)
    })
}

fn is_acceptable_nameless(raw: &str) -> bool {
    if DSpecFields::DECLARATION_TYPE.extract(raw).is_some() {
        return true;
    }
    let keywords = slice_from(raw, DSpecFields::KEYWORDS.start)
        .trim()
        .to_ascii_uppercase();
    NAMELESS_KEYWORDS
        .iter()
        .any(|keyword| keywords.starts_with(keyword))
}

/// A blank name with anything after column 21 is a definition that lost its
/// name, unless it is a prototype, a declaration or a nameless keyword.
fn check_missing_name(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    let rest = slice_from(raw, DSpecFields::NAME.end);
    if rest.trim().is_empty() || is_acceptable_nameless(raw) {
        return None;
    }
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_MISSING_NAME",
            "The name (columns 7-21) is blank but the definition fields are filled",
        )
        .at_span(DSpecFields::NAME)
        .with_description(
            "A definition needs a name. Only TEMPLATE lines, prototypes and keyword \
             continuation lines may leave it blank.",
        )
        .with_suggestion("Put the variable or data structure name in columns 7-21")
        .with_line(line),
    )
}

fn parse_position(span: Span, raw: &str) -> Option<u64> {
    let value = span.extract(raw)?;
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

fn check_position_order(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if !DSpecFields::TO_LENGTH.fits(raw) {
        return None;
    }
    let from = parse_position(DSpecFields::FROM_POSITION, raw)?;
    let to = parse_position(DSpecFields::TO_LENGTH, raw)?;
    (from > to).then(|| {
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_POSITION_ERROR",
            format!("From position ({from}) is greater than to position ({to})"),
        )
        .with_columns(
            DSpecFields::FROM_POSITION.first_column(),
            DSpecFields::TO_LENGTH.last_column(),
        )
        .with_description("The from position (26-32) must not exceed the to position (33-39).")
        .with_suggestion("Check the from and to values; a shifted line often swaps them")
        .with_line(line)
    })
}

fn check_declaration_type(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if !DSpecFields::DECLARATION_TYPE.fits(raw) {
        return None;
    }
    let declared = DSpecFields::DECLARATION_TYPE.extract(raw)?;
    let upper = declared.to_ascii_uppercase();
    if VALID_DECLARATION_TYPES.contains(&upper.as_str()) {
        return None;
    }
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_DECL_TYPE",
            format!("Invalid declaration type '{declared}' in columns 24-25"),
        )
        .at_span(DSpecFields::DECLARATION_TYPE)
        .with_description("The declaration type must be one of PR, PI, DS, S, C or E.")
        .with_suggestion("Check whether the line is shifted left or right")
        .with_line(line),
    )
}

fn check_misplaced_declaration(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    let shifted = SHIFTED_DECLARATION.slice(raw).trim().to_ascii_uppercase();
    let long_form = MISPLACED_DECLARATION_TYPES.contains(&shifted.as_str())
        && DSpecFields::DECLARATION_TYPE.is_blank(raw);

    let short_form = matches!(char_at(raw, 21), Some('S' | 's' | 'C' | 'c'))
        && char_at(raw, 22) == Some(' ')
        && matches!(char_at(raw, 23), None | Some(' '));

    if !long_form && !short_form {
        return None;
    }
    let found = SHIFTED_DECLARATION.slice(raw).trim();
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_DECL_TYPE_MISPLACED",
            format!("Declaration type '{found}' starts in column 22 instead of column 24"),
        )
        .with_columns(
            SHIFTED_DECLARATION.first_column(),
            DSpecFields::DECLARATION_TYPE.last_column(),
        )
        .with_description("The declaration type belongs in columns 24-25.")
        .with_suggestion("Move the declaration type two columns to the right")
        .with_line(line),
    )
}

fn ends_with_single_period(text: &str) -> bool {
    text.ends_with('.') && !text.ends_with("...")
}

fn trailing_period_issue(line: &ClassifiedLine, name: &str) -> Issue {
    Issue::error(
        Category::Syntax,
        line.line_number,
        "D_SPEC_TRAILING_PERIOD",
        format!("Name '{name}' ends with a period"),
    )
    .at_span(DSpecFields::NAME)
    .with_description(
        "A single trailing period is not valid in a name; only '...' continues a long name.",
    )
    .with_suggestion("Remove the period, or use '...' to continue the name on the next line")
    .with_line(line)
}

fn check_trailing_period(line: &ClassifiedLine) -> Option<Issue> {
    let name = DSpecFields::NAME.slice(&line.raw).trim_end();
    ends_with_single_period(name).then(|| trailing_period_issue(line, name.trim_start()))
}

/// On a `...` line only the name text in front of the marker is checked.
fn check_period_before_name_marker(line: &ClassifiedLine) -> Option<Issue> {
    let area = crate::parser::analyzer::code_area(&line.raw);
    let name = area.strip_suffix("...")?;
    let name = slice_from(name, DSpecFields::NAME.start).trim();
    name.ends_with('.')
        .then(|| trailing_period_issue(line, name))
}

fn check_data_type(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if !DSpecFields::DATA_TYPE.fits(raw) {
        return None;
    }
    let data_type = char_at(raw, DSpecFields::DATA_TYPE.start)?;
    if data_type.is_whitespace() || VALID_DATA_TYPES.contains(data_type.to_ascii_uppercase()) {
        return None;
    }
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_DATATYPE",
            format!("Invalid data type '{data_type}' in column 40"),
        )
        .at_span(DSpecFields::DATA_TYPE)
        .with_description("Column 40 holds a single data type letter (A, P, S, I, ...) or blank.")
        .with_suggestion("A letter in column 40 that is not a type usually means the line shifted")
        .with_line(line),
    )
}

fn check_size_field(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if !DSpecFields::TO_LENGTH.fits(raw) {
        return None;
    }
    let size = DSpecFields::TO_LENGTH.extract(raw)?;
    if size.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if size == "*" {
        // A lone '*' anywhere but column 39 is not a shifted pointer.
        if char_at(raw, DSpecFields::TO_LENGTH.end - 1) != Some('*') {
            return None;
        }
        return Some(
            Issue::error(
                Category::Structure,
                line.line_number,
                "D_SPEC_POINTER_POSITION",
                "Pointer type '*' is in column 39 instead of column 40",
            )
            .at_span(DSpecFields::TO_LENGTH)
            .with_description("A pointer is declared with '*' in the data type column (40).")
            .with_suggestion("Move '*' one column to the right")
            .with_line(line),
        );
    }
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_SIZE_FIELD",
            format!("Size field (columns 33-39) must be numeric, found '{size}'"),
        )
        .at_span(DSpecFields::TO_LENGTH)
        .with_description("The length/to-position field holds digits only, right-justified.")
        .with_suggestion("Check the line for a column shift")
        .with_line(line),
    )
}

fn check_decimal_positions(line: &ClassifiedLine) -> Option<Issue> {
    let decimals = DSpecFields::DECIMAL_POSITIONS.extract(&line.raw)?;
    let valid = decimals.bytes().all(|b| b.is_ascii_digit())
        && decimals
            .parse::<u32>()
            .is_ok_and(|value| value <= MAX_DECIMAL_POSITIONS);
    if valid {
        return None;
    }
    Some(
        Issue::warning(
            Category::Structure,
            line.line_number,
            "D_SPEC_DECIMAL",
            format!("Invalid decimal positions '{decimals}' in columns 41-42"),
        )
        .at_span(DSpecFields::DECIMAL_POSITIONS)
        .with_description(format!(
            "Decimal positions must be a number from 0 to {MAX_DECIMAL_POSITIONS}."
        ))
        .with_suggestion("Right-justify the decimal count in columns 41-42")
        .with_line(line),
    )
}

fn check_keyword_bleed(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if char_len(raw) <= DSpecFields::KEYWORDS.start {
        return None;
    }
    let size = DSpecFields::TO_LENGTH.slice(raw).to_ascii_uppercase();
    let keyword = SHIFT_KEYWORDS.iter().find(|keyword| {
        let prefix = &keyword[..keyword.len().min(SHIFT_KEYWORD_PREFIX)];
        size.contains(prefix)
    })?;
    Some(
        Issue::error(
            Category::Structure,
            line.line_number,
            "D_SPEC_COLUMN_SHIFT",
            format!("Keyword '{keyword}' appears in the size field (columns 33-39)"),
        )
        .with_columns(SHIFT_AREA.first_column(), SHIFT_AREA.last_column())
        .with_description("Keywords start in column 44; text in columns 33-39 must be a size.")
        .with_suggestion(format!("Move '{keyword}' to the keyword area starting at column 44"))
        .with_line(line),
    )
}

/// Splits a fused size token such as `10I` into digits and a type letter.
fn split_fused_token(size: &str) -> Option<(&str, char)> {
    let type_char = size.chars().last()?;
    let digits = &size[..size.len() - type_char.len_utf8()];
    let fused = !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (type_char.is_ascii_alphabetic() || type_char == '*');
    fused.then_some((digits, type_char))
}

/// Re-aligns a fused token: digits right-justified in 33-39, type in 40.
#[must_use]
pub fn realign_size_and_type(raw: &str, digits: &str, type_char: char) -> String {
    let mut chars: Vec<char> = raw.chars().collect();
    if chars.len() < CORRECTION_WIDTH {
        chars.resize(CORRECTION_WIDTH, ' ');
    }
    let width = DSpecFields::TO_LENGTH.end - DSpecFields::TO_LENGTH.start;
    let replacement = format!("{digits:>width$}{}", type_char.to_ascii_uppercase());
    chars.splice(SIZE_AND_TYPE.start..SIZE_AND_TYPE.end, replacement.chars());
    chars.into_iter().collect()
}

fn check_fused_size_and_type(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    let size = DSpecFields::TO_LENGTH.extract(raw)?;
    let (digits, type_char) = split_fused_token(size)?;
    let upper = type_char.to_ascii_uppercase();

    let issue = Issue::error(
        Category::Structure,
        line.line_number,
        "D_SPEC_COLUMN_SHIFT",
        format!("Size field (columns 33-39) holds '{size}', a size fused with a data type"),
    )
    .with_columns(SIZE_AND_TYPE.first_column(), SIZE_AND_TYPE.last_column())
    .with_description(format!(
        "Columns 33-39 hold only the size and column 40 the type: right-justify '{digits}' \
         in 33-39 and put '{upper}' in column 40."
    ))
    .with_suggestion(format!(
        "Realign the line: size '{digits}' in columns 33-39, data type '{upper}' in column 40"
    ))
    .with_line(line);

    // Only offer a rewrite when the split-off letter is a real data type.
    if VALID_DATA_TYPES.contains(upper) {
        Some(issue.with_correction(realign_size_and_type(raw, digits, type_char)))
    } else {
        Some(issue)
    }
}

fn check_name_position(line: &ClassifiedLine) -> Option<Issue> {
    let raw = &line.raw;
    if !DSpecFields::DECLARATION_TYPE.fits(raw) || DSpecFields::NAME.is_blank(raw) {
        return None;
    }
    let first = char_at(raw, DSpecFields::NAME.start)?;
    let has_declaration = DSpecFields::DECLARATION_TYPE
        .extract(raw)
        .is_some_and(|decl| VALID_DECLARATION_TYPES.contains(&decl.to_ascii_uppercase().as_str()));
    let (message, suggestion) = match (has_declaration, first == ' ') {
        (true, true) => (
            "Standalone definitions should start their name in column 7",
            "Remove the leading space before the name",
        ),
        (false, false) => (
            "Subfield names should start in column 8",
            "Add a leading space before the subfield name",
        ),
        _ => return None,
    };
    Some(
        Issue::warning(
            Category::Structure,
            line.line_number,
            "D_SPEC_NAME_POSITION",
            message,
        )
        .at_span(DSpecFields::NAME)
        .with_suggestion(suggestion)
        .with_line(line),
    )
}

#[cfg(test)]
#[path = "column_shift_tests.rs"]
mod tests;
