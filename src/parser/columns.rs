//! Column-position access to fixed-format source lines.
//!
//! RPG fields live at fixed positions. Positions here are 0-based character
//! indices; user-facing columns are 1-based. Lines are indexed by character
//! rather than byte so that non-ASCII text (DBCS literals, stray UTF-8) never
//! splits a code point.

/// Half-open character range `[start, end)` of a fixed-format field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A single-character field at `index`.
    #[must_use]
    pub const fn at(index: usize) -> Self {
        Self::new(index, index + 1)
    }

    /// Trimmed field value, `None` when absent or blank.
    #[must_use]
    pub fn extract(self, line: &str) -> Option<&str> {
        extract_column(line, self.start, self.end)
    }

    /// Untrimmed field text, clamped to the line length.
    #[must_use]
    pub fn slice(self, line: &str) -> &str {
        slice_chars(line, self.start, self.end)
    }

    /// True when the field text (clamped) contains only whitespace.
    #[must_use]
    pub fn is_blank(self, line: &str) -> bool {
        self.slice(line).trim().is_empty()
    }

    /// True when the line is long enough to contain the whole field.
    #[must_use]
    pub fn fits(self, line: &str) -> bool {
        char_len(line) >= self.end
    }

    /// 1-based first column of the field.
    #[must_use]
    pub const fn first_column(self) -> usize {
        self.start + 1
    }

    /// 1-based last column of the field.
    #[must_use]
    pub const fn last_column(self) -> usize {
        self.end
    }
}

/// Returns the trimmed text at `[start, end)`.
///
/// `None` when the line does not reach `start` or the trimmed text is empty.
/// A line shorter than `end` yields whatever text exists past `start`.
#[must_use]
pub fn extract_column(line: &str, start: usize, end: usize) -> Option<&str> {
    if char_len(line) <= start {
        return None;
    }
    let value = slice_chars(line, start, end).trim();
    (!value.is_empty()).then_some(value)
}

/// Character slice `[start, end)` clamped to the line, empty when out of range.
#[must_use]
pub fn slice_chars(line: &str, start: usize, end: usize) -> &str {
    if start >= end {
        return "";
    }
    let from = byte_offset(line, start);
    let to = byte_offset(line, end);
    &line[from..to]
}

/// Everything from character `start` to the end of the line.
#[must_use]
pub fn slice_from(line: &str, start: usize) -> &str {
    &line[byte_offset(line, start)..]
}

/// Character at 0-based `index`.
#[must_use]
pub fn char_at(line: &str, index: usize) -> Option<char> {
    if line.is_ascii() {
        return line.as_bytes().get(index).map(|&b| char::from(b));
    }
    line.chars().nth(index)
}

/// Line length in characters.
#[must_use]
pub fn char_len(line: &str) -> usize {
    if line.is_ascii() {
        line.len()
    } else {
        line.chars().count()
    }
}

fn byte_offset(line: &str, index: usize) -> usize {
    if line.is_ascii() {
        return index.min(line.len());
    }
    line.char_indices()
        .nth(index)
        .map_or(line.len(), |(offset, _)| offset)
}

#[cfg(test)]
#[path = "columns_tests.rs"]
mod tests;
