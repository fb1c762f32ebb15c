//! Double-byte character set (DBCS) length accounting.
//!
//! On IBM i, a run of DBCS characters is framed by shift-out (SO, 0x0E) and
//! shift-in (SI, 0x0F) bytes, and each DBCS character occupies two bytes.
//! A line that looks short in characters can therefore overflow the
//! compiler's byte limit.

use serde::Serialize;

/// True for characters stored as two bytes in a DBCS CCSID.
#[must_use]
pub const fn is_dbcs(c: char) -> bool {
    matches!(
        c as u32,
        0x3040..=0x309F   // Hiragana
        | 0x30A0..=0x30FF // Katakana
        | 0x4E00..=0x9FFF // CJK unified ideographs
        | 0xF900..=0xFAFF // CJK compatibility ideographs
        | 0xAC00..=0xD7AF // Hangul syllables
        | 0xFF00..=0xFFEF // Half-width and full-width forms
    )
}

/// Byte length of `text` including SO/SI framing around each DBCS run.
#[must_use]
pub fn byte_length(text: &str) -> usize {
    let mut length = 0;
    let mut in_dbcs = false;
    for c in text.chars() {
        if is_dbcs(c) {
            if !in_dbcs {
                length += 1;
                in_dbcs = true;
            }
            length += 2;
        } else {
            if in_dbcs {
                length += 1;
                in_dbcs = false;
            }
            length += 1;
        }
    }
    if in_dbcs {
        length += 1;
    }
    length
}

#[must_use]
pub fn count_dbcs(text: &str) -> usize {
    text.chars().filter(|&c| is_dbcs(c)).count()
}

#[must_use]
pub fn contains_dbcs(text: &str) -> bool {
    text.chars().any(is_dbcs)
}

/// Number of SO/SI bytes the text needs: two per DBCS run.
#[must_use]
pub fn shift_characters(text: &str) -> usize {
    let mut runs = 0;
    let mut in_dbcs = false;
    for c in text.chars() {
        let dbcs = is_dbcs(c);
        if dbcs && !in_dbcs {
            runs += 1;
        }
        in_dbcs = dbcs;
    }
    runs * 2
}

/// Length breakdown of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DbcsAnalysis {
    /// Length in characters.
    pub total_length: usize,
    pub byte_length: usize,
    pub dbcs_count: usize,
    pub sbcs_count: usize,
    pub shift_characters: usize,
    pub contains_dbcs: bool,
}

#[must_use]
pub fn analyze(text: &str) -> DbcsAnalysis {
    let total_length = text.chars().count();
    let dbcs_count = count_dbcs(text);
    DbcsAnalysis {
        total_length,
        byte_length: byte_length(text),
        dbcs_count,
        sbcs_count: total_length - dbcs_count,
        shift_characters: shift_characters(text),
        contains_dbcs: dbcs_count > 0,
    }
}

#[cfg(test)]
#[path = "dbcs_tests.rs"]
mod tests;
