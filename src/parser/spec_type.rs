use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of a physical RPG source line, decided by column 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecType {
    H,
    F,
    D,
    P,
    I,
    C,
    O,
    #[serde(rename = "FREE")]
    Free,
    #[serde(rename = "COMMENT")]
    Comment,
    #[serde(rename = "UNKNOWN")]
    Unknown,
}

impl SpecType {
    /// Every variant, in reporting order.
    pub const ALL: [Self; 10] = [
        Self::H,
        Self::F,
        Self::D,
        Self::P,
        Self::I,
        Self::C,
        Self::O,
        Self::Free,
        Self::Comment,
        Self::Unknown,
    ];

    /// Mandatory main-section order of the fixed-format specifications.
    pub const CANONICAL_ORDER: [Self; 7] = [
        Self::H,
        Self::F,
        Self::D,
        Self::P,
        Self::I,
        Self::C,
        Self::O,
    ];

    /// Maps a column-6 character to its specification type.
    #[must_use]
    pub const fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Self::H),
            'F' => Some(Self::F),
            'D' => Some(Self::D),
            'P' => Some(Self::P),
            'I' => Some(Self::I),
            'C' => Some(Self::C),
            'O' => Some(Self::O),
            _ => None,
        }
    }

    /// Position in [`Self::CANONICAL_ORDER`], `None` for the non-spec kinds.
    #[must_use]
    pub const fn order_index(self) -> Option<usize> {
        match self {
            Self::H => Some(0),
            Self::F => Some(1),
            Self::D => Some(2),
            Self::P => Some(3),
            Self::I => Some(4),
            Self::C => Some(5),
            Self::O => Some(6),
            Self::Free | Self::Comment | Self::Unknown => None,
        }
    }

    /// True for the seven column-6 specification letters.
    #[must_use]
    pub const fn is_fixed_spec(self) -> bool {
        self.order_index().is_some()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H => "H",
            Self::F => "F",
            Self::D => "D",
            Self::P => "P",
            Self::I => "I",
            Self::C => "C",
            Self::O => "O",
            Self::Free => "FREE",
            Self::Comment => "COMMENT",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Long name used in human-readable reports.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::H => "Control",
            Self::F => "File",
            Self::D => "Definition",
            Self::P => "Procedure",
            Self::I => "Input",
            Self::C => "Calculation",
            Self::O => "Output",
            Self::Free => "Free-form",
            Self::Comment => "Comment",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for SpecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
