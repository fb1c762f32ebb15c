use std::fmt;

use serde::{Deserialize, Serialize};

/// How many rules run. Each level includes everything below it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckLevel {
    /// Compiler-rejected constructs only.
    Basic,
    #[default]
    Standard,
    /// Adds style and naming advice.
    Strict,
}

impl CheckLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Standard => "standard",
            Self::Strict => "strict",
        }
    }

    #[must_use]
    pub const fn at_least_standard(self) -> bool {
        matches!(self, Self::Standard | Self::Strict)
    }

    #[must_use]
    pub const fn is_strict(self) -> bool {
        matches!(self, Self::Strict)
    }
}

impl fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CheckLevel {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "standard" => Ok(Self::Standard),
            "strict" => Ok(Self::Strict),
            _ => Err(format!(
                "Unknown check level: {s} (expected basic, standard or strict)"
            )),
        }
    }
}
