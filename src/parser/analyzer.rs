//! Queries over classified lines shared by several checkers.

use indexmap::IndexSet;
use regex::Regex;

use super::columns::slice_chars;
use super::line::ClassifiedLine;
use super::spec_type::SpecType;

/// Columns 81 and beyond are a comment area in fixed-format source.
pub const CODE_AREA_END: usize = 80;

/// Columns 1-80, right-trimmed.
#[must_use]
pub fn code_area(raw: &str) -> &str {
    slice_chars(raw, 0, CODE_AREA_END).trim_end()
}

/// True when the code area ends with `...`, continuing a long name onto the
/// next line.
#[must_use]
pub fn is_name_continuation(raw: &str) -> bool {
    code_area(raw).ends_with("...")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    Free,
    EndFree,
}

/// `/FREE` or `/END-FREE` compiler directive on this line, if any.
#[must_use]
pub fn directive(line: &ClassifiedLine) -> Option<Directive> {
    let upper = line.trimmed.to_ascii_uppercase();
    if upper.starts_with("/END-FREE") {
        Some(Directive::EndFree)
    } else if upper.starts_with("/FREE") {
        Some(Directive::Free)
    } else {
        None
    }
}

/// A `/FREE` ... `/END-FREE` region. `end` is `None` when never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeBlock {
    pub start: usize,
    pub end: Option<usize>,
}

impl FreeBlock {
    /// True for lines strictly between the two directives.
    #[must_use]
    pub fn contains(&self, line_number: usize) -> bool {
        line_number > self.start && self.end.is_none_or(|end| line_number < end)
    }
}

/// Finds `/FREE` blocks. A second `/FREE` before `/END-FREE` leaves the
/// first block open; a stray `/END-FREE` is ignored.
#[must_use]
pub fn free_blocks(lines: &[ClassifiedLine]) -> Vec<FreeBlock> {
    let mut blocks = Vec::new();
    let mut current: Option<FreeBlock> = None;

    for line in lines {
        match directive(line) {
            Some(Directive::Free) => {
                if let Some(open) = current.take() {
                    blocks.push(open);
                }
                current = Some(FreeBlock {
                    start: line.line_number,
                    end: None,
                });
            }
            Some(Directive::EndFree) => {
                if let Some(mut open) = current.take() {
                    open.end = Some(line.line_number);
                    blocks.push(open);
                }
            }
            None => {}
        }
    }

    blocks.extend(current);
    blocks
}

#[must_use]
pub fn is_in_free_block(line_number: usize, blocks: &[FreeBlock]) -> bool {
    blocks.iter().any(|block| block.contains(line_number))
}

/// Specification types in order of first appearance, comments and unknown
/// lines skipped.
#[must_use]
pub fn specification_order(lines: &[ClassifiedLine]) -> Vec<SpecType> {
    let seen: IndexSet<SpecType> = lines
        .iter()
        .filter(|line| !line.is_comment && line.spec_type != SpecType::Unknown)
        .map(|line| line.spec_type)
        .collect();
    seen.into_iter().collect()
}

/// Removes `'...'` string literals. An unterminated literal is kept.
#[must_use]
pub fn strip_string_literals(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('\'') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        if let Some(close) = after.find('\'') {
            rest = &after[close + 1..];
        } else {
            out.push_str(&rest[open..]);
            return out;
        }
    }
    out.push_str(rest);
    out
}

/// A legacy operation code with its modern replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeprecatedOpcode {
    /// Upper-case opcode; a trailing `XX` stands for any condition code.
    pub opcode: &'static str,
    pub reason: &'static str,
    pub alternative: &'static str,
}

impl DeprecatedOpcode {
    fn matches(&self, opcode: &str) -> bool {
        self.opcode.strip_suffix("XX").map_or(opcode == self.opcode, |prefix| {
            opcode.starts_with(prefix)
                && (opcode.len() == prefix.len() || opcode.len() == prefix.len() + 2)
        })
    }
}

pub const DEPRECATED_OPCODES: &[DeprecatedOpcode] = &[
    DeprecatedOpcode {
        opcode: "GOTO",
        reason: "it breaks structured control flow",
        alternative: "Use IF/ELSE, DO loops or SELECT/WHEN instead",
    },
    DeprecatedOpcode {
        opcode: "TAG",
        reason: "it only exists as a GOTO target",
        alternative: "Restructure the logic with structured operations",
    },
    DeprecatedOpcode {
        opcode: "CABXX",
        reason: "it is a legacy compare-and-branch",
        alternative: "Use IF",
    },
    DeprecatedOpcode {
        opcode: "CASXX",
        reason: "it is a legacy compare-and-call",
        alternative: "Use SELECT/WHEN with CALLP",
    },
    DeprecatedOpcode {
        opcode: "COMP",
        reason: "it compares through result indicators",
        alternative: "Use IF",
    },
    DeprecatedOpcode {
        opcode: "LOKUP",
        reason: "it is a legacy array search",
        alternative: "Use %LOOKUP or %SCAN",
    },
    DeprecatedOpcode {
        opcode: "XFOOT",
        reason: "it is a legacy array sum",
        alternative: "Use %XFOOT or a FOR loop",
    },
    DeprecatedOpcode {
        opcode: "Z-ADD",
        reason: "it is a legacy assignment",
        alternative: "Use EVAL",
    },
    DeprecatedOpcode {
        opcode: "Z-SUB",
        reason: "it is a legacy negated assignment",
        alternative: "Use EVAL",
    },
    DeprecatedOpcode {
        opcode: "MOVE",
        reason: "it converts implicitly and pads from the right",
        alternative: "Use EVAL with %CHAR, %DEC or %SUBST",
    },
    DeprecatedOpcode {
        opcode: "MOVEL",
        reason: "it converts implicitly and pads from the left",
        alternative: "Use EVAL with %CHAR, %DEC or %SUBST",
    },
    DeprecatedOpcode {
        opcode: "MHHZO",
        reason: "it is a legacy zone move",
        alternative: "Use EVAL with %BITAND/%BITOR",
    },
    DeprecatedOpcode {
        opcode: "MHLZO",
        reason: "it is a legacy zone move",
        alternative: "Use EVAL with %BITAND/%BITOR",
    },
    DeprecatedOpcode {
        opcode: "MLHZO",
        reason: "it is a legacy zone move",
        alternative: "Use EVAL with %BITAND/%BITOR",
    },
    DeprecatedOpcode {
        opcode: "MLLZO",
        reason: "it is a legacy zone move",
        alternative: "Use EVAL with %BITAND/%BITOR",
    },
];

/// Upper-cased opcode without its `(…)` extender.
#[must_use]
pub fn base_opcode(opcode: &str) -> String {
    let base = opcode.split('(').next().unwrap_or(opcode);
    base.trim().to_ascii_uppercase()
}

/// The deprecated-list entry matching a C-spec opcode.
#[must_use]
pub fn find_deprecated_opcode(opcode: &str) -> Option<&'static DeprecatedOpcode> {
    let base = base_opcode(opcode);
    DEPRECATED_OPCODES.iter().find(|entry| entry.matches(&base))
}

/// Every C line whose opcode is on the deprecated list.
#[must_use]
pub fn find_deprecated_opcodes(
    lines: &[ClassifiedLine],
) -> Vec<(&ClassifiedLine, &'static DeprecatedOpcode)> {
    lines
        .iter()
        .filter(|line| !line.is_comment)
        .filter_map(|line| {
            let opcode = line.c_fields()?.opcode.as_deref()?;
            find_deprecated_opcode(opcode).map(|entry| (line, entry))
        })
        .collect()
}

/// One `*INnn` numbered-indicator reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorUse {
    /// Matched text as written, e.g. `*in03`.
    pub text: String,
    /// 1-based column of the `*`.
    pub column: usize,
}

/// Finds numbered indicators (`*IN01`..`*IN99`).
#[derive(Debug)]
pub struct IndicatorScanner {
    pattern: Regex,
}

impl Default for IndicatorScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl IndicatorScanner {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"(?i)\*IN\d{2}").expect("Invalid regex"),
        }
    }

    #[must_use]
    pub fn find(&self, text: &str) -> Vec<IndicatorUse> {
        self.pattern
            .find_iter(text)
            .map(|m| IndicatorUse {
                text: m.as_str().to_string(),
                column: text[..m.start()].chars().count() + 1,
            })
            .collect()
    }

    /// Non-comment lines that reference a numbered indicator.
    #[must_use]
    pub fn lines_using<'a>(&self, lines: &'a [ClassifiedLine]) -> Vec<&'a ClassifiedLine> {
        lines
            .iter()
            .filter(|line| !line.is_comment && self.pattern.is_match(&line.raw))
            .collect()
    }
}

#[cfg(test)]
#[path = "analyzer_tests.rs"]
mod tests;
