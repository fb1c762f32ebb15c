//! Line builders for tests that need exact column placement.

/// D line with every positional field laid out on the standard grid.
///
/// `name` fills columns 7-21, `decl` is left-justified in 24-25, `from` and
/// `size` are right-justified in 26-32 and 33-39, `data_type` sits in 40,
/// `decimals` is right-justified in 41-42 and `keywords` start at 43.
pub fn d_spec_full(
    name: &str,
    decl: &str,
    from: &str,
    size: &str,
    data_type: &str,
    decimals: &str,
    keywords: &str,
) -> String {
    format!("     D{name:<15}  {decl:<2}{from:>7}{size:>7}{data_type:<1}{decimals:>2}{keywords}")
}

pub fn d_spec(name: &str, decl: &str, size: &str, data_type: &str, decimals: &str) -> String {
    d_spec_full(name, decl, "", size, data_type, decimals, "")
}

/// P line with `name` in columns 7-21 and `begin_end` in column 24.
pub fn p_spec(name: &str, begin_end: &str) -> String {
    format!("     P{name:<15}  {begin_end}")
}

/// C line with `factor1` in 12-25, `opcode` in 26-35 and `factor2` from 36.
pub fn c_spec(factor1: &str, opcode: &str, factor2: &str) -> String {
    format!("     C     {factor1:<14}{opcode:<10}{factor2}")
}

/// F line with `name` in 7-16 followed by the raw remainder from column 17.
pub fn f_spec(name: &str, rest: &str) -> String {
    format!("     F{name:<10}{rest}")
}
