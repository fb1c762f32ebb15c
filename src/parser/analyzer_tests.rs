use super::*;
use crate::parser::classify;
use crate::parser::test_fixtures::c_spec;

#[test]
fn code_area_ignores_comment_columns() {
    let raw = format!("{:<80}{}", "     D longName...", "change log text");
    assert_eq!(code_area(&raw), "     D longName...");
    assert!(is_name_continuation(&raw));
}

#[test]
fn trailing_dots_past_column_80_are_not_name_continuation() {
    let raw = format!("{:<80}{}", "     D name", "...");
    assert!(!is_name_continuation(&raw));
}

#[test]
fn free_blocks_pairs_directives() {
    let lines = classify("     H\n      /FREE\n       x = 1;\n      /END-FREE\n     C");
    let blocks = free_blocks(&lines);
    assert_eq!(
        blocks,
        vec![FreeBlock {
            start: 2,
            end: Some(4)
        }]
    );
    assert!(is_in_free_block(3, &blocks));
    assert!(!is_in_free_block(2, &blocks));
    assert!(!is_in_free_block(4, &blocks));
}

#[test]
fn unterminated_free_block_runs_to_end() {
    let lines = classify("      /free\n       x = 1;\n       y = 2;");
    let blocks = free_blocks(&lines);
    assert_eq!(blocks, vec![FreeBlock { start: 1, end: None }]);
    assert!(is_in_free_block(3, &blocks));
}

#[test]
fn stray_end_free_is_ignored() {
    let lines = classify("      /END-FREE");
    assert!(free_blocks(&lines).is_empty());
}

#[test]
fn specification_order_lists_first_appearance() {
    let lines = classify("     H\n     D a\n     D* note\n     C\n     D b\n     X");
    assert_eq!(
        specification_order(&lines),
        vec![SpecType::H, SpecType::D, SpecType::C]
    );
}

#[test]
fn strip_string_literals_removes_quoted_text() {
    assert_eq!(strip_string_literals("x = 'a;b' + 'c';"), "x =  + ;");
    assert_eq!(strip_string_literals("'(' + x"), " + x");
}

#[test]
fn strip_string_literals_keeps_unterminated_literal() {
    assert_eq!(strip_string_literals("x = 'open"), "x = 'open");
}

#[test]
fn deprecated_opcode_matches_exactly() {
    assert_eq!(find_deprecated_opcode("move").map(|d| d.opcode), Some("MOVE"));
    assert_eq!(find_deprecated_opcode("MOVEL").map(|d| d.opcode), Some("MOVEL"));
    assert!(find_deprecated_opcode("MOVEA").is_none());
    assert!(find_deprecated_opcode("EVAL").is_none());
}

#[test]
fn deprecated_opcode_condition_wildcard() {
    assert_eq!(find_deprecated_opcode("CABEQ").map(|d| d.opcode), Some("CABXX"));
    assert_eq!(find_deprecated_opcode("CASGT").map(|d| d.opcode), Some("CASXX"));
    assert_eq!(find_deprecated_opcode("CAS").map(|d| d.opcode), Some("CASXX"));
    assert!(find_deprecated_opcode("CABINET").is_none());
}

#[test]
fn deprecated_opcode_ignores_extender() {
    assert_eq!(find_deprecated_opcode("Z-ADD(H)").map(|d| d.opcode), Some("Z-ADD"));
    assert_eq!(base_opcode("eval(h)"), "EVAL");
}

#[test]
fn finds_deprecated_opcode_lines() {
    let source = [
        c_spec("", "Z-ADD", "0"),
        c_spec("", "EVAL", "X = 1"),
        "     C*                  GOTO      END".to_string(),
    ]
    .join("\n");
    let lines = classify(&source);
    let found = find_deprecated_opcodes(&lines);
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].0.line_number, 1);
    assert_eq!(found[0].1.opcode, "Z-ADD");
}

#[test]
fn indicator_scanner_reports_columns() {
    let scanner = IndicatorScanner::new();
    let uses = scanner.find("     C                   IF        *in03 = *ON AND *IN99");
    assert_eq!(uses.len(), 2);
    assert_eq!(uses[0].text, "*in03");
    assert_eq!(uses[0].column, 36);
    assert_eq!(uses[1].text, "*IN99");
}

#[test]
fn indicator_scanner_skips_comments_and_named_indicators() {
    let scanner = IndicatorScanner::new();
    let lines = classify("     C*    *IN03\n     C                   IF        *INLR\n     C                   EVAL      *IN50 = *OFF");
    let hits = scanner.lines_using(&lines);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].line_number, 3);
}
