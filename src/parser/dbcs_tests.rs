use super::*;

#[test]
fn ascii_is_single_byte() {
    assert!(!is_dbcs('A'));
    assert_eq!(byte_length("HELLO"), 5);
    assert_eq!(shift_characters("HELLO"), 0);
    assert!(!contains_dbcs("HELLO"));
}

#[test]
fn recognises_japanese_and_korean() {
    assert!(is_dbcs('あ'));
    assert!(is_dbcs('カ'));
    assert!(is_dbcs('漢'));
    assert!(is_dbcs('한'));
    assert!(is_dbcs('Ａ'));
}

#[test]
fn single_run_adds_so_and_si() {
    // 'A' + SO + 2*2 + SI + 'B'
    assert_eq!(byte_length("Aテス B"), 1 + 1 + 4 + 1 + 2);
    assert_eq!(byte_length("テスト"), 1 + 6 + 1);
}

#[test]
fn run_at_end_of_text_is_closed() {
    assert_eq!(byte_length("ABテ"), 2 + 1 + 2 + 1);
}

#[test]
fn separate_runs_each_get_framing() {
    let text = "テA字";
    assert_eq!(shift_characters(text), 4);
    assert_eq!(byte_length(text), (1 + 2 + 1) + 1 + (1 + 2 + 1));
}

#[test]
fn analyze_breaks_down_lengths() {
    let analysis = analyze("'合計'");
    assert_eq!(analysis.total_length, 4);
    assert_eq!(analysis.dbcs_count, 2);
    assert_eq!(analysis.sbcs_count, 2);
    assert_eq!(analysis.shift_characters, 2);
    assert_eq!(analysis.byte_length, 1 + 1 + 4 + 1 + 1);
    assert!(analysis.contains_dbcs);
}

#[test]
fn empty_text() {
    let analysis = analyze("");
    assert_eq!(analysis.byte_length, 0);
    assert!(!analysis.contains_dbcs);
}
