use super::*;

#[test]
fn extract_column_trims_value() {
    let line = "     D counter         S             10I 0";
    assert_eq!(extract_column(line, 6, 21), Some("counter"));
}

#[test]
fn extract_column_absent_before_start() {
    assert_eq!(extract_column("     D", 6, 21), None);
    assert_eq!(extract_column("     D", 5, 6), Some("D"));
}

#[test]
fn extract_column_blank_is_none() {
    assert_eq!(extract_column("     D               ", 6, 21), None);
}

#[test]
fn extract_column_short_line_returns_partial() {
    assert_eq!(extract_column("     D abc", 6, 21), Some("abc"));
}

#[test]
fn span_columns_are_one_based() {
    let span = Span::new(32, 39);
    assert_eq!(span.first_column(), 33);
    assert_eq!(span.last_column(), 39);
    assert_eq!(Span::at(39).first_column(), 40);
}

#[test]
fn span_fits_requires_whole_field() {
    let span = Span::new(6, 21);
    assert!(!span.fits("     D  name"));
    assert!(span.fits(&format!("{:<21}", "     D")));
}

#[test]
fn slice_chars_clamps_to_line() {
    assert_eq!(slice_chars("abcdef", 4, 10), "ef");
    assert_eq!(slice_chars("abc", 5, 10), "");
    assert_eq!(slice_chars("abc", 2, 1), "");
}

#[test]
fn non_ascii_lines_are_indexed_by_character() {
    let line = "     C     'テスト'  DSPLY";
    assert_eq!(char_at(line, 13), Some('ス'));
    assert_eq!(char_len(line), 23);
    assert_eq!(slice_chars(line, 12, 15), "テスト");
    assert_eq!(slice_from(line, 16), "  DSPLY");
}

#[test]
fn char_at_past_end_is_none() {
    assert_eq!(char_at("     H", 6), None);
    assert_eq!(char_at("     H", 5), Some('H'));
}
