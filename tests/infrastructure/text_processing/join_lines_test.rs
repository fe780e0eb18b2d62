use legal_assistant::infrastructure::text_processing::join_lines;

#[test]
fn given_no_pages_when_joining_then_returns_empty_string() {
    assert_eq!(join_lines(Vec::<String>::new()), "");
}

#[test]
fn given_pages_with_blanks_when_joining_then_keeps_non_empty_with_newlines() {
    let pages = vec![
        "Page one".to_string(),
        String::new(),
        "Page three".to_string(),
    ];

    assert_eq!(join_lines(pages), "Page one\nPage three\n");
}
