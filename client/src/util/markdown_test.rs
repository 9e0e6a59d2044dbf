use super::*;

// =============================================================
// render_markdown_html
// =============================================================

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("# Title\n\nSome *emphasis*.");
    assert!(html.contains("<h1>Title</h1>"));
    assert!(html.contains("<em>emphasis</em>"));
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
}

// =============================================================
// excerpt / read_minutes
// =============================================================

#[test]
fn plain_text_strips_markup_and_joins_blocks() {
    assert_eq!(plain_text("# Head\n\nOne **two**\nthree"), "Head One two three");
}

#[test]
fn excerpt_keeps_short_content_whole() {
    assert_eq!(excerpt("Short post", 100), "Short post");
}

#[test]
fn excerpt_truncates_long_content() {
    let content = "word ".repeat(50);
    let cut = excerpt(&content, 12);
    assert_eq!(cut, "word word wo...");
}

#[test]
fn read_minutes_rounds_up_with_minimum_of_one() {
    assert_eq!(read_minutes(""), 1);
    assert_eq!(read_minutes(&"a".repeat(100)), 1);
    assert_eq!(read_minutes(&"a".repeat(101)), 2);
}
