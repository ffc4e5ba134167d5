use super::*;

#[test]
fn renders_bold_and_ordered_list() {
    let html = render_markdown_html("1. **Infrastructure**: roads\n2. **Economy**: jobs\n");
    assert!(html.contains("<ol>"));
    assert!(html.contains("<strong>Infrastructure</strong>"));
}

#[test]
fn paragraphs_split_on_blank_lines() {
    let html = render_markdown_html("first\n\nsecond");
    assert_eq!(html.matches("<p>").count(), 2);
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hello <script>alert(1)</script>\n\n<div>block</div>");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("hello"));
}
