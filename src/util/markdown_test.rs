use super::*;

#[test]
fn renders_basic_formatting() {
    let out = render_markdown("# Title\n\nSome **bold** text.");
    assert!(out.contains("<h1>Title</h1>"));
    assert!(out.contains("<strong>bold</strong>"));
}

#[test]
fn renders_strikethrough_and_tables() {
    let out = render_markdown("~~gone~~\n\n| a | b |\n|---|---|\n| 1 | 2 |");
    assert!(out.contains("<del>gone</del>"));
    assert!(out.contains("<table>"));
}

#[test]
fn drops_raw_html_blocks() {
    let out = render_markdown("before\n\n<script>alert(1)</script>\n\nafter");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn drops_inline_html() {
    let out = render_markdown("a <img src=x onerror=alert(1)> b");
    assert!(!out.contains("onerror"));
}

#[test]
fn empty_input_renders_empty() {
    assert_eq!(render_markdown(""), "");
}
