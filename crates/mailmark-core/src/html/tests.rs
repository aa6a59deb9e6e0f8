use super::*;

#[test]
fn test_inline_emphasis() {
    assert_eq!(
        html_to_markdown("<p>Hello <strong>world</strong>!</p>"),
        "Hello **world**!"
    );
    assert_eq!(
        html_to_markdown("<p><strong>Hello</strong> world!</p>"),
        "**Hello** world!"
    );
    assert_eq!(
        html_to_markdown("<p><em>soft</em> and <b>loud</b> and <code>x = 1</code></p>"),
        "*soft* and **loud** and `x = 1`"
    );
}

#[test]
fn test_headings_and_paragraphs() {
    let html = "<h1>Title</h1><p>First paragraph.</p><h3>Sub</h3><p>Second.</p>";
    assert_eq!(
        html_to_markdown(html),
        "# Title\nFirst paragraph.\n\n### Sub\nSecond."
    );
}

#[test]
fn test_lists_use_dashes_for_both_kinds() {
    let html = "<ul><li>one</li><li>two</li></ul><ol><li>three</li></ol>";
    assert_eq!(html_to_markdown(html), "- one\n- two\n\n- three");
}

#[test]
fn test_links_and_images() {
    assert_eq!(
        html_to_markdown(r#"<a href="https://example.com">site</a>"#),
        "[site](https://example.com)"
    );
    assert_eq!(html_to_markdown("<a>no target</a>"), "no target");
    assert_eq!(
        html_to_markdown(r#"<img src="https://example.com/a.png" alt="logo">"#),
        "![logo](https://example.com/a.png)"
    );
    assert_eq!(html_to_markdown(r#"<p>before<img alt="x">after</p>"#), "beforeafter");
}

#[test]
fn test_blockquote_prefixes_each_line() {
    let html = "<blockquote><p>line one</p><p>line two</p></blockquote>";
    assert_eq!(html_to_markdown(html), "> line one\n> line two");
}

#[test]
fn test_pre_becomes_fenced_block() {
    let html = "<pre><code>fn main() {\n    run();\n}</code></pre>";
    assert_eq!(
        html_to_markdown(html),
        "```\nfn main() {\n    run();\n}\n```"
    );
}

#[test]
fn test_style_and_script_are_dropped() {
    let html = "<style>p { color: red; }</style><script>alert(1)</script><p>Visible</p>";
    assert_eq!(html_to_markdown(html), "Visible");
}

#[test]
fn test_unknown_elements_keep_children() {
    let html = r#"<span class="x"><font color="red">Hi</font> there</span>"#;
    assert_eq!(html_to_markdown(html), "Hi there");
}

#[test]
fn test_table_rows_are_pipe_delimited() {
    let html = "<table><tr><th>Name</th><th>Qty</th></tr><tr><td>Apple</td><td>3</td></tr></table>";
    assert_eq!(
        html_to_markdown(html),
        "| Name | Qty |\n| --- | --- |\n| Apple | 3 |"
    );
}

#[test]
fn test_line_breaks() {
    assert_eq!(html_to_markdown("one<br>two<br/>three"), "one\ntwo\nthree");
}

#[test]
fn test_entities_are_decoded() {
    assert_eq!(
        html_to_markdown("<p>Fish &amp; chips &ldquo;today&rdquo;&hellip;</p>"),
        "Fish & chips \"today\"..."
    );
}

#[test]
fn test_blank_runs_collapse() {
    let html = "<p>a</p><p></p><p></p><div></div><p>b</p>";
    assert_eq!(html_to_markdown(html), "a\n\nb");
}

#[test]
fn test_markdown_is_left_alone() {
    let markdown = "# Notes\n\nHello **world**!\n\n- one\n- two";
    assert_eq!(html_to_markdown(markdown), markdown);
    let once = html_to_markdown("<h2>Plan</h2><ul><li>ship <em>it</em></li></ul>");
    assert_eq!(html_to_markdown(&once), once);
}

#[test]
fn test_plain_text_with_entities_keeps_lines() {
    assert_eq!(
        html_to_markdown("Q&amp;A\n\nNext&nbsp;part"),
        "Q&A\n\nNext part"
    );
}

#[test]
fn test_output_has_no_tags() {
    let html = r#"<html><head><title>T</title></head><body><div><p>Hi <b>there</b></p><table><tr><td>x</td></tr></table></div></body></html>"#;
    let markdown = html_to_markdown(html);
    assert!(!markdown.contains('<'));
    assert!(!markdown.contains('>'));
    assert!(markdown.contains("Hi **there**"));
}

#[test]
fn test_malformed_html_degrades() {
    let markdown = html_to_markdown("<p>unclosed <b>bold <i>mixed</p> tail");
    assert!(markdown.contains("unclosed"));
    assert!(markdown.contains("tail"));
    assert!(!markdown.contains("<p>"));
}

#[test]
fn test_deep_nesting_falls_back_to_plain_text() {
    let html = format!(
        "{}deep &amp; nested{}",
        "<span>".repeat(MAX_DEPTH + 10),
        "</span>".repeat(MAX_DEPTH + 10)
    );
    assert_eq!(
        convert(&html),
        Err(ConvertError::TooDeep { limit: MAX_DEPTH })
    );
    assert_eq!(html_to_markdown(&html), "deep & nested");

    let divs = format!("{}x{}", "<div>".repeat(300), "</div>".repeat(300));
    let markdown = html_to_markdown(&divs);
    assert_eq!(markdown, "x");
    assert!(!markdown.contains("<div>"));
}

#[test]
fn test_whitespace_inside_inline_elements_stays_outside_markers() {
    assert_eq!(
        html_to_markdown("<p>Hello<b> world</b>!</p>"),
        "Hello **world**!"
    );
    assert_eq!(
        html_to_markdown("<p><em>soft </em>landing</p>"),
        "*soft* landing"
    );
    assert_eq!(
        html_to_markdown("<p>run<code> make </code>now</p>"),
        "run `make` now"
    );
}

#[test]
fn test_whitespace_inside_anchors_is_kept() {
    assert_eq!(
        html_to_markdown(r#"<p>Call<a href="https://x.io"> us</a> now</p>"#),
        "Call [us](https://x.io) now"
    );
    assert_eq!(
        html_to_markdown(r#"<p>See<a href="https://x.io">docs </a>here</p>"#),
        "See[docs](https://x.io) here"
    );
    assert_eq!(html_to_markdown("<p>plain<a> anchor</a></p>"), "plain anchor");
}

#[test]
fn test_double_escaped_entities_are_idempotent() {
    let once = html_to_markdown("<p>AT&amp;amp;T</p>");
    assert_eq!(once, "AT&T");
    assert_eq!(html_to_markdown(&once), once);
}

#[test]
fn test_looks_like_html() {
    assert!(looks_like_html("<p>hi</p>"));
    assert!(looks_like_html("text<BR>more"));
    assert!(!looks_like_html("Reply to <ann@example.com>"));
    assert!(!looks_like_html("if a < b then"));
}
