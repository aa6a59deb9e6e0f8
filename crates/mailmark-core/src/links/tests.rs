use super::*;

fn all() -> LinkOptions {
    LinkOptions::default()
}

fn urls(links: &[Link]) -> Vec<&str> {
    links.iter().map(|l| l.url.as_str()).collect()
}

#[test]
fn test_duplicate_plain_urls_collapse() {
    let links = extract_links("See https://a.com and https://a.com again", &all());
    assert_eq!(urls(&links), vec!["https://a.com"]);
    assert_eq!(links[0].title, "");
    assert_eq!(links[0].link_type, LinkType::External);
}

#[test]
fn test_document_order_across_both_passes() {
    let content = "First http://one.example, then [two](https://two.example), then ftp://three.example.";
    let links = extract_links(content, &all());
    assert_eq!(
        urls(&links),
        vec!["http://one.example", "https://two.example", "ftp://three.example"]
    );
    assert_eq!(links[1].title, "two");
}

#[test]
fn test_url_inside_markdown_link_counted_once() {
    let links = extract_links("Read [the docs](https://docs.example.com/guide).", &all());
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "the docs");
}

#[test]
fn test_markdown_link_wins_when_it_comes_first() {
    let content = "[Home](https://home.example) and later https://home.example";
    let links = extract_links(content, &all());
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "Home");
}

#[test]
fn test_trailing_punctuation_is_trimmed() {
    let links = extract_links("(see https://a.com/x?y=1). Or https://b.com!", &all());
    assert_eq!(urls(&links), vec!["https://a.com/x?y=1", "https://b.com"]);
}

#[test]
fn test_balanced_parentheses_stay_in_urls() {
    let links = extract_links("[w](https://en.wikipedia.org/wiki/Rust_(lang)) end", &all());
    assert_eq!(urls(&links), vec!["https://en.wikipedia.org/wiki/Rust_(lang)"]);
    assert_eq!(links[0].title, "w");

    let links = extract_links("(ref https://en.wikipedia.org/wiki/Rust_(lang)).", &all());
    assert_eq!(urls(&links), vec!["https://en.wikipedia.org/wiki/Rust_(lang)"]);
}

#[test]
fn test_options_toggle_passes() {
    let content = "[a](https://a.com) https://b.com https://b.com";
    let markdown_only = LinkOptions {
        extract_plain_urls: false,
        ..LinkOptions::default()
    };
    assert_eq!(urls(&extract_links(content, &markdown_only)), vec!["https://a.com"]);

    let plain_only = LinkOptions {
        extract_markdown_links: false,
        ..LinkOptions::default()
    };
    assert_eq!(
        urls(&extract_links(content, &plain_only)),
        vec!["https://a.com", "https://b.com"]
    );

    let keep_duplicates = LinkOptions {
        deduplicate_links: false,
        ..LinkOptions::default()
    };
    assert_eq!(extract_links(content, &keep_duplicates).len(), 3);
}

#[test]
fn test_classification() {
    assert_eq!(classify_link("#section"), LinkType::Internal);
    assert_eq!(classify_link("/wiki/Home"), LinkType::Internal);
    assert_eq!(classify_link("./notes.md"), LinkType::Internal);
    assert_eq!(classify_link("../up"), LinkType::Internal);
    assert_eq!(
        classify_link("https://example.com/files/Report.PDF?dl=1"),
        LinkType::Document
    );
    assert_eq!(
        classify_link("https://docs.google.com/document/d/abc"),
        LinkType::Document
    );
    assert_eq!(
        classify_link("https://acme.sharepoint.com/sites/x"),
        LinkType::Document
    );
    assert_eq!(classify_link("https://example.com/pdf"), LinkType::External);
    assert_eq!(classify_link("https://example.com/"), LinkType::External);
}

#[test]
fn test_relative_markdown_links_are_internal() {
    let links = extract_links("Jump to [top](#top) or [index](/index)", &all());
    assert!(links.iter().all(|l| l.link_type == LinkType::Internal));
    assert_eq!(links.len(), 2);
}

#[test]
fn test_empty_content() {
    assert!(extract_links("", &all()).is_empty());
    assert!(extract_links("no links here", &all()).is_empty());
}
