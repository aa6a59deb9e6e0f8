//! Hyperlink extraction and classification
//!
//! Two passes run over the content: Markdown links `[text](url)` and bare
//! `scheme://` URLs. Bare URLs inside a Markdown link are the same link
//! and are dropped. Results come back in document order, trimmed of
//! trailing punctuation, with the URL as the deduplication key.

use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::config::LinkOptions;
use crate::item::{Link, LinkType};

/// File extensions that mark a link as a document
pub const DOCUMENT_EXTENSIONS: &[&str] = &[
    "pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "odt", "ods", "odp", "rtf", "csv", "txt",
    "key", "pages", "numbers",
];

/// Hosts whose links are documents regardless of path
pub const DOCUMENT_HOSTS: &[&str] = &[
    "docs.google.com",
    "drive.google.com",
    "dropbox.com",
    "onedrive.live.com",
    "sharepoint.com",
    "box.com",
    "notion.so",
];

const TRAILING_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', ')'];

static MARKDOWN_LINK: OnceLock<Regex> = OnceLock::new();
static PLAIN_URL: OnceLock<Regex> = OnceLock::new();

fn markdown_link() -> &'static Regex {
    MARKDOWN_LINK.get_or_init(|| {
        Regex::new(r"\[([^\]]*)\]\(((?:[^()\s]|\([^()\s]*\))+)\)")
            .expect("Invalid markdown link regex pattern")
    })
}

fn plain_url() -> &'static Regex {
    PLAIN_URL.get_or_init(|| {
        Regex::new(r#"[a-zA-Z][a-zA-Z0-9+.-]*://[^\s<>"'`\[\]]+"#)
            .expect("Invalid plain url regex pattern")
    })
}

/// A match before ordering and deduplication
struct Candidate {
    start: usize,
    url: String,
    title: String,
}

/// Extract links from content in document order
pub fn extract_links(content: &str, options: &LinkOptions) -> Vec<Link> {
    let mut candidates = Vec::new();
    let mut markdown_spans = Vec::new();

    if options.extract_markdown_links {
        for cap in markdown_link().captures_iter(content) {
            let Some(whole) = cap.get(0) else { continue };
            markdown_spans.push(whole.range());
            candidates.push(Candidate {
                start: whole.start(),
                url: cap[2].to_string(),
                title: cap[1].trim().to_string(),
            });
        }
    }

    if options.extract_plain_urls {
        for m in plain_url().find_iter(content) {
            if markdown_spans.iter().any(|span| span.contains(&m.start())) {
                continue;
            }
            candidates.push(Candidate {
                start: m.start(),
                url: m.as_str().to_string(),
                title: String::new(),
            });
        }
    }

    candidates.sort_by_key(|candidate| candidate.start);

    let mut seen = HashSet::new();
    let mut links = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let url = trim_trailing_punctuation(candidate.url.trim());
        if url.is_empty() {
            continue;
        }
        if options.deduplicate_links && !seen.insert(url.to_string()) {
            continue;
        }
        links.push(Link {
            url: url.to_string(),
            title: candidate.title,
            link_type: classify_link(url),
        });
    }
    links
}

/// Strip sentence punctuation off the end of a URL. A closing parenthesis
/// stays when it balances an opening one inside the URL.
fn trim_trailing_punctuation(url: &str) -> &str {
    let mut url = url;
    while let Some(last) = url.chars().last() {
        if !TRAILING_PUNCTUATION.contains(&last) {
            break;
        }
        if last == ')' && url.matches('(').count() >= url.matches(')').count() {
            break;
        }
        url = &url[..url.len() - last.len_utf8()];
    }
    url
}

/// Classify a URL as internal, document or external
pub fn classify_link(url: &str) -> LinkType {
    let url = url.trim();
    if url.starts_with('/') || url.starts_with('#') || url.starts_with("./") || url.starts_with("../")
    {
        return LinkType::Internal;
    }
    if is_document(url) {
        return LinkType::Document;
    }
    LinkType::External
}

fn is_document(url: &str) -> bool {
    let lower = url.to_lowercase();
    let (authority, path) = match lower.split_once("://") {
        Some((_, rest)) => match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        },
        None => ("", lower.as_str()),
    };

    let host = authority
        .rsplit('@')
        .next()
        .and_then(|host_port| host_port.split(':').next())
        .unwrap_or("");
    if DOCUMENT_HOSTS
        .iter()
        .any(|doc_host| host == *doc_host || host.ends_with(&format!(".{}", doc_host)))
    {
        return true;
    }

    let path = path.split(['?', '#']).next().unwrap_or("");
    let file = path.rsplit('/').next().unwrap_or("");
    match file.rsplit_once('.') {
        Some((stem, ext)) => !stem.is_empty() && DOCUMENT_EXTENSIONS.contains(&ext),
        None => false,
    }
}

#[cfg(test)]
mod tests;
