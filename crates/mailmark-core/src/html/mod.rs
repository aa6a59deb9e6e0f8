//! HTML to Markdown conversion
//!
//! [`html_to_markdown`] never fails: input the converter refuses (too large,
//! nested too deeply) falls back to stripping tags and decoding entities.

mod cleanup;
mod node;
mod render;

use regex::Regex;
use scraper::Html;
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use render::Renderer;

/// Largest input the converter will parse
pub const MAX_HTML_BYTES: usize = 10 * 1024 * 1024;
/// Deepest element nesting the converter will walk
pub const MAX_DEPTH: usize = 256;

static HTML_TAG: OnceLock<Regex> = OnceLock::new();
static ANY_TAG: OnceLock<Regex> = OnceLock::new();

/// Reasons the converter refuses an input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("input of {size} bytes exceeds the {limit} byte limit")]
    TooLarge { size: usize, limit: usize },

    #[error("element nesting exceeds depth {limit}")]
    TooDeep { limit: usize },
}

/// Whether content contains markup worth converting.
///
/// Plain-text mail often carries `<addr@example.com>` or `a < b`, which an
/// HTML parser would swallow, so only recognisable tags count.
pub fn looks_like_html(content: &str) -> bool {
    let re = HTML_TAG.get_or_init(|| {
        Regex::new(
            r"(?i)</?(html|head|body|div|p|br|hr|span|font|table|tr|td|th|a|b|i|u|strong|em|code|pre|ul|ol|li|h[1-6]|img|blockquote|style|script)\b[^>]*>",
        )
        .expect("Invalid html tag regex pattern")
    });
    re.is_match(content)
}

/// Convert HTML into Markdown, refusing oversized or pathologically nested input
pub fn convert(html: &str) -> Result<String, ConvertError> {
    if html.len() > MAX_HTML_BYTES {
        return Err(ConvertError::TooLarge {
            size: html.len(),
            limit: MAX_HTML_BYTES,
        });
    }

    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len() / 2);
    Renderer::new(MAX_DEPTH).render_children(fragment.root_element(), 0, &mut out)?;
    Ok(cleanup::finish(&out))
}

/// Best-effort conversion of HTML into Markdown.
///
/// Text without markup or entities is returned verbatim, which makes the
/// conversion idempotent on its own output.
pub fn html_to_markdown(html: &str) -> String {
    if !html.contains('<') {
        if !html.contains('&') {
            return html.to_string();
        }
        return cleanup::finish(&html_escape::decode_html_entities(html));
    }

    match convert(html) {
        Ok(markdown) => markdown,
        Err(e) => {
            debug!(error = %e, "html conversion refused, stripping tags");
            fallback(html)
        }
    }
}

fn fallback(html: &str) -> String {
    let re = ANY_TAG.get_or_init(|| {
        Regex::new(r"</?[a-zA-Z!][^>]*>").expect("Invalid markup tag regex pattern")
    });
    let text = re.replace_all(html, " ");
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");
    cleanup::finish(&html_escape::decode_html_entities(&text))
}

#[cfg(test)]
mod tests;
