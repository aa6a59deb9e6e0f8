//! Normalization applied to converter output

use regex::Regex;
use std::sync::OnceLock;

static EXCESS_NEWLINES: OnceLock<Regex> = OnceLock::new();
static EXCESS_ASTERISKS: OnceLock<Regex> = OnceLock::new();

/// Named entities left behind by double-escaped sources
const LEFTOVER_ENTITIES: &[(&str, &str)] = &[
    ("&hellip;", "..."),
    ("&nbsp;", " "),
    ("&mdash;", "--"),
    ("&ndash;", "-"),
    ("&lsquo;", "'"),
    ("&rsquo;", "'"),
    ("&ldquo;", "\""),
    ("&rdquo;", "\""),
    ("&apos;", "'"),
    ("&#39;", "'"),
    // Last, so `&amp;hellip;` stays literal instead of collapsing twice
    ("&amp;", "&"),
];

fn excess_newlines() -> &'static Regex {
    EXCESS_NEWLINES.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid newline regex pattern"))
}

fn excess_asterisks() -> &'static Regex {
    EXCESS_ASTERISKS.get_or_init(|| Regex::new(r"\*{4,}").expect("Invalid asterisk regex pattern"))
}

/// Replace typographic punctuation with its ASCII counterpart
pub(crate) fn normalize_typography(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2013}' => out.push('-'),
            '\u{2014}' => out.push_str("--"),
            '\u{2026}' => out.push_str("..."),
            '\u{00A0}' => out.push(' '),
            '\u{200B}' | '\u{FEFF}' => {}
            _ => out.push(c),
        }
    }
    out
}

fn decode_leftover_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    LEFTOVER_ENTITIES
        .iter()
        .fold(text.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Final pass over rendered Markdown
pub(crate) fn finish(markdown: &str) -> String {
    let text = normalize_typography(&decode_leftover_entities(markdown));
    let text = text
        .lines()
        .map(str::trim_end)
        .collect::<Vec<_>>()
        .join("\n");
    let text = excess_newlines().replace_all(&text, "\n\n");
    let text = excess_asterisks().replace_all(&text, "***");
    text.trim().to_string()
}
