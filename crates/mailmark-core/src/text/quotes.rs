use regex::Regex;
use std::sync::OnceLock;

use super::is_signature_separator;

/// A separator counts as a signature only within this many trailing lines
pub const DEFAULT_SIGNATURE_THRESHOLD: usize = 10;

static ON_WROTE: OnceLock<Regex> = OnceLock::new();
static FORWARD_BANNER: OnceLock<Regex> = OnceLock::new();

fn on_wrote() -> &'static Regex {
    ON_WROTE.get_or_init(|| {
        Regex::new(r"(?i)^\s*On\s.+\swrote:\s*$").expect("Invalid reply header regex pattern")
    })
}

fn forward_banner() -> &'static Regex {
    FORWARD_BANNER.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:-{2,}\s*Forwarded message|Begin forwarded message:)")
            .expect("Invalid forward banner regex pattern")
    })
}

/// Whether a line opens a quoted, replied-to or forwarded block
fn is_quote_boundary(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with('>')
        || on_wrote().is_match(line)
        || (trimmed.starts_with("From: ") && trimmed.contains('@'))
        || trimmed.to_lowercase().contains("original message")
        || forward_banner().is_match(line)
}

/// Return the new part of a message, cutting at the first quote boundary.
///
/// The boundary line and everything after it are dropped. A bare `--`
/// separator also cuts, but only within the last `signature_threshold`
/// lines; earlier separators are ordinary content.
pub fn strip_quoted_text(content: &str, signature_threshold: usize) -> String {
    let lines: Vec<&str> = content.lines().collect();
    let signature_zone = lines.len().saturating_sub(signature_threshold);

    let mut kept = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        if is_quote_boundary(line) || (idx >= signature_zone && is_signature_separator(line)) {
            break;
        }
        kept.push(*line);
    }
    kept.join("\n").trim_end().to_string()
}
