//! Line-based heuristics over plain message text
//!
//! - [`strip_quoted_text`]: keep only what precedes the first quoted or forwarded block
//! - [`extract_signature`]: split a trailing signature block off the body
//! - [`clean_title`]: drop `Re:`/`Fwd:`/`Fw:` prefixes
//! - [`remove_extra_whitespace`]: trailing spaces and blank-line runs

mod quotes;
mod signature;
mod title;
mod whitespace;

pub use quotes::{strip_quoted_text, DEFAULT_SIGNATURE_THRESHOLD};
pub use signature::{extract_signature, SIGNATURE_WINDOW};
pub use title::{clean_title, MAX_PREFIX_PASSES};
pub use whitespace::remove_extra_whitespace;

/// A bare `--` or `-- ` line, the conventional signature delimiter
pub(crate) fn is_signature_separator(line: &str) -> bool {
    matches!(line.trim_end_matches('\r'), "--" | "-- ")
}
