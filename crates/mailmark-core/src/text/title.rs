use regex::Regex;
use std::sync::OnceLock;

/// Upper bound on prefix-stripping passes
pub const MAX_PREFIX_PASSES: usize = 10;

static REPLY_PREFIX: OnceLock<Regex> = OnceLock::new();

fn reply_prefix() -> &'static Regex {
    REPLY_PREFIX.get_or_init(|| {
        Regex::new(r"(?i)^\s*(?:re|fwd?)\s*:\s*").expect("Invalid reply prefix regex pattern")
    })
}

/// Strip leading `Re:`/`Fwd:`/`Fw:` prefixes, at most [`MAX_PREFIX_PASSES`] of them
pub fn clean_title(title: &str) -> String {
    let mut current = title.trim();
    for _ in 0..MAX_PREFIX_PASSES {
        match reply_prefix().find(current) {
            Some(prefix) => current = &current[prefix.end()..],
            None => break,
        }
    }
    current.trim().to_string()
}
