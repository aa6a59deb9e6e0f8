/// Longest sanitized name, in characters
pub const MAX_FILENAME_CHARS: usize = 80;
/// Used when nothing usable survives sanitization
pub const FALLBACK_FILENAME: &str = "email-thread";

/// Turn arbitrary text into a single safe path component.
///
/// Separators, whitespace, `~` and control characters become hyphens, dot
/// runs (`..`) are broken up, hyphen runs collapse to one, and the result
/// is capped at [`MAX_FILENAME_CHARS`].
pub fn sanitize_filename(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '.' && chars.peek() == Some(&'.') {
            while chars.peek() == Some(&'.') {
                chars.next();
            }
            push_hyphen(&mut out);
        } else if is_separator(c) {
            push_hyphen(&mut out);
        } else {
            out.push(c);
        }
    }

    let capped: String = out
        .trim_matches(is_edge_junk)
        .chars()
        .take(MAX_FILENAME_CHARS)
        .collect();
    let capped = capped.trim_end_matches(is_edge_junk);

    if capped.chars().all(is_edge_junk) {
        return FALLBACK_FILENAME.to_string();
    }
    capped.to_string()
}

fn push_hyphen(out: &mut String) {
    if !out.ends_with('-') {
        out.push('-');
    }
}

fn is_separator(c: char) -> bool {
    c.is_control()
        || c.is_whitespace()
        || matches!(
            c,
            '-' | '/' | '\\' | '~' | ':' | '*' | '?' | '"' | '<' | '>' | '|'
        )
}

fn is_edge_junk(c: char) -> bool {
    matches!(c, '-' | '.' | '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_subject() {
        assert_eq!(sanitize_filename("Quarterly budget review"), "Quarterly-budget-review");
        assert_eq!(sanitize_filename("v1.2 release"), "v1.2-release");
    }

    #[test]
    fn test_traversal_is_neutralized() {
        let hostile = [
            "../../etc/passwd",
            "..\\..\\windows\\system32",
            "~/secrets",
            "./hidden",
            "a/../b",
            "....//....//x",
            "..",
            "name..ext",
            "tab\there\nnewline\u{0}nul",
        ];
        for input in hostile {
            let out = sanitize_filename(input);
            assert!(!out.contains(".."), "{input:?} -> {out:?}");
            assert!(!out.contains('/'), "{input:?} -> {out:?}");
            assert!(!out.contains('\\'), "{input:?} -> {out:?}");
            assert!(!out.contains('~'), "{input:?} -> {out:?}");
            assert!(!out.chars().any(char::is_control), "{input:?} -> {out:?}");
            assert!(!out.is_empty());
        }
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc-passwd");
    }

    #[test]
    fn test_separator_runs_collapse() {
        assert_eq!(sanitize_filename("a  /  b -- c"), "a-b-c");
    }

    #[test]
    fn test_length_ceiling() {
        let out = sanitize_filename(&"word ".repeat(40));
        assert!(out.chars().count() <= MAX_FILENAME_CHARS);
        assert!(!out.ends_with('-'));
    }

    #[test]
    fn test_degenerate_input_falls_back() {
        assert_eq!(sanitize_filename(""), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("   "), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("../.."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("___"), FALLBACK_FILENAME);
    }
}
