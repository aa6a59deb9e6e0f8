use regex::Regex;
use std::sync::OnceLock;

use super::is_signature_separator;

/// Signature patterns other than the separator only count in this many trailing lines
pub const SIGNATURE_WINDOW: usize = 8;

static SIGNATURE_PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();

fn signature_patterns() -> &'static [Regex] {
    SIGNATURE_PATTERNS.get_or_init(|| {
        [
            // Closing phrases
            r"(?i)^(?:best regards|kind regards|warm regards|regards|best wishes|best|sincerely|yours truly|thanks|thank you|many thanks|cheers)\s*[,.!]?$",
            r"(?i)^sent from my\b",
            // Contact lines
            r"(?i)^(?:e-?mail\s*:\s*)?[\w.+-]+@[\w-]+(?:\.[\w-]+)+$",
            // Phone numbers need a label, a leading `+` or a 3-3-4 grouping so
            // dates and reference numbers stay in the body
            r"(?i)^(?:tel|phone|mobile|cell|fax)\.?\s*:?\s*\+?[\d(][\d\s().-]{6,}\d$",
            r"^\+\d[\d\s().-]{6,}\d$",
            r"^(?:\(\d{3}\)\s*|\d{3}\.)\d{3}[\s.-]\d{4}$",
            // A bare "First Last" name
            r"^[A-Z][a-z]+ [A-Z][a-z]+$",
        ]
        .iter()
        .map(|pattern| Regex::new(pattern).expect("Invalid signature regex pattern"))
        .collect()
    })
}

fn matches_signature_pattern(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && signature_patterns().iter().any(|re| re.is_match(trimmed))
}

/// Split a trailing signature block off a message.
///
/// A `--` separator starts the signature wherever it appears. Closing
/// phrases, contact lines and bare names start it only within the last
/// [`SIGNATURE_WINDOW`] lines. Everything from the triggering line on is
/// signature, so a message that is only a closing leaves an empty body.
pub fn extract_signature(content: &str) -> (String, Option<String>) {
    let lines: Vec<&str> = content.lines().collect();
    let window_start = lines.len().saturating_sub(SIGNATURE_WINDOW);

    let start = lines.iter().enumerate().position(|(idx, line)| {
        is_signature_separator(line)
            || (idx >= window_start && matches_signature_pattern(line))
    });

    match start {
        Some(idx) => {
            let body = lines[..idx].join("\n").trim_end().to_string();
            let signature = lines[idx..].join("\n").trim().to_string();
            (body, (!signature.is_empty()).then_some(signature))
        }
        None => (content.trim_end().to_string(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_starts_signature() {
        let (body, signature) = extract_signature("See you.\n-- \nAnn Lee\nACME Corp");
        assert_eq!(body, "See you.");
        assert_eq!(signature.as_deref(), Some("-- \nAnn Lee\nACME Corp"));
    }

    #[test]
    fn test_closing_phrase_starts_signature() {
        let (body, signature) =
            extract_signature("The report is attached.\n\nBest regards,\nAnn\n+1 (555) 123-4567");
        assert_eq!(body, "The report is attached.");
        assert_eq!(
            signature.as_deref(),
            Some("Best regards,\nAnn\n+1 (555) 123-4567")
        );
    }

    #[test]
    fn test_sent_from_device() {
        let (body, signature) = extract_signature("On my way\n\nSent from my iPhone");
        assert_eq!(body, "On my way");
        assert_eq!(signature.as_deref(), Some("Sent from my iPhone"));
    }

    #[test]
    fn test_contact_lines_and_names() {
        let (body, _) = extract_signature("Ping me later.\nann@example.com");
        assert_eq!(body, "Ping me later.");

        let (body, _) = extract_signature("Call if needed.\nPhone: 555-123-4567");
        assert_eq!(body, "Call if needed.");

        let (body, _) = extract_signature("Approved.\nAnn Lee");
        assert_eq!(body, "Approved.");
    }

    #[test]
    fn test_patterns_outside_window_are_content() {
        let mut content = String::from("Intro line\nThanks,\n");
        for i in 0..10 {
            content.push_str(&format!("detail {}\n", i));
        }
        let (body, signature) = extract_signature(&content);
        assert!(body.starts_with("Intro line\nThanks,"));
        assert!(body.ends_with("detail 9"));
        assert_eq!(signature, None);
    }

    #[test]
    fn test_closing_only_message_is_all_signature() {
        let (body, signature) = extract_signature("Thanks,\nAnn");
        assert_eq!(body, "");
        assert_eq!(signature.as_deref(), Some("Thanks,\nAnn"));
    }

    #[test]
    fn test_dates_and_ids_are_not_phone_numbers() {
        let content = "Meeting moved to:\n2024-01-15\nSee you there.";
        let (body, signature) = extract_signature(content);
        assert_eq!(body, content);
        assert_eq!(signature, None);

        let (body, signature) = extract_signature("Ticket\n12345678\nis closed.");
        assert_eq!(body, "Ticket\n12345678\nis closed.");
        assert_eq!(signature, None);
    }

    #[test]
    fn test_grouped_phone_numbers() {
        let (body, _) = extract_signature("Call me.\n(555) 123-4567");
        assert_eq!(body, "Call me.");

        let (body, _) = extract_signature("Call me.\n555.123.4567");
        assert_eq!(body, "Call me.");
    }

    #[test]
    fn test_mid_sentence_mentions_do_not_trigger() {
        let (body, signature) =
            extract_signature("Write to ann@example.com about it.\nThanks for the help today");
        assert_eq!(
            body,
            "Write to ann@example.com about it.\nThanks for the help today"
        );
        assert_eq!(signature, None);
    }
}
