//! Closed set of element kinds the converter knows how to render

/// How an HTML element is rendered.
///
/// Every tag name maps to exactly one kind; tags the converter has no
/// Markdown form for are [`ElementKind::Transparent`] and only contribute
/// their children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ElementKind {
    /// `h1`-`h6`
    Heading(usize),
    Paragraph,
    Division,
    /// `strong`, `b`
    Strong,
    /// `em`, `i`
    Emphasis,
    Code,
    Preformatted,
    Blockquote,
    /// `ul`, `ol`
    List,
    ListItem,
    Anchor,
    Image,
    Table,
    TableRow,
    /// `td`, `th`
    TableCell { header: bool },
    LineBreak,
    Rule,
    /// Subtree is dropped entirely
    Skipped,
    Transparent,
}

impl ElementKind {
    pub(crate) fn from_tag(name: &str) -> Self {
        match name {
            "h1" => ElementKind::Heading(1),
            "h2" => ElementKind::Heading(2),
            "h3" => ElementKind::Heading(3),
            "h4" => ElementKind::Heading(4),
            "h5" => ElementKind::Heading(5),
            "h6" => ElementKind::Heading(6),
            "p" => ElementKind::Paragraph,
            "div" => ElementKind::Division,
            "strong" | "b" => ElementKind::Strong,
            "em" | "i" => ElementKind::Emphasis,
            "code" => ElementKind::Code,
            "pre" => ElementKind::Preformatted,
            "blockquote" => ElementKind::Blockquote,
            "ul" | "ol" => ElementKind::List,
            "li" => ElementKind::ListItem,
            "a" => ElementKind::Anchor,
            "img" => ElementKind::Image,
            "table" => ElementKind::Table,
            "tr" => ElementKind::TableRow,
            "td" => ElementKind::TableCell { header: false },
            "th" => ElementKind::TableCell { header: true },
            "br" => ElementKind::LineBreak,
            "hr" => ElementKind::Rule,
            "style" | "script" | "head" | "title" | "noscript" | "template" => {
                ElementKind::Skipped
            }
            _ => ElementKind::Transparent,
        }
    }

    /// Block kinds start on a fresh line
    pub(crate) fn is_block(self) -> bool {
        matches!(
            self,
            ElementKind::Heading(_)
                | ElementKind::Paragraph
                | ElementKind::Division
                | ElementKind::Preformatted
                | ElementKind::Blockquote
                | ElementKind::List
                | ElementKind::ListItem
                | ElementKind::Table
                | ElementKind::TableRow
                | ElementKind::Rule
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_carry_level() {
        assert_eq!(ElementKind::from_tag("h1"), ElementKind::Heading(1));
        assert_eq!(ElementKind::from_tag("h6"), ElementKind::Heading(6));
    }

    #[test]
    fn test_aliases_share_a_kind() {
        assert_eq!(ElementKind::from_tag("b"), ElementKind::from_tag("strong"));
        assert_eq!(ElementKind::from_tag("i"), ElementKind::from_tag("em"));
        assert_eq!(ElementKind::from_tag("ol"), ElementKind::from_tag("ul"));
    }

    #[test]
    fn test_unknown_tags_are_transparent() {
        assert_eq!(ElementKind::from_tag("span"), ElementKind::Transparent);
        assert_eq!(ElementKind::from_tag("font"), ElementKind::Transparent);
        assert!(!ElementKind::Transparent.is_block());
    }
}
