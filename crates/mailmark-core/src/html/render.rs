//! Recursive descent over the parsed tree, emitting Markdown

use scraper::node::Node;
use scraper::ElementRef;

use super::node::ElementKind;
use super::ConvertError;

pub(super) struct Renderer {
    max_depth: usize,
}

impl Renderer {
    pub(super) fn new(max_depth: usize) -> Self {
        Renderer { max_depth }
    }

    pub(super) fn render_children(
        &self,
        element: ElementRef<'_>,
        depth: usize,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => push_text(out, text),
                Node::Element(_) => {
                    if let Some(child_element) = ElementRef::wrap(child) {
                        self.render_element(child_element, depth + 1, out)?;
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Render children into a fresh buffer
    fn render_inner(&self, element: ElementRef<'_>, depth: usize) -> Result<String, ConvertError> {
        let mut inner = String::new();
        self.render_children(element, depth, &mut inner)?;
        Ok(inner)
    }

    fn render_element(
        &self,
        element: ElementRef<'_>,
        depth: usize,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        if depth > self.max_depth {
            return Err(ConvertError::TooDeep {
                limit: self.max_depth,
            });
        }

        let kind = ElementKind::from_tag(element.value().name());
        if kind.is_block() {
            ensure_line_start(out);
        }

        match kind {
            ElementKind::Heading(level) => {
                let inner = self.render_inner(element, depth)?;
                out.push_str(&"#".repeat(level));
                out.push(' ');
                out.push_str(inner.trim());
                out.push('\n');
            }
            ElementKind::Paragraph => {
                let inner = self.render_inner(element, depth)?;
                out.push_str(inner.trim());
                out.push_str("\n\n");
            }
            ElementKind::Division => {
                self.render_children(element, depth, out)?;
                out.push('\n');
            }
            ElementKind::List | ElementKind::Table => {
                self.render_children(element, depth, out)?;
                ensure_line_start(out);
                out.push('\n');
            }
            ElementKind::Strong => self.wrap_inline(element, depth, "**", out)?,
            ElementKind::Emphasis => self.wrap_inline(element, depth, "*", out)?,
            ElementKind::Code => self.wrap_inline(element, depth, "`", out)?,
            ElementKind::Preformatted => {
                let code: String = element.text().collect();
                out.push_str("```\n");
                out.push_str(code.trim_matches('\n'));
                out.push_str("\n```\n");
            }
            ElementKind::Blockquote => {
                let inner = self.render_inner(element, depth)?;
                for line in inner.lines().map(str::trim).filter(|l| !l.is_empty()) {
                    out.push_str("> ");
                    out.push_str(line);
                    out.push('\n');
                }
            }
            ElementKind::ListItem => {
                let inner = self.render_inner(element, depth)?;
                out.push_str("- ");
                out.push_str(inner.trim());
                out.push('\n');
            }
            ElementKind::Anchor => {
                let inner = self.render_inner(element, depth)?;
                let trimmed = inner.trim();
                let (leading, trailing) = edge_whitespace(element);
                if leading && needs_space(out) {
                    out.push(' ');
                }
                match element.value().attr("href").map(str::trim) {
                    Some(href) if !href.is_empty() && !trimmed.is_empty() => {
                        out.push_str(&format!("[{}]({})", trimmed, href));
                    }
                    _ => out.push_str(trimmed),
                }
                if trailing && needs_space(out) {
                    out.push(' ');
                }
            }
            ElementKind::Image => {
                if let Some(src) = element.value().attr("src").map(str::trim) {
                    if !src.is_empty() {
                        let alt = element.value().attr("alt").unwrap_or("").trim();
                        out.push_str(&format!("![{}]({})", alt, src));
                    }
                }
            }
            ElementKind::TableRow => self.render_row(element, depth, out)?,
            ElementKind::LineBreak => out.push('\n'),
            ElementKind::Rule => out.push_str("\n---\n"),
            ElementKind::Skipped => {}
            ElementKind::TableCell { .. } | ElementKind::Transparent => {
                self.render_children(element, depth, out)?;
            }
        }
        Ok(())
    }

    fn wrap_inline(
        &self,
        element: ElementRef<'_>,
        depth: usize,
        marker: &str,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let inner = self.render_inner(element, depth)?;
        let trimmed = inner.trim();
        let (leading, trailing) = edge_whitespace(element);
        if (leading || (trimmed.is_empty() && trailing)) && needs_space(out) {
            out.push(' ');
        }
        if trimmed.is_empty() {
            return Ok(());
        }
        out.push_str(marker);
        out.push_str(trimmed);
        out.push_str(marker);
        if trailing {
            out.push(' ');
        }
        Ok(())
    }

    /// One pipe-delimited line per row; a row with header cells gets a
    /// separator line beneath it
    fn render_row(
        &self,
        row: ElementRef<'_>,
        depth: usize,
        out: &mut String,
    ) -> Result<(), ConvertError> {
        let mut cells = Vec::new();
        let mut header = false;
        for child in row.children().filter_map(ElementRef::wrap) {
            if let ElementKind::TableCell { header: is_header } =
                ElementKind::from_tag(child.value().name())
            {
                header |= is_header;
                let inner = self.render_inner(child, depth + 1)?;
                let cell = inner
                    .split_whitespace()
                    .collect::<Vec<_>>()
                    .join(" ")
                    .replace('|', "\\|");
                cells.push(cell);
            }
        }
        if cells.is_empty() {
            return Ok(());
        }

        out.push_str("| ");
        out.push_str(&cells.join(" | "));
        out.push_str(" |\n");
        if header {
            out.push('|');
            for _ in &cells {
                out.push_str(" --- |");
            }
            out.push('\n');
        }
        Ok(())
    }
}

/// Append a text node, collapsing runs of whitespace the way a browser would
fn push_text(out: &mut String, text: &str) {
    if text.trim().is_empty() {
        if !text.is_empty() && !text.contains('\n') && needs_space(out) {
            out.push(' ');
        }
        return;
    }
    if text.starts_with(char::is_whitespace) && needs_space(out) {
        out.push(' ');
    }
    out.push_str(&text.split_whitespace().collect::<Vec<_>>().join(" "));
    if text.ends_with(char::is_whitespace) {
        out.push(' ');
    }
}

/// Whether the raw text of an element starts and ends with whitespace;
/// the space belongs outside the Markdown markers
fn edge_whitespace(element: ElementRef<'_>) -> (bool, bool) {
    let text: String = element.text().collect();
    (
        text.starts_with(char::is_whitespace),
        text.ends_with(char::is_whitespace),
    )
}

fn needs_space(out: &str) -> bool {
    !out.is_empty() && !out.ends_with(char::is_whitespace)
}

fn ensure_line_start(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}
