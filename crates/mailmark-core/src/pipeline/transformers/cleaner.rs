use std::sync::Arc;
use tracing::trace;

use crate::config::{parse_options, CleanerOptions, CONTENT_CLEANER};
use crate::error::Result;
use crate::html::{html_to_markdown, looks_like_html};
use crate::item::{Batch, Item, ItemEdit};
use crate::pipeline::{Transformer, TransformerOptions};
use crate::text::{clean_title, extract_signature, remove_extra_whitespace, strip_quoted_text};

/// Metadata key holding a signature removed from the content
pub const SIGNATURE_KEY: &str = "signature";

/// HTML conversion, quote stripping, signature removal and title cleanup
#[derive(Debug, Clone, Default)]
pub struct ContentCleaner {
    options: CleanerOptions,
}

impl ContentCleaner {
    pub fn new(options: CleanerOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CleanerOptions {
        &self.options
    }

    /// Clean one item, returning the original `Arc` when nothing changed
    pub fn clean_item(&self, item: &Arc<Item>) -> Arc<Item> {
        let mut edit = ItemEdit::new(item);

        let (content, signature) = self.clean_content(&item.content);
        edit.set_content(content);
        if let Some(signature) = signature {
            edit.set_metadata(SIGNATURE_KEY, signature.into());
        }

        if self.options.clean_titles {
            edit.set_title(clean_title(&item.title));
        }

        if edit.is_changed() {
            trace!(item = %item.id, "cleaned item");
        }
        edit.finish()
    }

    /// Run the enabled content steps in order
    pub fn clean_content(&self, raw: &str) -> (String, Option<String>) {
        let options = &self.options;
        let mut content = raw.to_string();

        // Plain text with stray `<` would be mangled by the parser
        if options.html_to_markdown && (looks_like_html(&content) || !content.contains('<')) {
            content = html_to_markdown(&content);
        }

        if options.strip_quoted_text {
            content = strip_quoted_text(&content, options.signature_detection_threshold);
        }

        let mut signature = None;
        if options.extract_signatures {
            let (body, found) = extract_signature(&content);
            if found.is_some() {
                content = body;
                signature = found;
            }
        }

        if options.remove_extra_whitespace {
            content = remove_extra_whitespace(&content);
        }

        (content, signature)
    }
}

impl Transformer for ContentCleaner {
    fn name(&self) -> &str {
        CONTENT_CLEANER
    }

    fn configure(&mut self, options: &TransformerOptions) -> Result<()> {
        self.options = parse_options(CONTENT_CLEANER, options)?;
        Ok(())
    }

    fn transform(&self, items: &[Arc<Item>]) -> Result<Batch> {
        Ok(items.iter().map(|item| self.clean_item(item)).collect())
    }
}
