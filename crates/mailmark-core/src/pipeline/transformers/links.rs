use std::sync::Arc;

use crate::config::{parse_options, LinkOptions, LINK_EXTRACTOR};
use crate::error::Result;
use crate::item::{Batch, Item, ItemEdit};
use crate::links::extract_links;
use crate::pipeline::{Transformer, TransformerOptions};

/// Tag added to items with at least one extracted link
pub const HAS_LINKS_TAG: &str = "has-links";

/// Fills `Item::links` from the item's content
#[derive(Debug, Clone, Default)]
pub struct LinkExtractor {
    options: LinkOptions,
}

impl LinkExtractor {
    pub fn new(options: LinkOptions) -> Self {
        Self { options }
    }

    fn extract(&self, item: &Arc<Item>) -> Arc<Item> {
        let links = extract_links(&item.content, &self.options);
        let mut edit = ItemEdit::new(item);
        if !links.is_empty() {
            edit.add_tag(HAS_LINKS_TAG);
        }
        edit.set_links(links);
        edit.finish()
    }
}

impl Transformer for LinkExtractor {
    fn name(&self) -> &str {
        LINK_EXTRACTOR
    }

    fn configure(&mut self, options: &TransformerOptions) -> Result<()> {
        self.options = parse_options(LINK_EXTRACTOR, options)?;
        Ok(())
    }

    fn transform(&self, items: &[Arc<Item>]) -> Result<Batch> {
        Ok(items.iter().map(|item| self.extract(item)).collect())
    }
}
