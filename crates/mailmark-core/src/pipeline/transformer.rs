//! Transformer trait

use std::sync::Arc;

use crate::error::Result;
use crate::item::{Batch, Item};

/// Raw, loosely typed options as they appear under `[transformers.<name>]`
pub type TransformerOptions = toml::Table;

/// A named stage over a batch of items.
///
/// Implementations parse their options once in [`Transformer::configure`];
/// [`Transformer::transform`] must not mutate shared items and returns the
/// same `Arc` for every item it leaves alone.
pub trait Transformer: Send + Sync {
    fn name(&self) -> &str;

    /// Apply options, rejecting unknown keys and invalid values
    fn configure(&mut self, options: &TransformerOptions) -> Result<()>;

    fn transform(&self, items: &[Arc<Item>]) -> Result<Batch>;
}
