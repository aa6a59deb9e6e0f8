//! Name-to-transformer registry

use std::collections::BTreeMap;
use std::fmt;

use super::transformers::{ContentCleaner, LinkExtractor, ThreadTransformer};
use super::Transformer;
use crate::config::{CONTENT_CLEANER, LINK_EXTRACTOR, THREAD_PROCESSOR};
use crate::error::{MailmarkError, Result};

/// Builds a fresh, unconfigured transformer
pub type TransformerFactory = Box<dyn Fn() -> Box<dyn Transformer> + Send + Sync>;

/// The transformers that ship with mailmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformerKind {
    ContentCleaner,
    LinkExtractor,
    ThreadProcessor,
}

impl TransformerKind {
    pub const ALL: [TransformerKind; 3] = [
        TransformerKind::ContentCleaner,
        TransformerKind::LinkExtractor,
        TransformerKind::ThreadProcessor,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TransformerKind::ContentCleaner => CONTENT_CLEANER,
            TransformerKind::LinkExtractor => LINK_EXTRACTOR,
            TransformerKind::ThreadProcessor => THREAD_PROCESSOR,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// A transformer of this kind with default options
    pub fn create(&self) -> Box<dyn Transformer> {
        match self {
            TransformerKind::ContentCleaner => Box::new(ContentCleaner::default()),
            TransformerKind::LinkExtractor => Box::new(LinkExtractor::default()),
            TransformerKind::ThreadProcessor => Box::new(ThreadTransformer::default()),
        }
    }
}

impl fmt::Display for TransformerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Factories keyed by transformer name
pub struct TransformerRegistry {
    factories: BTreeMap<String, TransformerFactory>,
}

impl TransformerRegistry {
    /// Registry holding the built-in transformers
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for kind in TransformerKind::ALL {
            registry.register(kind.name(), move || kind.create());
        }
        registry
    }

    /// Registry with nothing registered
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a factory under `name`, replacing any earlier one
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn() -> Box<dyn Transformer> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        self.factories.keys().map(String::as_str).collect()
    }

    /// Build an unconfigured transformer by name
    pub fn create(&self, name: &str) -> Result<Box<dyn Transformer>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(MailmarkError::UnknownTransformer {
                name: name.to_string(),
                registered: self.names().join(", "),
            }),
        }
    }
}

impl Default for TransformerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("names", &self.names())
            .finish()
    }
}
