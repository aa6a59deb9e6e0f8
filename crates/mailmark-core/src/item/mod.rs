//! The item model: one unit of transformable content
//!
//! Source adapters create [`Item`]s with raw fields; transformers rewrite
//! them stage by stage through [`ItemEdit`]; target writers consume the
//! result. A batch is a `Vec<Arc<Item>>` so a stage that leaves an item
//! alone hands the same allocation to the next stage.

mod edit;
mod types;

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub use edit::ItemEdit;
pub use types::{Attachment, ItemType, Link, LinkType, Sender};

/// A batch of items flowing through the pipeline
pub type Batch = Vec<Arc<Item>>;

/// Metadata key holding the thread identifier
pub const THREAD_ID_KEY: &str = "thread_id";
/// Metadata key holding the sender
pub const FROM_KEY: &str = "from";

/// Source-specific fields attached to an item.
///
/// `thread_id` and `from` are resolved into typed fields at ingestion;
/// every other key is carried through untouched in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ItemMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<Sender>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ItemMetadata {
    /// Look up a metadata value by key, including the typed keys
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        match key {
            THREAD_ID_KEY => self.thread_id.clone().map(serde_json::Value::String),
            FROM_KEY => self
                .from
                .as_ref()
                .and_then(|sender| serde_json::to_value(sender).ok()),
            _ => self.extra.get(key).cloned(),
        }
    }
}

/// The universal content unit: an email, an event or a thread digest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique within its source
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub source_type: String,
    #[serde(default)]
    pub item_type: ItemType,
    /// Creation time, used to order messages within a thread
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub metadata: ItemMetadata,
}

impl Item {
    /// Create an item with the required fields
    pub fn new(id: impl Into<String>, item_type: ItemType) -> Self {
        Item {
            id: id.into(),
            title: String::new(),
            content: String::new(),
            source_type: String::new(),
            item_type,
            created_at: DateTime::<Utc>::default(),
            tags: Vec::new(),
            links: Vec::new(),
            attachments: Vec::new(),
            metadata: ItemMetadata::default(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn with_source_type(mut self, source_type: impl Into<String>) -> Self {
        self.source_type = source_type.into();
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_thread_id(mut self, thread_id: impl Into<String>) -> Self {
        self.metadata.thread_id = Some(thread_id.into());
        self
    }

    pub fn with_sender(mut self, sender: Sender) -> Self {
        self.metadata.from = Some(sender);
        self
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Add a tag unless already present. Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has_tag(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Key used to group the item into a thread: its thread id, or its own id
    pub fn thread_key(&self) -> &str {
        match self.metadata.thread_id.as_deref().map(str::trim) {
            Some(thread_id) if !thread_id.is_empty() => thread_id,
            _ => &self.id,
        }
    }

    /// Identifier of the sender, if the source supplied one
    pub fn sender_id(&self) -> Option<String> {
        self.metadata.from.as_ref().and_then(Sender::identifier)
    }

    /// Wrap into the shared form used by batches
    pub fn into_shared(self) -> Arc<Item> {
        Arc::new(self)
    }
}
