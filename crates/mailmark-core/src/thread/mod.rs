//! Thread grouping, consolidation and summaries
//!
//! Items are bucketed by their `thread_id` (or their own id). Depending on
//! the mode, every multi-message thread is replaced by one synthetic item
//! holding a full transcript or a digest of its key messages. Nothing is
//! cached between calls.

mod group;
mod render;
mod sanitize;
mod select;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::bail_unsupported;
use crate::config::ThreadOptions;
use crate::error::{MailmarkError, Result};
use crate::item::{Batch, Item, ItemType};

pub use group::{group_threads, ThreadGroup};
pub use render::{format_duration, thread_title};
pub use sanitize::{sanitize_filename, FALLBACK_FILENAME, MAX_FILENAME_CHARS};
pub use select::{select_key_messages, LONG_MESSAGE_CHARS};

/// Tag added to consolidated thread items
pub const THREAD_TAG: &str = "email-thread";
/// Tag added to thread summary items
pub const SUMMARY_TAG: &str = "thread-summary";

/// How the thread processor treats multi-message threads
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ThreadMode {
    /// Leave every message as its own item
    #[default]
    Individual,
    /// One item per thread with every message
    Consolidated,
    /// One item per thread with only the key messages
    Summary,
}

impl ThreadMode {
    pub const VALID_MODES: &'static [&'static str] = &["individual", "consolidated", "summary"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThreadMode::Individual => "individual",
            ThreadMode::Consolidated => "consolidated",
            ThreadMode::Summary => "summary",
        }
    }
}

impl FromStr for ThreadMode {
    type Err = MailmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "individual" => Ok(ThreadMode::Individual),
            "consolidated" => Ok(ThreadMode::Consolidated),
            "summary" => Ok(ThreadMode::Summary),
            other => bail_unsupported!("thread mode", other, Self::VALID_MODES.join(", ")),
        }
    }
}

impl TryFrom<String> for ThreadMode {
    type Error = MailmarkError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<ThreadMode> for String {
    fn from(mode: ThreadMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for ThreadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Applies the configured [`ThreadMode`] to a batch
#[derive(Debug, Clone, Default)]
pub struct ThreadProcessor {
    options: ThreadOptions,
}

impl ThreadProcessor {
    pub fn new(options: ThreadOptions) -> Self {
        Self { options }
    }

    pub fn mode(&self) -> ThreadMode {
        self.options.thread_mode
    }

    /// Group the batch into threads and replace multi-message threads
    /// according to the mode. Single-message threads pass through, and each
    /// synthetic item takes the place of its thread's first message.
    #[instrument(skip(self, items), fields(mode = %self.options.thread_mode, items = items.len()))]
    pub fn process_threads(&self, items: &[Arc<Item>]) -> Batch {
        if self.options.thread_mode == ThreadMode::Individual {
            return items.to_vec();
        }

        let groups = group_threads(items);
        let mut out = Vec::with_capacity(groups.len());
        for group in &groups {
            if group.message_count > 1 {
                out.push(Arc::new(self.synthesize(group)));
            } else {
                out.extend(group.messages.iter().cloned());
            }
        }

        debug!(threads = groups.len(), output = out.len(), "processed threads");
        out
    }

    fn synthesize(&self, group: &ThreadGroup) -> Item {
        let (item_type, tag, shown) = match self.options.thread_mode {
            ThreadMode::Summary => (
                ItemType::EmailThreadSummary,
                SUMMARY_TAG,
                select_key_messages(&group.messages, self.options.thread_summary_length),
            ),
            _ => (ItemType::EmailThread, THREAD_TAG, group.messages.clone()),
        };

        let source_type = group
            .messages
            .first()
            .map(|starter| starter.source_type.clone())
            .unwrap_or_default();

        let mut item = Item::new(synthetic_id(&group.thread_id), item_type)
            .with_title(thread_title(group))
            .with_content(render::render_transcript(group, &shown))
            .with_source_type(source_type)
            .with_created_at(group.end_time)
            .with_thread_id(group.thread_id.clone());

        merge_messages(&mut item, group);
        item.add_tag(tag);
        self.annotate(&mut item, group, shown.len());
        item
    }

    fn annotate(&self, item: &mut Item, group: &ThreadGroup, shown: usize) {
        let extra = &mut item.metadata.extra;
        extra.insert("message_count".into(), group.message_count.into());
        extra.insert("participants".into(), group.participants.clone().into());
        extra.insert("start_time".into(), group.start_time.to_rfc3339().into());
        extra.insert("end_time".into(), group.end_time.to_rfc3339().into());
        extra.insert("duration".into(), format_duration(group.duration()).into());
        if self.options.thread_mode == ThreadMode::Summary {
            extra.insert("shown_messages".into(), shown.into());
        }
    }
}

/// `thread-<slug>` built from the thread id
fn synthetic_id(thread_id: &str) -> String {
    let slug = slug::slugify(thread_id);
    if slug.is_empty() {
        format!("thread-{}", FALLBACK_FILENAME)
    } else {
        format!("thread-{}", slug)
    }
}

/// Union of the messages' tags, links (by URL) and attachments
fn merge_messages(item: &mut Item, group: &ThreadGroup) {
    let mut seen_urls = HashSet::new();
    for message in &group.messages {
        for tag in &message.tags {
            item.add_tag(tag.as_str());
        }
        for link in &message.links {
            if seen_urls.insert(link.url.clone()) {
                item.links.push(link.clone());
            }
        }
        item.attachments.extend(message.attachments.iter().cloned());
    }
}
