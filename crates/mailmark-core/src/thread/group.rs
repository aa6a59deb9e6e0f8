use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;

use crate::item::Item;
use crate::text::clean_title;

/// Messages sharing a thread id, rebuilt on every call
#[derive(Debug, Clone, Default)]
pub struct ThreadGroup {
    pub thread_id: String,
    /// Starter's title with reply/forward prefixes removed
    pub subject: String,
    /// Sorted ascending by creation time
    pub messages: Vec<Arc<Item>>,
    /// Distinct sender identifiers in first-seen order
    pub participants: Vec<String>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub message_count: usize,
}

impl ThreadGroup {
    fn start(thread_id: &str, item: &Arc<Item>) -> Self {
        let mut group = ThreadGroup {
            thread_id: thread_id.to_string(),
            start_time: item.created_at,
            end_time: item.created_at,
            ..ThreadGroup::default()
        };
        group.push(item);
        group
    }

    fn push(&mut self, item: &Arc<Item>) {
        self.start_time = self.start_time.min(item.created_at);
        self.end_time = self.end_time.max(item.created_at);
        if let Some(sender) = item.sender_id() {
            if !self.participants.contains(&sender) {
                self.participants.push(sender);
            }
        }
        self.messages.push(Arc::clone(item));
        self.message_count = self.messages.len();
    }

    fn finish(&mut self) {
        // Stable: messages with equal timestamps keep input order
        self.messages.sort_by_key(|message| message.created_at);
        self.subject = self
            .messages
            .first()
            .map(|starter| clean_title(&starter.title))
            .unwrap_or_default();
    }

    /// Time between the first and the last message
    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Bucket items by thread key, in order of each thread's first message in the input
pub fn group_threads(items: &[Arc<Item>]) -> Vec<ThreadGroup> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<ThreadGroup> = Vec::new();

    for item in items {
        let key = item.thread_key();
        match index.get(key) {
            Some(&position) => groups[position].push(item),
            None => {
                index.insert(key, groups.len());
                groups.push(ThreadGroup::start(key, item));
            }
        }
    }

    for group in &mut groups {
        group.finish();
    }
    groups
}
