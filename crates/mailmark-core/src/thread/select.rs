use std::collections::HashSet;
use std::sync::Arc;

use crate::item::Item;

/// Score for a sender not yet represented in the selection
pub const NEW_SENDER_SCORE: u32 = 3;
/// Score for a message longer than `LONG_MESSAGE_CHARS`
pub const LONG_MESSAGE_SCORE: u32 = 2;
/// Score for a message carrying attachments
pub const ATTACHMENT_SCORE: u32 = 1;
pub const LONG_MESSAGE_CHARS: usize = 500;

/// Pick at most `max_messages` representative messages from a chronologically
/// sorted thread.
///
/// The starter and the most recent message are always kept. Remaining slots go
/// to the highest scoring interior messages, picked one at a time so the
/// new-sender bonus reflects earlier picks; ties go to the earlier message.
/// The result is in chronological order.
pub fn select_key_messages(messages: &[Arc<Item>], max_messages: usize) -> Vec<Arc<Item>> {
    if messages.len() <= max_messages {
        return messages.to_vec();
    }
    if max_messages == 0 {
        return Vec::new();
    }
    if max_messages == 1 {
        return vec![Arc::clone(&messages[0])];
    }

    let last = messages.len() - 1;
    let mut selected = vec![0, last];
    let mut senders: HashSet<String> = selected
        .iter()
        .filter_map(|&i| messages[i].sender_id())
        .collect();

    for _ in 2..max_messages {
        let best = (1..last)
            .filter(|i| !selected.contains(i))
            .map(|i| (score(&messages[i], &senders), i))
            // max_by_key keeps the last maximum, so compare on reversed index
            .max_by_key(|&(score, i)| (score, std::cmp::Reverse(i)));
        let Some((_, index)) = best else { break };
        if let Some(sender) = messages[index].sender_id() {
            senders.insert(sender);
        }
        selected.push(index);
    }

    selected.sort_unstable();
    selected.into_iter().map(|i| Arc::clone(&messages[i])).collect()
}

fn score(message: &Item, senders: &HashSet<String>) -> u32 {
    let mut score = 0;
    if let Some(sender) = message.sender_id() {
        if !senders.contains(&sender) {
            score += NEW_SENDER_SCORE;
        }
    }
    if message.content.chars().count() > LONG_MESSAGE_CHARS {
        score += LONG_MESSAGE_SCORE;
    }
    if !message.attachments.is_empty() {
        score += ATTACHMENT_SCORE;
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Attachment, ItemType, Sender};
    use chrono::{TimeZone, Utc};

    fn message(id: &str, minute: u32, from: &str) -> Item {
        Item::new(id, ItemType::Email)
            .with_created_at(Utc.with_ymd_and_hms(2024, 5, 2, 8, minute, 0).unwrap())
            .with_sender(Sender::Plain(from.to_string()))
            .with_content("short")
    }

    fn ids(messages: &[Arc<Item>]) -> Vec<&str> {
        messages.iter().map(|m| m.id.as_str()).collect()
    }

    fn thread(items: Vec<Item>) -> Vec<Arc<Item>> {
        items.into_iter().map(Item::into_shared).collect()
    }

    #[test]
    fn test_first_and_last_always_selected() {
        let messages = thread(vec![
            message("m1", 0, "a@x.com"),
            message("m2", 1, "b@x.com"),
            message("m3", 2, "c@x.com"),
            message("m4", 3, "d@x.com"),
        ]);
        let selected = select_key_messages(&messages, 2);
        assert_eq!(ids(&selected), vec!["m1", "m4"]);
    }

    #[test]
    fn test_size_is_min_of_limit_and_total() {
        let messages = thread((0..6).map(|i| message(&format!("m{}", i), i, "a@x.com")).collect());
        for limit in 1..=8 {
            let selected = select_key_messages(&messages, limit);
            assert_eq!(selected.len(), limit.min(messages.len()));
            assert_eq!(selected[0].id, "m0");
            let mut sorted = selected.clone();
            sorted.sort_by_key(|m| m.created_at);
            assert_eq!(ids(&selected), ids(&sorted));
        }
    }

    #[test]
    fn test_scoring_prefers_new_sender_then_length_then_attachments() {
        let long = message("long", 2, "a@x.com").with_content("x".repeat(LONG_MESSAGE_CHARS + 1));
        let attached = message("attached", 3, "a@x.com").with_attachment(Attachment {
            id: "att".to_string(),
            name: "plan.pdf".to_string(),
            ..Attachment::default()
        });
        let messages = thread(vec![
            message("first", 0, "a@x.com"),
            message("plain", 1, "a@x.com"),
            long,
            attached,
            message("newcomer", 4, "z@x.com"),
            message("last", 5, "a@x.com"),
        ]);

        assert_eq!(
            ids(&select_key_messages(&messages, 3)),
            vec!["first", "newcomer", "last"]
        );
        assert_eq!(
            ids(&select_key_messages(&messages, 4)),
            vec!["first", "long", "newcomer", "last"]
        );
        assert_eq!(
            ids(&select_key_messages(&messages, 5)),
            vec!["first", "long", "attached", "newcomer", "last"]
        );
    }

    #[test]
    fn test_new_sender_bonus_recomputed_after_each_pick() {
        let messages = thread(vec![
            message("first", 0, "a@x.com"),
            message("z1", 1, "z@x.com"),
            message("z2", 2, "z@x.com"),
            message("y1", 3, "y@x.com"),
            message("last", 4, "a@x.com"),
        ]);
        // z1 wins the tie with y1; z2 then loses its bonus
        assert_eq!(
            ids(&select_key_messages(&messages, 4)),
            vec!["first", "z1", "y1", "last"]
        );
    }

    #[test]
    fn test_empty_thread() {
        assert!(select_key_messages(&[], 5).is_empty());
    }
}
