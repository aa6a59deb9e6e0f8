use chrono::Duration;
use std::sync::Arc;

use super::group::ThreadGroup;
use super::sanitize::sanitize_filename;
use crate::item::Item;

/// `Thread_<sanitized subject>_<n>-messages`
pub fn thread_title(group: &ThreadGroup) -> String {
    format!(
        "Thread_{}_{}-messages",
        sanitize_filename(&group.subject),
        group.message_count
    )
}

/// Render a span in its two largest units, e.g. `2 days 3 hours`
pub fn format_duration(duration: Duration) -> String {
    let days = duration.num_days();
    let hours = duration.num_hours() % 24;
    let minutes = duration.num_minutes() % 60;

    let parts: Vec<String> = if days > 0 {
        vec![unit(days, "day"), unit(hours, "hour")]
    } else if hours > 0 {
        vec![unit(hours, "hour"), unit(minutes, "minute")]
    } else if minutes > 0 {
        vec![unit(minutes, "minute")]
    } else {
        return "less than a minute".to_string();
    };

    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn unit(value: i64, name: &str) -> String {
    match value {
        0 => String::new(),
        1 => format!("1 {}", name),
        n => format!("{} {}s", n, name),
    }
}

/// Markdown transcript of `shown`, headed by the thread's summary fields
pub(crate) fn render_transcript(group: &ThreadGroup, shown: &[Arc<Item>]) -> String {
    let mut out = String::new();

    let subject = if group.subject.is_empty() {
        "(no subject)"
    } else {
        group.subject.as_str()
    };
    out.push_str(&format!("# {}\n\n", subject));

    let participants = if group.participants.is_empty() {
        "unknown".to_string()
    } else {
        group.participants.join(", ")
    };
    out.push_str(&format!("**Participants:** {}\n", participants));
    out.push_str(&format!("**Messages:** {}\n", group.message_count));
    out.push_str(&format!(
        "**Duration:** {}\n",
        format_duration(group.duration())
    ));

    for message in shown {
        out.push_str("\n---\n\n");
        out.push_str(&render_message(message));
    }

    let hidden = group.message_count.saturating_sub(shown.len());
    if hidden > 0 {
        out.push_str(&format!("\n*{} additional messages not shown*\n", hidden));
    }
    out
}

fn render_message(message: &Item) -> String {
    let sender = message
        .metadata
        .from
        .as_ref()
        .map(|from| from.display())
        .filter(|display| !display.is_empty())
        .unwrap_or_else(|| "Unknown sender".to_string());

    format!(
        "### {} ({})\n\n{}\n",
        sender,
        message.created_at.format("%Y-%m-%d %H:%M UTC"),
        message.content.trim()
    )
}
