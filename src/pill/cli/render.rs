use chrono::{DateTime, Utc};
use colored::Colorize;
use pill::api::{CmdMessage, CmdResult, DisplayItem, MessageLevel};
use pill::transactions::Transaction;
use timeago::Formatter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Prints everything a command produced: heading, numbered batches,
/// transactions, then messages.
pub(super) fn print_result(result: &CmdResult) {
    print!("{}", render_result(result, Utc::now()));
}

pub(super) fn render_result(result: &CmdResult, now: DateTime<Utc>) -> String {
    let mut out = String::new();
    if let Some(heading) = &result.heading {
        out.push_str(&format!("{}\n", heading.bold()));
    }
    out.push_str(&render_item_list(&result.listed_items));
    out.push_str(&render_transactions(&result.transactions, now));
    out.push_str(&render_messages(&result.messages));
    out
}

pub(super) fn render_item_list(items: &[DisplayItem]) -> String {
    items
        .iter()
        .map(|entry| {
            let idx = format!("{}.", entry.index);
            format!("{} {}\n", idx.yellow(), entry.item)
        })
        .collect()
}

pub(super) fn render_transactions(transactions: &[Transaction], now: DateTime<Utc>) -> String {
    transactions
        .iter()
        .enumerate()
        .map(|(i, tx)| {
            let idx = format!("{}.", i + 1);
            format!(
                "{} {}  {}  {}\n",
                idx.yellow(),
                tx.timestamp.format(TIMESTAMP_FORMAT).to_string().dimmed(),
                tx,
                format_time_ago(tx.timestamp, now).dimmed()
            )
        })
        .collect()
}

pub(super) fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let content = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", content)
        })
        .collect()
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    lines.iter().map(|line| format!("{}\n", line)).collect()
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
