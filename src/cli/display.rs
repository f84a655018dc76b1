// src/cli/display.rs

use crate::domain::entry::Entry;
use crossterm::style::Stylize;
use std::collections::HashMap;

/// One entry, formatted for the terminal.
///
/// Layout: "id: prompt <link> (Category/Model) [tags] date"
pub fn format_entry(entry: &Entry) -> String {
    let id = entry.id.unwrap_or(0);
    let tags = entry.formatted_tags();

    let tags_display = if tags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", tags.as_str().magenta())
    };

    let link_display = if entry.link.is_empty() {
        String::new()
    } else {
        format!(" <{}>", entry.link.as_str().yellow())
    };

    format!(
        "{}: {}{} ({}/{}){} {}",
        id.to_string().blue(),
        entry.prompt.as_str().green(),
        link_display,
        entry.category,
        entry.ai_model,
        tags_display,
        entry.formatted_date().dim(),
    )
}

/// Print entries one per line, followed by a match count
pub fn show_entries(entries: &[Entry]) {
    for entry in entries {
        println!("{}", format_entry(entry));
    }
    eprintln!("Found {} entries", entries.len());
}

/// Print a frequency table, largest count first, ties by label
pub fn show_counts(title: &str, counts: &HashMap<String, usize>) {
    println!("{}", title.bold());

    let mut rows: Vec<(&String, &usize)> = counts.iter().collect();
    rows.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);

    for (label, count) in rows {
        println!("  {:<width$}  {}", label, count, width = width);
    }
}
