// src/infrastructure/json.rs

use crate::domain::entry::Entry;
use crate::domain::error::{DomainError, DomainResult};
use serde::Serialize;
use std::io::Write;

/// Structure for serializing entries to JSON output
#[derive(Serialize)]
pub struct JsonEntryView {
    pub id: Option<i32>,
    pub prompt: String,
    pub link: String,
    pub tags: Vec<String>,
    pub category: String,
    pub ai_model: String,
    pub date_added: String,
}

impl JsonEntryView {
    /// Create from a domain `Entry`
    pub fn from_domain(entry: &Entry) -> Self {
        let mut tags: Vec<String> = entry
            .tags
            .iter()
            .map(|tag| tag.value().to_string())
            .collect();
        tags.sort();

        Self {
            id: entry.id,
            prompt: entry.prompt.to_string(),
            link: entry.link.to_string(),
            tags,
            category: entry.category.to_string(),
            ai_model: entry.ai_model.to_string(),
            date_added: entry.formatted_date(),
        }
    }

    /// Convert a slice of entries into a vector of JSON views
    pub fn from_domain_collection(entries: &[Entry]) -> Vec<Self> {
        entries.iter().map(Self::from_domain).collect()
    }
}

/// Converts entries to JSON and writes to standard output.
/// Standard output is used for pipeable content without colors or formatting.
pub fn write_entries_as_json(views: &[JsonEntryView]) -> DomainResult<()> {
    let json = serde_json::to_string_pretty(&views).map_err(|e| {
        DomainError::Serialization(format!("Failed to serialize entries to JSON: {}", e))
    })?;

    println!("{}", json);

    std::io::stdout()
        .flush()
        .map_err(|e| DomainError::Serialization(format!("Failed to flush stdout: {}", e)))?;

    Ok(())
}
