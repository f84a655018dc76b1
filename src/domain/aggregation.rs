// src/domain/aggregation.rs
use crate::domain::entry::Entry;
use itertools::Itertools;
use std::collections::HashMap;

/// Field an entry list can be tallied by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountField {
    Category,
    AiModel,
}

/// Frequency table over the given field. Counts sum to `entries.len()`;
/// key order is unspecified.
pub fn count_by(entries: &[Entry], field: CountField) -> HashMap<String, usize> {
    entries
        .iter()
        .map(|entry| match field {
            CountField::Category => entry.category.to_string(),
            CountField::AiModel => entry.ai_model.to_string(),
        })
        .counts()
}
