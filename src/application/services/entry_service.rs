// src/application/services/entry_service.rs
use crate::application::error::ApplicationResult;
use crate::domain::aggregation::CountField;
use crate::domain::entry::{AiModel, Category, Entry};
use crate::domain::filter::FilterCriteria;
use crate::domain::tag::Tag;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::io::Write;

/// Service interface for entry-related operations
pub trait EntryService: Send + Sync + Debug {
    /// Record a new entry. Returns `None` without touching the store
    /// when both prompt and link are empty (a blank submission is a
    /// silent no-op, not an error).
    fn add_entry(
        &self,
        prompt: &str,
        link: &str,
        tags: Option<&HashSet<Tag>>,
        category: Category,
        ai_model: AiModel,
    ) -> ApplicationResult<Option<Entry>>;

    /// Get an entry by ID
    fn get_entry(&self, id: i32) -> ApplicationResult<Option<Entry>>;

    /// Get all entries in insertion order
    fn get_all_entries(&self) -> ApplicationResult<Vec<Entry>>;

    /// Read all entries and apply the filter criteria, preserving order
    fn filter_entries(&self, criteria: &FilterCriteria) -> ApplicationResult<Vec<Entry>>;

    /// Frequency table over all stored entries
    fn count_entries_by(&self, field: CountField) -> ApplicationResult<HashMap<String, usize>>;

    /// Serialize the given entries as CSV to the writer
    fn export_csv(&self, entries: &[Entry], writer: &mut dyn Write) -> ApplicationResult<()>;
}
