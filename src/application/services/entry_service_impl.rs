// src/application/services/entry_service_impl.rs
use std::collections::{HashMap, HashSet};
use std::io::Write;
use std::sync::Arc;

use crate::application::error::ApplicationResult;
use crate::application::services::entry_service::EntryService;
use crate::domain::aggregation::{count_by, CountField};
use crate::domain::entry::{AiModel, Category, Entry};
use crate::domain::filter::FilterCriteria;
use crate::domain::repositories::repository::EntryRepository;
use crate::domain::tag::Tag;
use crate::infrastructure::csv_export;
use tracing::{debug, instrument};

#[derive(Debug)]
pub struct EntryServiceImpl<R: EntryRepository> {
    repository: Arc<R>,
}

impl<R: EntryRepository> EntryServiceImpl<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R: EntryRepository> EntryService for EntryServiceImpl<R> {
    #[instrument(skip(self, tags), level = "debug", fields(category = %category, ai_model = %ai_model))]
    fn add_entry(
        &self,
        prompt: &str,
        link: &str,
        tags: Option<&HashSet<Tag>>,
        category: Category,
        ai_model: AiModel,
    ) -> ApplicationResult<Option<Entry>> {
        if Entry::is_blank(prompt, link) {
            debug!("Blank submission, nothing stored");
            return Ok(None);
        }

        let tags = tags.cloned().unwrap_or_default();
        let mut entry = Entry::new(prompt, link, tags, category, ai_model);

        self.repository.add(&mut entry)?;

        Ok(Some(entry))
    }

    #[instrument(skip(self), level = "debug")]
    fn get_entry(&self, id: i32) -> ApplicationResult<Option<Entry>> {
        let entry = self.repository.get_by_id(id)?;
        Ok(entry)
    }

    #[instrument(skip(self), level = "debug")]
    fn get_all_entries(&self) -> ApplicationResult<Vec<Entry>> {
        let entries = self.repository.get_all()?;
        Ok(entries)
    }

    #[instrument(skip(self, criteria), level = "debug")]
    fn filter_entries(&self, criteria: &FilterCriteria) -> ApplicationResult<Vec<Entry>> {
        let entries = self.repository.get_all()?;
        Ok(criteria.apply(&entries))
    }

    #[instrument(skip(self), level = "debug")]
    fn count_entries_by(&self, field: CountField) -> ApplicationResult<HashMap<String, usize>> {
        let entries = self.repository.get_all()?;
        Ok(count_by(&entries, field))
    }

    #[instrument(skip(self, entries, writer), level = "debug", fields(count = entries.len()))]
    fn export_csv(&self, entries: &[Entry], writer: &mut dyn Write) -> ApplicationResult<()> {
        csv_export::write_entries_as_csv(entries, writer)?;
        Ok(())
    }
}
