use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::entry_service::EntryService;
use crate::application::EntryServiceImpl;
use crate::config::Settings;
use crate::infrastructure::repositories::sqlite::repository::SqliteEntryRepository;
use std::sync::Arc;

/// Production service container - single source of truth for service creation
pub struct ServiceContainer {
    pub entry_repository: Arc<SqliteEntryRepository>,
    pub entry_service: Arc<dyn EntryService>,
}

impl ServiceContainer {
    /// Create all services with explicit dependency injection
    pub fn new(config: &Settings) -> ApplicationResult<Self> {
        let entry_repository = Self::create_repository(&config.db_url)?;

        let entry_service = Arc::new(EntryServiceImpl::new(entry_repository.clone()));

        Ok(Self {
            entry_repository,
            entry_service,
        })
    }

    fn create_repository(db_url: &str) -> ApplicationResult<Arc<SqliteEntryRepository>> {
        // Creates the database file and schema on first start
        let repository = SqliteEntryRepository::from_url(db_url).map_err(|e| {
            ApplicationError::Other(format!("Failed to open entry database: {}", e))
        })?;

        Ok(Arc::new(repository))
    }
}

impl std::fmt::Debug for ServiceContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContainer")
            .field("entry_repository", &"Arc<SqliteEntryRepository>")
            .field("entry_service", &"Arc<dyn EntryService>")
            .finish()
    }
}
