// src/infrastructure/repositories/sqlite/repository.rs

use diesel::prelude::*;
use diesel::sql_query;
use diesel::sql_types::Integer;
use tracing::{debug, error, instrument};

use super::connection::{ConnectionPool, PooledConnection};
use super::error::{SqliteRepositoryError, SqliteResult};
use crate::domain::entry::Entry;
use crate::domain::error::DomainError;
use crate::domain::repositories::repository::EntryRepository;
use crate::infrastructure::repositories::sqlite::model::{DbEntry, NewEntry};
use crate::infrastructure::repositories::sqlite::schema::prompts::dsl;

#[derive(Clone, Debug)]
pub struct SqliteEntryRepository {
    pool: ConnectionPool,
}

impl SqliteEntryRepository {
    /// Create a new SQLite repository with the provided connection pool
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Create a new SQLite repository with the provided database URL,
    /// running migrations so the `prompts` table exists.
    #[instrument(skip_all, level = "debug")]
    pub fn from_url(database_url: &str) -> SqliteResult<Self> {
        let pool = super::connection::init_pool(database_url)?;
        Ok(Self { pool })
    }

    /// Get a connection from the pool
    #[instrument(skip_all, level = "debug")]
    pub fn get_connection(&self) -> SqliteResult<PooledConnection> {
        self.pool
            .get()
            .map_err(|e| SqliteRepositoryError::ConnectionPoolError(e.to_string()))
    }

    /// Deletes all rows; test support only
    #[instrument(skip_all, level = "debug")]
    pub fn empty_prompts_table(&self) -> SqliteResult<()> {
        let mut conn = self.get_connection()?;

        sql_query("DELETE FROM prompts;")
            .execute(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        debug!("Cleaned table.");
        Ok(())
    }

    /// Convert a database row to a domain entity
    fn to_domain_model(&self, db_entry: DbEntry) -> SqliteResult<Entry> {
        Entry::from_storage(
            db_entry.id,
            db_entry.prompt,
            db_entry.link,
            db_entry.tags,
            &db_entry.category,
            &db_entry.ai_model,
            &db_entry.date_added,
        )
        .map_err(|e| {
            SqliteRepositoryError::ConversionError(format!(
                "Failed to create domain entry from DB row for ID {}: {}",
                db_entry.id, e
            ))
        })
    }
}

impl EntryRepository for SqliteEntryRepository {
    #[instrument(skip_all, level = "debug")]
    fn get_by_id(&self, id: i32) -> Result<Option<Entry>, DomainError> {
        let mut conn = self.get_connection()?;

        let result = dsl::prompts
            .filter(dsl::id.eq(id))
            .first::<DbEntry>(&mut conn)
            .optional()
            .map_err(SqliteRepositoryError::DatabaseError)?;

        match result {
            Some(db_entry) => {
                let entry = self.to_domain_model(db_entry)?;
                Ok(Some(entry))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip_all, level = "debug")]
    fn get_all(&self) -> Result<Vec<Entry>, DomainError> {
        let mut conn = self.get_connection()?;

        let db_entries = dsl::prompts
            .order(dsl::id.asc())
            .load::<DbEntry>(&mut conn)
            .map_err(SqliteRepositoryError::DatabaseError)?;

        // Rows with labels this build does not know (e.g. from an
        // externally edited database) are logged and skipped.
        let mut entries = Vec::new();
        for db_entry in db_entries {
            match self.to_domain_model(db_entry) {
                Ok(entry) => entries.push(entry),
                Err(e) => error!("Failed to convert entry: {}", e),
            }
        }

        Ok(entries)
    }

    #[instrument(skip_all, level = "debug")]
    fn add(&self, entry: &mut Entry) -> Result<(), DomainError> {
        let mut conn = self.get_connection()?;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            let db_entry = NewEntry {
                prompt: entry.prompt.to_string(),
                link: entry.link.to_string(),
                tags: entry.formatted_tags(),
                category: entry.category.to_string(),
                ai_model: entry.ai_model.to_string(),
                date_added: entry.formatted_date(),
            };
            debug!("Inserting entry: {}", db_entry);

            let result = diesel::insert_into(dsl::prompts)
                .values(&db_entry)
                .execute(conn)?;

            if result == 0 {
                return Err(diesel::result::Error::NotFound);
            }

            let id = diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()"))
                .get_result::<i32>(conn)?;

            entry.set_id(id);

            Ok(())
        })
        .map_err(SqliteRepositoryError::DatabaseError)?;

        Ok(())
    }
}
