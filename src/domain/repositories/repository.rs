// src/domain/repositories/repository.rs

use crate::domain::entry::Entry;
use crate::domain::error::DomainError;

/// Repository trait for entry persistence.
///
/// The store is append-only: entries are immutable after creation, so
/// there is no update or delete. Reads return entries in id order,
/// which is insertion order (AUTOINCREMENT ids are never reused).
pub trait EntryRepository: std::fmt::Debug + Send + Sync {
    /// Get an entry by its ID
    fn get_by_id(&self, id: i32) -> Result<Option<Entry>, DomainError>;

    /// Get all entries in insertion order
    fn get_all(&self) -> Result<Vec<Entry>, DomainError>;

    /// Persist a new entry, stamping its assigned id
    fn add(&self, entry: &mut Entry) -> Result<(), DomainError>;
}
