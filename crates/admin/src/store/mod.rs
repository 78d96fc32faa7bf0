//! In-memory record stores.
//!
//! Each admin collection lives in a [`RecordStore`]: an ordered, in-memory
//! sequence seeded at startup and mutated only through the panel. There is
//! no persistence layer; a restart reseeds the collections.

pub mod rbac;
pub mod seed;

use std::sync::{PoisonError, RwLock};

use thiserror::Error;

pub use rbac::PermissionGrants;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Requested record was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., duplicate id).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// A record with a unique, stable id within its collection.
pub trait Identified {
    type Id: Copy + PartialEq + std::fmt::Display;

    fn id(&self) -> Self::Id;
}

/// An ordered in-memory collection of records.
///
/// Reads return clones; the seed collections hold a few dozen small
/// records, so every view derives from a snapshot rather than holding the
/// lock across filtering and rendering.
#[derive(Debug)]
pub struct RecordStore<R> {
    records: RwLock<Vec<R>>,
}

impl<R> RecordStore<R>
where
    R: Identified + Clone,
{
    /// Create a store over seed records.
    #[must_use]
    pub const fn with_records(records: Vec<R>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Snapshot the collection in its current order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<R> {
        self.read().clone()
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Get a record by id.
    #[must_use]
    pub fn get(&self, id: R::Id) -> Option<R> {
        self.read().iter().find(|r| r.id() == id).cloned()
    }

    /// Append a record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Conflict` if a record with the same id exists.
    pub fn insert(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.write();
        if records.iter().any(|r| r.id() == record.id()) {
            return Err(StoreError::Conflict(format!(
                "duplicate id {}",
                record.id()
            )));
        }
        records.push(record);
        Ok(())
    }

    /// Replace the record with the same id.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has the id.
    pub fn replace(&self, record: R) -> Result<(), StoreError> {
        let mut records = self.write();
        let slot = records
            .iter_mut()
            .find(|r| r.id() == record.id())
            .ok_or(StoreError::NotFound)?;
        *slot = record;
        Ok(())
    }

    /// Remove a record by id, returning it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no record has the id.
    pub fn remove(&self, id: R::Id) -> Result<R, StoreError> {
        let mut records = self.write();
        let index = records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(StoreError::NotFound)?;
        Ok(records.remove(index))
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<R>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<R>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> RecordStore<R>
where
    R: Identified<Id: Into<i32> + From<i32>> + Clone,
{
    /// The next free id: one past the largest id in the collection.
    #[must_use]
    pub fn next_id(&self) -> R::Id {
        let max = self
            .read()
            .iter()
            .map(|r| r.id().into())
            .max()
            .unwrap_or(0);
        R::Id::from(max + 1)
    }
}
