//! Storage backends for todos.
//!
//! The [`Store`] trait is the minimal persistence interface the tracker
//! operates against: insert, lookup, filtered fetch and count, partial
//! update, deletion, and grouped counting. Two implementations ship with
//! the crate:
//!
//! - [`SqliteStore`]: the production backend, one SQLite connection per
//!   operation
//! - [`MemoryStore`]: an in-process map for tests and embedding
//!
//! Backends assign ids and maintain the `created_at`/`updated_at`
//! timestamps; callers never supply them. Lookups that miss report
//! `Ok(None)` or `Ok(false)`, never an error. Errors carry a message and
//! the backend's own error as an optional source.

use jiff::Timestamp;
use thiserror::Error;

use crate::models::requests::{NewTodo, TodoPatch};
use crate::models::Todo;
use crate::page::PageSpec;
use crate::query::Predicate;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Error raised by a storage backend.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct StoreError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl StoreError {
    /// Create a store error from a message alone.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Create a store error wrapping the backend's own error.
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The diagnostic message, without the source chain.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Field todos can be grouped by when computing counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    /// Group by priority label
    Priority,

    /// Group by status label
    Status,
}

impl GroupField {
    /// Convert to the column/field name used by backends.
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupField::Priority => "priority",
            GroupField::Status => "status",
        }
    }
}

/// Minimal persistence interface for todo records.
///
/// Implementations are synchronous; the tracker runs them on a blocking
/// task. A single call is atomic per record, but nothing coordinates
/// across calls, so a count followed by a fetch can observe different
/// snapshots.
pub trait Store: Send + Sync + 'static {
    /// Persist a new record, assigning its id and timestamps.
    fn insert(&self, new: NewTodo) -> StoreResult<Todo>;

    /// Fetch one record by id.
    fn find_by_id(&self, id: u64) -> StoreResult<Option<Todo>>;

    /// Fetch the records matching `predicate` with sort, skip, and limit
    /// applied.
    fn find_many(&self, predicate: &Predicate, page: &PageSpec) -> StoreResult<Vec<Todo>>;

    /// Count the records matching `predicate`.
    fn count(&self, predicate: &Predicate) -> StoreResult<u64>;

    /// Apply a partial update to one record, refreshing `updated_at`.
    /// Returns the updated record, or `None` when the id does not exist.
    fn update_by_id(&self, id: u64, patch: TodoPatch) -> StoreResult<Option<Todo>>;

    /// Delete one record by id. Returns whether a record was deleted.
    fn delete_by_id(&self, id: u64) -> StoreResult<bool>;

    /// Delete every record matching `predicate`, returning the count.
    fn delete_many(&self, predicate: &Predicate) -> StoreResult<u64>;

    /// Count records grouped by the given field. Only labels that occur
    /// appear in the result.
    fn group_counts(&self, field: GroupField) -> StoreResult<Vec<(String, u64)>>;
}

/// Current time at the precision timestamps are stored with, so every
/// backend returns exactly what a later read would.
fn now_micros() -> Timestamp {
    let now = Timestamp::now();
    Timestamp::from_microsecond(now.as_microsecond()).unwrap_or(now)
}
