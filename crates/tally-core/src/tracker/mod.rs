//! High-level tracker API for managing todos.
//!
//! This module provides the main [`Tracker`] interface for interacting with
//! the todo store. The tracker coordinates between the application layers
//! and a [`Store`] backend, implementing all business logic for todo
//! operations.
//!
//! # Architecture Overview
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │     Store       │
//! │  (handlers.rs)  │───▶│    (ops.rs)     │───▶│ (sqlite/memory) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//!   User Interface        Business Logic         Data Persistence
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Tracker`] instances with
//!   configuration
//! - `ops`: Core async operations (create, list, update, toggle, delete,
//!   stats)
//! - `handlers`: Parameter-driven operations that return display-ready
//!   wrapper types
//!
//! The store runs synchronously; every operation hops onto a blocking task
//! so async callers never stall the runtime. Lookups that miss return
//! `Ok(None)`: deciding whether a missing todo is an error belongs to the
//! interface layer, not here.
//!
//! # Usage Examples
//!
//! ```rust
//! use tally_core::{TrackerBuilder, models::NewTodo};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create with the default database path
//! let tracker = TrackerBuilder::new().build().await?;
//!
//! // Or specify a custom database path
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("/custom/path/tally.db"))
//!     .build()
//!     .await?;
//!
//! let todo = tracker.create_todo(NewTodo::new("Water the plants")).await?;
//! let fetched = tracker.get_todo(todo.id).await?;
//! # Ok(())
//! # }
//! ```
//!
//! Tests can swap in the in-memory backend:
//!
//! ```rust
//! use tally_core::{store::MemoryStore, Tracker};
//!
//! let tracker = Tracker::with_store(MemoryStore::new());
//! ```

use std::sync::Arc;

use crate::store::{SqliteStore, Store};

pub mod builder;
mod handlers;
mod ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing todos.
pub struct Tracker<S: Store = SqliteStore> {
    store: Arc<S>,
}

impl<S: Store> Tracker<S> {
    /// Creates a tracker on top of an already constructed store.
    pub fn with_store(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl<S: Store> Clone for Tracker<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
