//! Core library for the Tally todo tracking application.
//!
//! This crate provides the core business logic for managing todos,
//! including storage backends, data models, and error handling.
//!
//! # Display Architecture
//!
//! The crate implements a Display-based architecture for formatting output:
//!
//! - **Domain Models** ([`models`]): Implement [`std::fmt::Display`] for direct
//!   formatting
//! - **Display Wrappers** ([`display`]): Provide contextual and specialized
//!   formatting
//! - **Terminal Rendering**: Rich markdown output via the CLI's terminal
//!   renderer
//!
//! This separation allows the same data to be formatted differently depending
//! on context (lists vs. individual items, creation results vs. updates, etc.)
//! while maintaining consistency across all output.
//!
//! # Quick Start
//!
//! ```rust
//! use tally_core::{TrackerBuilder, params::CreateTodo};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a tracker instance
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! // Create a new todo from request parameters
//! let create_params = CreateTodo {
//!     title: "Write the quarterly report".to_string(),
//!     description: Some("Due before the planning meeting".to_string()),
//!     priority: Some("high".to_string()),
//!     ..Default::default()
//! };
//!
//! let result = tracker.create_todo_result(&create_params).await?;
//! println!("{}", result);
//!
//! // List todos a page at a time
//! use tally_core::params::ListTodos;
//! let page = tracker.list_todos_page(&ListTodos::default()).await?;
//! for todo in &page {
//!     println!("Todo: {}", todo.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod display;
pub mod error;
pub mod models;
pub mod page;
pub mod params;
pub mod query;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use display::{ClearedTodos, CreateResult, DeleteResult, TodoPage, UpdateResult};
pub use error::{Result, StoreResultExt, TrackerError};
pub use models::{NewTodo, Priority, Todo, TodoFilter, TodoPatch, TodoStats, TodoStatus};
pub use page::{Page, PageRequest, SortField, SortOrder};
pub use params::{CreateTodo, Id, ListTodos, UpdateTodo};
pub use query::Predicate;
pub use store::{MemoryStore, SqliteStore, Store, StoreError};
pub use tracker::{Tracker, TrackerBuilder};
