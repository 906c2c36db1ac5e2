//! Display formatting functions and result types.
//!
//! This module provides helper functions for formatting collections and wrapper
//! types for operation results, enabling consistent formatting across different
//! output contexts (lists, operations, etc.).
//!
//! # Architecture: Display Functions and Wrappers
//!
//! The Display architecture combines direct Display implementations on domain
//! models with formatting functions for collections and wrapper types for
//! operation results. This approach provides both idiomatic Rust patterns and
//! context-specific formatting.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Format Functions│    │   Formatted     │
//! │ (Todo, TodoStats)───▶│ & Result Types  │───▶│    Output       │
//! │                 │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Benefits
//!
//! 1. **Idiomatic Rust**: Newtype wrappers provide Display implementations for
//!    collections
//! 2. **Separation of Concerns**: Business logic in models, presentation in
//!    wrappers
//! 3. **Type Safety**: Newtype wrappers ensure proper formatting without runtime
//!    errors
//! 4. **Consistency**: All output goes through standardized display logic
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (TodoPage)
//! - [`results`]: Operation result types (CreateResult, UpdateResult,
//!   DeleteResult, ClearedTodos)
//! - [`datetime`]: Date/time formatting utilities
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ### Operation Results
//!
//! ```rust
//! use tally_core::{
//!     display::{CreateResult, UpdateResult},
//!     models::{Priority, Todo, TodoStatus},
//! };
//! use jiff::Timestamp;
//!
//! // Create a sample todo for testing
//! let todo = Todo {
//!     id: 1,
//!     title: "Ship the beta".to_string(),
//!     description: Some("Cut a release candidate first".to_string()),
//!     status: TodoStatus::InProgress,
//!     priority: Priority::High,
//!     due_date: None,
//!     tags: vec!["release".to_string()],
//!     completed: false,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//!
//! // Format creation results
//! let result = CreateResult::new(todo.clone());
//! let output = format!("{}", result);
//! assert!(output.contains("Created todo with ID: 1"));
//!
//! // Format updates with change tracking
//! let changes = vec!["Updated title".to_string(), "Replaced tags".to_string()];
//! let update_result = UpdateResult::with_changes(todo, changes);
//! let update_output = format!("{}", update_result);
//! assert!(update_output.contains("Changes made:"));
//! ```
//!
//! ### Paged Listings
//!
//! ```rust
//! use tally_core::{display::TodoPage, page::{Page, PageRequest}};
//!
//! let spec = PageRequest::default().resolve();
//! let empty = TodoPage(Page::new(vec![], 0, &spec));
//! assert_eq!(format!("{}", empty), "No todos found.\n");
//! ```
//!
//! ## Design Principles
//!
//! 1. **Immutable Wrappers**: Wrappers hold references, not owned data
//! 2. **Builder Pattern**: Optional configurations via chained methods
//! 3. **Markdown Output**: All formatters produce markdown for rich terminal
//!    display
//! 4. **Consistent Structure**: Headers, metadata, content follow standard
//!    patterns

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

// Re-export commonly used types for convenience
pub use collections::TodoPage;
pub use datetime::{LocalDate, LocalDateTime};
pub use results::{ClearedTodos, CreateResult, DeleteResult, UpdateResult};
