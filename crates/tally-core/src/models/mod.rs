//! Data models for todos.
//!
//! This module contains the core domain models that represent todos in the
//! tally tracking system. Display implementations for these models are
//! located in [`crate::display::models`] to maintain clean separation of
//! concerns between data structures and presentation logic.
//!
//! # Display Architecture
//!
//! The models follow a dual-display approach:
//!
//! 1. **Model Display**: Display implementations in [`crate::display::models`]
//!    for standalone formatting
//! 2. **Wrapper Display**: Specialized wrappers in [`crate::display`] for
//!    contextual formatting
//!
//! All Display implementations format as readable markdown with metadata,
//! timestamps, status icons (✓ Completed, ➤ In Progress, ○ Todo), and
//! priority markers.
//!
//! # Examples
//!
//! ```rust
//! use jiff::Timestamp;
//! use tally_core::models::{Priority, Todo, TodoStatus};
//!
//! let todo = Todo {
//!     id: 1,
//!     title: "Write release notes".to_string(),
//!     description: Some("Cover the storage changes".to_string()),
//!     status: TodoStatus::InProgress,
//!     priority: Priority::High,
//!     due_date: None,
//!     tags: vec!["docs".to_string()],
//!     completed: false,
//!     created_at: Timestamp::now(),
//!     updated_at: Timestamp::now(),
//! };
//! println!("{}", todo); // Formats with markdown headers and metadata
//! ```

pub mod filters;
pub mod requests;
pub mod stats;
pub mod status;
pub mod todo;


// Re-export all public types at the models level
pub use filters::TodoFilter;
pub use requests::{NewTodo, TodoPatch};
pub use stats::TodoStats;
pub use status::{Priority, TodoStatus};
pub use todo::{Todo, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
