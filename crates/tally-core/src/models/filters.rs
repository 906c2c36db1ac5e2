//! Filter types for querying todos.

use jiff::Timestamp;

use super::{Priority, TodoStatus};

/// Filter options for querying todos.
///
/// Every field is optional and independent; supplied fields combine with
/// logical AND. An empty filter matches every record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoFilter {
    /// Filter by workflow status (exact match)
    pub status: Option<TodoStatus>,

    /// Filter by completion flag (exact match)
    pub completed: Option<bool>,

    /// Filter by priority (exact match)
    pub priority: Option<Priority>,

    /// Match todos carrying at least one of these tags
    pub tags: Vec<String>,

    /// Case-insensitive substring match against title or description
    pub search: Option<String>,

    /// Inclusive upper bound on the due date
    pub due_before: Option<Timestamp>,

    /// Inclusive lower bound on the due date
    pub due_after: Option<Timestamp>,
}

impl TodoFilter {
    /// Create a filter matching only completed todos.
    ///
    /// Used by the bulk delete operation, which removes every record whose
    /// `completed` flag is set regardless of status or any other field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::TodoFilter;
    ///
    /// let filter = TodoFilter::completed_only();
    /// assert_eq!(filter.completed, Some(true));
    /// assert_eq!(filter.status, None);
    /// ```
    pub fn completed_only() -> Self {
        Self {
            completed: Some(true),
            ..Default::default()
        }
    }
}
