//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create, update,
//! and delete operations with consistent messaging and resource display.

use std::fmt;

use crate::models::Todo;

/// Wrapper type for displaying the result of create operations.
///
/// This provides consistent formatting for creation results,
/// including success messages and the created resource information.
///
/// The wrapper formats creation results with:
/// - Success message with resource type and ID
/// - Full details of the created resource
/// - Consistent markdown structure
///
/// # Examples
///
/// ```rust
/// use tally_core::{
///     display::CreateResult,
///     models::{Priority, Todo, TodoStatus},
/// };
/// use jiff::Timestamp;
///
/// let todo = Todo {
///     id: 1,
///     title: "Write release notes".to_string(),
///     description: Some("Cover the breaking changes".to_string()),
///     status: TodoStatus::Todo,
///     priority: Priority::High,
///     due_date: None,
///     tags: vec![],
///     completed: false,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let result = CreateResult::new(todo);
/// println!("{}", result);
/// ```
#[derive(Debug)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created todo with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// This provides consistent formatting for update results,
/// including success messages and the updated resource information.
///
/// The wrapper can track and display specific changes made during the update,
/// providing users with clear feedback about what was modified.
///
/// # Examples
///
/// ```rust
/// use tally_core::{
///     display::UpdateResult,
///     models::{Priority, Todo, TodoStatus},
/// };
/// use jiff::Timestamp;
///
/// let updated = Todo {
///     id: 1,
///     title: "Write release notes".to_string(),
///     description: None,
///     status: TodoStatus::Completed,
///     priority: Priority::High,
///     due_date: None,
///     tags: vec![],
///     completed: true,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let changes = vec![
///     "Changed status to completed".to_string(),
///     "Marked as completed".to_string(),
/// ];
///
/// let result = UpdateResult::with_changes(updated, changes);
/// println!("{}", result);
/// ```
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl fmt::Display for UpdateResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated todo with ID: {}", self.resource.id)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
///
/// This provides consistent formatting for deletion results,
/// including confirmation messages and resource identification.
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Todo> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted todo '{}' (ID: {})",
            self.resource.title, self.resource.id
        )
    }
}

/// Wrapper type for displaying the outcome of a bulk clear of completed todos.
///
/// Holds the number of todos that were removed and pluralizes the
/// confirmation message accordingly.
///
/// # Examples
///
/// ```rust
/// use tally_core::display::ClearedTodos;
///
/// assert_eq!(format!("{}", ClearedTodos(0)), "No completed todos to delete.\n");
/// assert_eq!(format!("{}", ClearedTodos(1)), "Deleted 1 completed todo\n");
/// assert_eq!(format!("{}", ClearedTodos(3)), "Deleted 3 completed todos\n");
/// ```
pub struct ClearedTodos(pub u64);

impl fmt::Display for ClearedTodos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => writeln!(f, "No completed todos to delete."),
            1 => writeln!(f, "Deleted 1 completed todo"),
            n => writeln!(f, "Deleted {n} completed todos"),
        }
    }
}
