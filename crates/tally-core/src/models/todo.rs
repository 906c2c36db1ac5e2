//! Todo model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{Priority, TodoStatus};

/// Maximum number of characters allowed in a todo title.
pub const TITLE_MAX_LEN: usize = 200;

/// Maximum number of characters allowed in a todo description.
pub const DESCRIPTION_MAX_LEN: usize = 1000;

/// Represents a complete todo record with server-assigned metadata.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Todo {
    /// Unique identifier for the todo
    pub id: u64,

    /// Title of the todo
    pub title: String,

    /// Detailed description of the todo
    pub description: Option<String>,

    /// Workflow status (todo, in progress, or completed)
    #[serde(default)]
    pub status: TodoStatus,

    /// Urgency of the todo
    #[serde(default)]
    pub priority: Priority,

    /// Optional due date (UTC)
    pub due_date: Option<Timestamp>,

    /// Ordered list of tags attached to the todo
    #[serde(default)]
    pub tags: Vec<String>,

    /// Completion flag, coupled one-directionally to `status`
    #[serde(default)]
    pub completed: bool,

    /// Timestamp when the todo was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the todo was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Todo {
    /// Whether the todo is past its due date.
    ///
    /// True only when a due date is set, the todo is not completed, and the
    /// due date lies before `now`. Never stored; derived at read time.
    pub fn is_overdue_at(&self, now: Timestamp) -> bool {
        match self.due_date {
            Some(due) => !self.completed && due < now,
            None => false,
        }
    }

    /// Whether the todo is past its due date as of the current time.
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_at(Timestamp::now())
    }
}
