//! Status and priority enumerations for todos.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of todo statuses.
///
/// Ordering follows workflow progression, which also fixes the key order
/// of grouped statistics maps.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum TodoStatus {
    /// Todo is pending work
    #[default]
    Todo,

    /// Todo is being worked on
    InProgress,

    /// Todo has been completed
    Completed,
}

impl FromStr for TodoStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TodoStatus::Todo),
            "inprogress" | "in_progress" | "in-progress" => Ok(TodoStatus::InProgress),
            "completed" | "done" => Ok(TodoStatus::Completed),
            _ => Err(format!("Invalid todo status: {s}")),
        }
    }
}

impl TodoStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::InProgress => "in_progress",
            TodoStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// Returns a formatted string that includes both an icon and the status
    /// name. This method ensures consistent visual representation across
    /// all display contexts.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark for finished todos
    /// - `➤ In Progress` - Arrow for active todos
    /// - `○ Todo` - Circle for pending todos
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::TodoStatus;
    ///
    /// assert_eq!(TodoStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(TodoStatus::InProgress.with_icon(), "➤ In Progress");
    /// assert_eq!(TodoStatus::Todo.with_icon(), "○ Todo");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            TodoStatus::Completed => "✓ Completed",
            TodoStatus::InProgress => "➤ In Progress",
            TodoStatus::Todo => "○ Todo",
        }
    }
}

/// Type-safe enumeration of todo priorities.
///
/// Ordering is semantic rank, lowest urgency first, so comparisons and
/// sorted collections follow urgency rather than label text.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Can wait
    Low,

    /// Normal urgency
    #[default]
    Medium,

    /// Should be handled soon
    High,

    /// Needs immediate attention
    Urgent,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    /// Get priority with consistent marker formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::Priority;
    ///
    /// assert_eq!(Priority::Urgent.with_marker(), "‼ Urgent");
    /// assert_eq!(Priority::Low.with_marker(), "· Low");
    /// ```
    pub fn with_marker(&self) -> &'static str {
        match self {
            Priority::Low => "· Low",
            Priority::Medium => "• Medium",
            Priority::High => "! High",
            Priority::Urgent => "‼ Urgent",
        }
    }
}
