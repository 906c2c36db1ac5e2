//! Display implementations for domain models.
//!
//! This module contains all Display trait implementations for the core domain
//! models, separated from the model definitions to maintain clean separation of
//! concerns.
//!
//! The Display implementations provide:
//! - Markdown-formatted output for rich terminal display
//! - Consistent formatting with status icons and priority markers
//! - A full single-todo view plus a compact list entry form

use std::fmt;

use super::datetime::{LocalDate, LocalDateTime};
use crate::models::{Priority, Todo, TodoStats, TodoStatus};

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.title)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Priority: {}", self.priority.with_marker())?;
        if let Some(due) = &self.due_date {
            if self.is_overdue() {
                writeln!(f, "- Due: {} (overdue)", LocalDate(due))?;
            } else {
                writeln!(f, "- Due: {}", LocalDate(due))?;
            }
        }
        if !self.tags.is_empty() {
            writeln!(f, "- Tags: {}", self.tags.join(", "))?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

impl Todo {
    /// Format the todo as a compact list entry.
    ///
    /// Drops the timestamps and description so a page of todos scans
    /// quickly; the full Display form carries the rest.
    pub(super) fn fmt_entry(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## {}. {} ({})",
            self.id,
            self.title,
            self.status.with_icon()
        )?;
        writeln!(f)?;

        writeln!(f, "- **Priority**: {}", self.priority.with_marker())?;
        if let Some(due) = &self.due_date {
            if self.is_overdue() {
                writeln!(f, "- **Due**: {} (overdue)", LocalDate(due))?;
            } else {
                writeln!(f, "- **Due**: {}", LocalDate(due))?;
            }
        }
        if !self.tags.is_empty() {
            writeln!(f, "- **Tags**: {}", self.tags.join(", "))?;
        }
        writeln!(f)?;

        Ok(())
    }
}

impl fmt::Display for TodoStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Todo Statistics")?;
        writeln!(f)?;

        if self.total == 0 {
            writeln!(f, "No todos tracked yet.")?;
            return Ok(());
        }

        writeln!(f, "- Total: {}", self.total)?;
        writeln!(f, "- Completed: {}", self.completed)?;
        writeln!(f, "- Pending: {}", self.pending)?;

        if !self.by_priority.is_empty() {
            writeln!(f)?;
            writeln!(f, "## By Priority")?;
            writeln!(f)?;
            for (priority, count) in &self.by_priority {
                writeln!(f, "- {}: {}", priority.with_marker(), count)?;
            }
        }

        if !self.by_status.is_empty() {
            writeln!(f)?;
            writeln!(f, "## By Status")?;
            writeln!(f)?;
            for (status, count) in &self.by_status {
                writeln!(f, "- {}: {}", status.with_icon(), count)?;
            }
        }

        Ok(())
    }
}
