//! Collection wrapper types for displaying groups of domain objects.
//!
//! This module provides wrapper types that format collections of domain objects
//! with consistent structure and empty collection handling.

use std::{fmt, ops::Index};

use crate::models::Todo;
use crate::page::Page;

/// Newtype wrapper for displaying a page of todos.
///
/// Formats each todo in its compact entry form followed by a paging
/// footer, and handles empty pages gracefully. The underlying
/// [`Page`] stays accessible for callers that need the raw totals.
///
/// # Examples
///
/// ```rust
/// use tally_core::{
///     display::TodoPage,
///     models::{Priority, Todo, TodoStatus},
///     page::{Page, PageRequest},
/// };
/// use jiff::Timestamp;
///
/// let todo = Todo {
///     id: 1,
///     title: "Water the plants".to_string(),
///     description: None,
///     status: TodoStatus::Todo,
///     priority: Priority::Medium,
///     due_date: None,
///     tags: vec![],
///     completed: false,
///     created_at: Timestamp::now(),
///     updated_at: Timestamp::now(),
/// };
///
/// let spec = PageRequest::default().resolve();
/// let page = TodoPage(Page::new(vec![todo], 1, &spec));
/// let output = format!("{}", page);
/// assert!(output.contains("Water the plants"));
/// assert!(output.contains("Page 1 of 1"));
/// ```
pub struct TodoPage(pub Page<Todo>);

impl TodoPage {
    /// Check if the page holds no todos.
    pub fn is_empty(&self) -> bool {
        self.0.items.is_empty()
    }

    /// Get the number of todos on this page.
    pub fn len(&self) -> usize {
        self.0.items.len()
    }

    /// Get a reference to the todo at the given index.
    pub fn get(&self, index: usize) -> Option<&Todo> {
        self.0.items.get(index)
    }

    /// Get an iterator over the todos on this page.
    pub fn iter(&self) -> std::slice::Iter<'_, Todo> {
        self.0.items.iter()
    }
}

impl Index<usize> for TodoPage {
    type Output = Todo;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0.items[index]
    }
}

impl IntoIterator for TodoPage {
    type Item = Todo;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a TodoPage {
    type Item = &'a Todo;
    type IntoIter = std::slice::Iter<'a, Todo>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.items.iter()
    }
}

impl fmt::Display for TodoPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.items.is_empty() {
            writeln!(f, "No todos found.")
        } else {
            for todo in &self.0.items {
                todo.fmt_entry(f)?;
            }
            writeln!(
                f,
                "Page {} of {} ({} todos total)",
                self.0.page, self.0.total_pages, self.0.total
            )
        }
    }
}
