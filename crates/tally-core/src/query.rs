//! Typed query predicates for filtering todos.
//!
//! A [`Predicate`] is a conjunction of [`Condition`]s, one per filter
//! dimension. Building one from a [`TodoFilter`] is sparse: only the filter
//! fields that are actually supplied produce a condition, so an empty filter
//! yields an empty predicate that matches every record. Each storage backend
//! interprets the same predicate its own way, either by evaluating
//! [`Predicate::matches`] in memory or by rendering SQL from the condition
//! list.

use jiff::Timestamp;

use crate::models::{Priority, Todo, TodoFilter, TodoStatus};

/// A single filter dimension applied to a todo.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// Exact match on workflow status
    Status(TodoStatus),

    /// Exact match on the completion flag
    Completed(bool),

    /// Exact match on priority
    Priority(Priority),

    /// At least one of these tags is present on the record
    TagsAny(Vec<String>),

    /// Case-insensitive substring match against title or description
    Search(String),

    /// Due date lies at or before this bound
    DueBefore(Timestamp),

    /// Due date lies at or after this bound
    DueAfter(Timestamp),
}

impl Condition {
    /// Evaluate this condition against a single todo.
    fn matches(&self, todo: &Todo) -> bool {
        match self {
            Condition::Status(status) => todo.status == *status,
            Condition::Completed(completed) => todo.completed == *completed,
            Condition::Priority(priority) => todo.priority == *priority,
            Condition::TagsAny(tags) => tags
                .iter()
                .any(|wanted| todo.tags.iter().any(|have| have == wanted)),
            Condition::Search(needle) => {
                let needle = needle.to_lowercase();
                todo.title.to_lowercase().contains(&needle)
                    || todo
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&needle))
            }
            // Records without a due date never match a due bound
            Condition::DueBefore(bound) => todo.due_date.is_some_and(|due| due <= *bound),
            Condition::DueAfter(bound) => todo.due_date.is_some_and(|due| due >= *bound),
        }
    }
}

/// A conjunction of conditions describing which todos match a query.
///
/// Independent of any storage engine. An empty predicate matches all
/// records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Predicate {
    conditions: Vec<Condition>,
}

impl Predicate {
    /// The conditions in this predicate, in the order they were supplied.
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    /// Whether this predicate matches every record.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Evaluate the whole conjunction against a single todo.
    pub fn matches(&self, todo: &Todo) -> bool {
        self.conditions.iter().all(|c| c.matches(todo))
    }
}

impl From<&TodoFilter> for Predicate {
    /// Build a predicate from a filter, keeping composition sparse.
    ///
    /// Only supplied fields contribute a condition; an empty `tags` list is
    /// treated the same as an absent filter. An empty `search` string is a
    /// legitimate filter that matches everything (empty substring).
    fn from(filter: &TodoFilter) -> Self {
        let mut conditions = Vec::new();

        if let Some(status) = filter.status {
            conditions.push(Condition::Status(status));
        }

        if let Some(completed) = filter.completed {
            conditions.push(Condition::Completed(completed));
        }

        if let Some(priority) = filter.priority {
            conditions.push(Condition::Priority(priority));
        }

        if !filter.tags.is_empty() {
            conditions.push(Condition::TagsAny(filter.tags.clone()));
        }

        if let Some(ref search) = filter.search {
            conditions.push(Condition::Search(search.clone()));
        }

        if let Some(due_before) = filter.due_before {
            conditions.push(Condition::DueBefore(due_before));
        }

        if let Some(due_after) = filter.due_after {
            conditions.push(Condition::DueAfter(due_after));
        }

        Self { conditions }
    }
}
