//! In-memory todo storage.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use super::{now_micros, GroupField, Store, StoreError, StoreResult};
use crate::models::requests::{NewTodo, TodoPatch};
use crate::models::{Todo, TodoStatus};
use crate::page::{PageSpec, SortField, SortOrder};
use crate::query::Predicate;

/// In-memory [`Store`] backed by a mutex-guarded map.
///
/// Matches [`SqliteStore`](super::SqliteStore) observable behavior: ids
/// count up from 1, timestamps carry microsecond precision, and sorting
/// follows the same tie and null rules. Nothing is persisted; intended
/// for tests and short-lived embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<MemoryState>,
}

#[derive(Debug, Default)]
struct MemoryState {
    todos: BTreeMap<u64, Todo>,
    next_id: u64,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, MemoryState>> {
        self.state
            .lock()
            .map_err(|_| StoreError::new("Store mutex poisoned"))
    }
}

impl Store for MemoryStore {
    fn insert(&self, new: NewTodo) -> StoreResult<Todo> {
        let mut state = self.lock()?;

        state.next_id += 1;
        let now = now_micros();
        let todo = Todo {
            id: state.next_id,
            title: new.title,
            description: new.description,
            status: TodoStatus::Todo,
            priority: new.priority,
            due_date: new.due_date,
            tags: new.tags,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        state.todos.insert(todo.id, todo.clone());

        Ok(todo)
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Todo>> {
        Ok(self.lock()?.todos.get(&id).cloned())
    }

    fn find_many(&self, predicate: &Predicate, page: &PageSpec) -> StoreResult<Vec<Todo>> {
        let state = self.lock()?;

        let mut todos: Vec<Todo> = state
            .todos
            .values()
            .filter(|todo| predicate.matches(todo))
            .cloned()
            .collect();
        todos.sort_by(|a, b| compare_todos(a, b, page));

        Ok(todos
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .collect())
    }

    fn count(&self, predicate: &Predicate) -> StoreResult<u64> {
        let state = self.lock()?;

        let count = state
            .todos
            .values()
            .filter(|todo| predicate.matches(todo))
            .count();

        Ok(count as u64)
    }

    fn update_by_id(&self, id: u64, patch: TodoPatch) -> StoreResult<Option<Todo>> {
        let mut state = self.lock()?;

        let todo = match state.todos.get_mut(&id) {
            Some(todo) => todo,
            None => return Ok(None),
        };

        if let Some(title) = patch.title {
            todo.title = title;
        }
        if let Some(description) = patch.description {
            todo.description = Some(description);
        }
        if let Some(status) = patch.status {
            todo.status = status;
        }
        if let Some(priority) = patch.priority {
            todo.priority = priority;
        }
        if patch.clear_due_date {
            todo.due_date = None;
        } else if let Some(due) = patch.due_date {
            todo.due_date = Some(due);
        }
        if let Some(tags) = patch.tags {
            todo.tags = tags;
        }
        if let Some(completed) = patch.completed {
            todo.completed = completed;
        }
        todo.updated_at = now_micros();

        Ok(Some(todo.clone()))
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        Ok(self.lock()?.todos.remove(&id).is_some())
    }

    fn delete_many(&self, predicate: &Predicate) -> StoreResult<u64> {
        let mut state = self.lock()?;

        let before = state.todos.len();
        state.todos.retain(|_, todo| !predicate.matches(todo));

        Ok((before - state.todos.len()) as u64)
    }

    fn group_counts(&self, field: GroupField) -> StoreResult<Vec<(String, u64)>> {
        let state = self.lock()?;

        let mut counts: BTreeMap<String, u64> = BTreeMap::new();
        for todo in state.todos.values() {
            let label = match field {
                GroupField::Priority => todo.priority.as_str(),
                GroupField::Status => todo.status.as_str(),
            };
            *counts.entry(label.to_string()).or_insert(0) += 1;
        }

        Ok(counts.into_iter().collect())
    }
}

/// Ordering that mirrors the SQLite backend: id breaks ties in the
/// primary direction, and todos without a due date sort last regardless
/// of direction.
fn compare_todos(a: &Todo, b: &Todo, page: &PageSpec) -> Ordering {
    let directed = |ordering: Ordering| match page.sort_order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    };

    match page.sort_by {
        SortField::CreatedAt => directed(a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))),
        SortField::UpdatedAt => directed(a.updated_at.cmp(&b.updated_at).then(a.id.cmp(&b.id))),
        SortField::Priority => directed(a.priority.cmp(&b.priority).then(a.id.cmp(&b.id))),
        SortField::Title => directed(
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then(a.id.cmp(&b.id)),
        ),
        SortField::DueDate => match (a.due_date, b.due_date) {
            (None, None) => directed(a.id.cmp(&b.id)),
            (None, Some(_)) => Ordering::Greater,
            (Some(_), None) => Ordering::Less,
            (Some(x), Some(y)) => directed(x.cmp(&y).then(a.id.cmp(&b.id))),
        },
    }
}
