//! Core todo operations for the Tracker.

use std::sync::Arc;

use tokio::task;

use super::Tracker;
use crate::{
    error::{Result, StoreResultExt, TrackerError},
    models::{
        requests::{NewTodo, TodoPatch},
        Todo, TodoFilter, TodoStats, TodoStatus,
    },
    page::{Page, PageRequest},
    query::Predicate,
    store::{GroupField, Store, StoreError},
};

impl<S: Store> Tracker<S> {
    /// Creates a new todo. The store assigns the id and both timestamps;
    /// status starts as 'todo' and the completion flag cleared.
    pub async fn create_todo(&self, new: NewTodo) -> Result<Todo> {
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || store.insert(new))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to create todo")
    }

    /// Retrieves a todo by its ID, or `None` when it does not exist.
    pub async fn get_todo(&self, id: u64) -> Result<Option<Todo>> {
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || store.find_by_id(id))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to query todo")
    }

    /// Lists the todos matching `filter`, one page at a time.
    ///
    /// The total is counted in a separate store call from the fetch, so a
    /// write landing between the two can skew `total` against the items by
    /// one. Both calls see committed data, and the page itself is always
    /// consistent.
    pub async fn list_todos(&self, filter: &TodoFilter, page: &PageRequest) -> Result<Page<Todo>> {
        let predicate = Predicate::from(filter);
        let spec = page.resolve();

        let store = Arc::clone(&self.store);
        let count_predicate = predicate.clone();
        let total = task::spawn_blocking(move || store.count(&count_predicate))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to count todos")?;

        let store = Arc::clone(&self.store);
        let items = task::spawn_blocking(move || store.find_many(&predicate, &spec))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to query todos")?;

        Ok(Page::new(items, total, &spec))
    }

    /// Applies a partial update to a todo, returning the updated record or
    /// `None` when the id does not exist.
    ///
    /// Marking a todo completed forces its status to 'completed'. An empty
    /// patch changes nothing, not even `updated_at`.
    pub async fn update_todo(&self, id: u64, patch: TodoPatch) -> Result<Option<Todo>> {
        if patch.is_empty() {
            return self.get_todo(id).await;
        }

        let patch = patch.normalized();
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || store.update_by_id(id, patch))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to update todo")
    }

    /// Flips a todo's completion flag, returning the updated record or
    /// `None` when the id does not exist.
    ///
    /// Completing moves the status to 'completed'. Un-completing always
    /// lands on 'todo', even when the todo was in progress before it was
    /// completed.
    pub async fn toggle_todo(&self, id: u64) -> Result<Option<Todo>> {
        let current = match self.get_todo(id).await? {
            Some(todo) => todo,
            None => return Ok(None),
        };

        let now_completed = !current.completed;
        let patch = TodoPatch {
            completed: Some(now_completed),
            status: Some(if now_completed {
                TodoStatus::Completed
            } else {
                TodoStatus::Todo
            }),
            ..Default::default()
        };

        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || store.update_by_id(id, patch))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to toggle todo")
    }

    /// Permanently deletes a todo. Uses get-before-delete so the deleted
    /// record can be returned for confirmation; `None` when the id does
    /// not exist.
    pub async fn delete_todo(&self, id: u64) -> Result<Option<Todo>> {
        let todo = self.get_todo(id).await?;

        if todo.is_some() {
            let store = Arc::clone(&self.store);

            task::spawn_blocking(move || store.delete_by_id(id))
                .await
                .map_err(|e| TrackerError::Configuration {
                    message: format!("Task join error: {e}"),
                })?
                .store_context("Failed to delete todo")?;
        }

        Ok(todo)
    }

    /// Permanently deletes every completed todo, returning how many were
    /// removed.
    pub async fn delete_completed(&self) -> Result<u64> {
        let predicate = Predicate::from(&TodoFilter::completed_only());
        let store = Arc::clone(&self.store);

        task::spawn_blocking(move || store.delete_many(&predicate))
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to delete completed todos")
    }

    /// Computes aggregate counts over all todos: totals plus breakdowns by
    /// priority and by status. Only labels that occur appear in the
    /// breakdowns.
    pub async fn stats(&self) -> Result<TodoStats> {
        let store = Arc::clone(&self.store);

        let (total, completed, pending, priority_rows, status_rows) =
            task::spawn_blocking(move || {
                let total = store.count(&Predicate::default())?;
                let completed = store.count(&Predicate::from(&TodoFilter::completed_only()))?;
                let pending = store.count(&Predicate::from(&TodoFilter {
                    completed: Some(false),
                    ..Default::default()
                }))?;
                let priority_rows = store.group_counts(GroupField::Priority)?;
                let status_rows = store.group_counts(GroupField::Status)?;
                Ok::<_, StoreError>((total, completed, pending, priority_rows, status_rows))
            })
            .await
            .map_err(|e| TrackerError::Configuration {
                message: format!("Task join error: {e}"),
            })?
            .store_context("Failed to compute statistics")?;

        TodoStats::from_counts(total, completed, pending, priority_rows, status_rows)
    }
}
