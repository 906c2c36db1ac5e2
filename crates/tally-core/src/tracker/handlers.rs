//! Handler operations that return formatted wrapper types for the Tracker.

use super::Tracker;
use crate::{
    display::{ClearedTodos, CreateResult, DeleteResult, TodoPage, UpdateResult},
    error::Result,
    models::{
        requests::{NewTodo, TodoPatch},
        Todo,
    },
    params::{CreateTodo, Id, ListTodos, UpdateTodo},
    store::Store,
};

impl<S: Store> Tracker<S> {
    /// Handle creating a new todo.
    ///
    /// Validates the parameters, creates the todo, and returns a wrapper
    /// that formats the created record for confirmation.
    ///
    /// # Arguments
    ///
    /// * `params` - Creation parameters containing title and optional fields
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tally_core::{params::CreateTodo, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = CreateTodo {
    ///     title: "Water the plants".to_string(),
    ///     ..Default::default()
    /// };
    /// let created = tracker.create_todo_result(&params).await?;
    /// # Result::<(), tally_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn create_todo_result(&self, params: &CreateTodo) -> Result<CreateResult<Todo>> {
        let new = NewTodo::try_from(params.clone())?;
        let todo = self.create_todo(new).await?;
        Ok(CreateResult::new(todo))
    }

    /// Handle listing todos as a formatted page.
    ///
    /// Validates the filter and paging parameters, then returns a page
    /// wrapper that formats the matching todos with a paging footer.
    ///
    /// # Arguments
    ///
    /// * `params` - List parameters containing filters, paging, and sort
    ///   options
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tally_core::{params::ListTodos, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = ListTodos {
    ///     status: Some("in_progress".to_string()),
    ///     ..Default::default()
    /// };
    /// let page = tracker.list_todos_page(&params).await?;
    /// # Result::<(), tally_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn list_todos_page(&self, params: &ListTodos) -> Result<TodoPage> {
        let (filter, page) = params.validate()?;
        let page = self.list_todos(&filter, &page).await?;
        Ok(TodoPage(page))
    }

    /// Handle showing a single todo.
    ///
    /// Returns the todo for the given ID, or `None` when it does not
    /// exist.
    pub async fn show_todo(&self, params: &Id) -> Result<Option<Todo>> {
        self.get_todo(params.id).await
    }

    /// Handle updating a todo.
    ///
    /// Validates the parameters, applies the patch, and returns a wrapper
    /// listing the changes that were requested. `None` when the id does
    /// not exist.
    ///
    /// # Arguments
    ///
    /// * `params` - Update parameters containing the id and changed fields
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use tally_core::{params::UpdateTodo, TrackerBuilder};
    /// # async {
    /// let tracker = TrackerBuilder::new().build().await?;
    /// let params = UpdateTodo {
    ///     id: 1,
    ///     priority: Some("high".to_string()),
    ///     ..Default::default()
    /// };
    /// let updated = tracker.update_todo_result(&params).await?;
    /// # Result::<(), tally_core::TrackerError>::Ok(())
    /// # };
    /// ```
    pub async fn update_todo_result(
        &self,
        params: &UpdateTodo,
    ) -> Result<Option<UpdateResult<Todo>>> {
        let patch = TodoPatch::try_from(params.clone())?;
        let changes = describe_changes(&patch);

        let updated = self.update_todo(params.id, patch).await?;
        Ok(updated.map(|todo| UpdateResult::with_changes(todo, changes)))
    }

    /// Handle toggling a todo's completion flag.
    ///
    /// Returns a wrapper describing the direction the flag moved, or
    /// `None` when the id does not exist.
    pub async fn toggle_todo_result(&self, params: &Id) -> Result<Option<UpdateResult<Todo>>> {
        let toggled = self.toggle_todo(params.id).await?;

        Ok(toggled.map(|todo| {
            let change = if todo.completed {
                "Marked as completed"
            } else {
                "Marked as not completed"
            };
            UpdateResult::with_changes(todo, vec![change.to_string()])
        }))
    }

    /// Handle permanently deleting a todo.
    ///
    /// Uses get-before-delete so the deleted record can be shown for
    /// confirmation. Returns `None` when the id does not exist.
    pub async fn delete_todo_result(&self, params: &Id) -> Result<Option<DeleteResult<Todo>>> {
        let deleted = self.delete_todo(params.id).await?;
        Ok(deleted.map(DeleteResult::new))
    }

    /// Handle clearing all completed todos.
    ///
    /// Returns a wrapper that formats how many todos were removed.
    pub async fn delete_completed_result(&self) -> Result<ClearedTodos> {
        let removed = self.delete_completed().await?;
        Ok(ClearedTodos(removed))
    }
}

/// Summarize the fields a patch touches, for update confirmations.
///
/// Describes the requested changes, not the normalized ones, so a patch
/// that only sets the completion flag reads as one change.
fn describe_changes(patch: &TodoPatch) -> Vec<String> {
    let mut changes = Vec::new();

    if patch.title.is_some() {
        changes.push("Updated title".to_string());
    }
    if patch.description.is_some() {
        changes.push("Updated description".to_string());
    }
    if let Some(status) = patch.status {
        changes.push(format!("Changed status to {}", status.as_str()));
    }
    if let Some(priority) = patch.priority {
        changes.push(format!("Changed priority to {}", priority.as_str()));
    }
    if patch.clear_due_date {
        changes.push("Cleared due date".to_string());
    } else if patch.due_date.is_some() {
        changes.push("Updated due date".to_string());
    }
    if patch.tags.is_some() {
        changes.push("Replaced tags".to_string());
    }
    if let Some(completed) = patch.completed {
        let change = if completed {
            "Marked as completed"
        } else {
            "Marked as not completed"
        };
        changes.push(change.to_string());
    }

    changes
}
