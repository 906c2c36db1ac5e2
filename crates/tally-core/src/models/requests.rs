//! Request types passed to storage backends.

use jiff::Timestamp;

use super::{Priority, TodoStatus};

/// Data for creating a todo.
///
/// Status and the completion flag are never part of a creation request:
/// new todos always start as `todo` and not completed. The store assigns
/// the id and both timestamps.
#[derive(Debug, Clone, Default)]
pub struct NewTodo {
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub tags: Vec<String>,
}

impl NewTodo {
    /// Create a request with the given title and every other field at its
    /// default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::{NewTodo, Priority};
    ///
    /// let new = NewTodo::new("Water the plants");
    /// assert_eq!(new.title, "Water the plants");
    /// assert_eq!(new.priority, Priority::Medium);
    /// assert!(new.tags.is_empty());
    /// ```
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

/// Partial update for a todo. Fields left as `None` are not touched.
///
/// Clearing the due date is a separate flag because `due_date: None`
/// already means "leave it alone".
#[derive(Debug, Clone, Default)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TodoStatus>,
    pub priority: Option<Priority>,
    pub due_date: Option<Timestamp>,
    pub clear_due_date: bool,
    pub tags: Option<Vec<String>>,
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && !self.clear_due_date
            && self.tags.is_none()
            && self.completed.is_none()
    }

    /// Apply the status/completion coupling.
    ///
    /// Marking a todo completed forces its status to `completed`,
    /// overriding any status in the same patch. The reverse direction is
    /// deliberately absent: setting `completed: Some(false)` leaves the
    /// status untouched, and setting the status alone leaves the flag
    /// untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::{TodoPatch, TodoStatus};
    ///
    /// let patch = TodoPatch {
    ///     completed: Some(true),
    ///     status: Some(TodoStatus::InProgress),
    ///     ..Default::default()
    /// };
    /// assert_eq!(patch.normalized().status, Some(TodoStatus::Completed));
    ///
    /// let patch = TodoPatch {
    ///     completed: Some(false),
    ///     ..Default::default()
    /// };
    /// assert_eq!(patch.normalized().status, None);
    /// ```
    pub fn normalized(mut self) -> Self {
        if self.completed == Some(true) {
            self.status = Some(TodoStatus::Completed);
        }
        self
    }
}

impl TryFrom<crate::params::CreateTodo> for NewTodo {
    type Error = crate::TrackerError;

    /// Convert CreateTodo parameters into a validated creation request.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the title is empty or too
    ///   long, the description is too long, a tag is blank, or the
    ///   priority or due date string does not parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::{models::NewTodo, params::CreateTodo};
    ///
    /// let mut params = CreateTodo::default();
    /// params.title = "Book the venue".to_string();
    /// params.priority = Some("high".to_string());
    ///
    /// let new: NewTodo = params.try_into()?;
    /// assert_eq!(new.title, "Book the venue");
    /// # use tally_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::CreateTodo) -> Result<Self, Self::Error> {
        let (priority, due_date) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            priority: priority.unwrap_or_default(),
            due_date,
            tags: params.tags,
        })
    }
}

impl TryFrom<crate::params::UpdateTodo> for TodoPatch {
    type Error = crate::TrackerError;

    /// Convert UpdateTodo parameters into a validated patch.
    ///
    /// The status, priority, and due date strings are parsed here; field
    /// length rules are the same as for creation. The returned patch has
    /// not had [`TodoPatch::normalized`] applied yet.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When any field fails validation,
    ///   or a due date is supplied together with the clear flag
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::{models::TodoPatch, params::UpdateTodo};
    ///
    /// let mut params = UpdateTodo::default();
    /// params.id = 1;
    /// params.status = Some("in_progress".to_string());
    /// params.title = Some("Book the bigger venue".to_string());
    ///
    /// let patch: TodoPatch = params.try_into()?;
    /// assert_eq!(patch.title, Some("Book the bigger venue".to_string()));
    /// # use tally_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    fn try_from(params: crate::params::UpdateTodo) -> Result<Self, Self::Error> {
        let (status, priority, due_date) = params.validate()?;

        Ok(Self {
            title: params.title,
            description: params.description,
            status,
            priority,
            due_date,
            clear_due_date: params.clear_due,
            tags: params.tags,
            completed: params.completed,
        })
    }
}
