//! Parameter structures for tracker operations
//!
//! This module contains shared parameter structures that can be used across
//! different interfaces (CLI, MCP, etc.) without framework-specific derives or
//! dependencies. These structures provide a clean interface for passing data
//! between different layers of the application.
//!
//! ## Architecture: Parameter Wrapper Pattern
//!
//! This module implements a parameter wrapper pattern that enables clean
//! separation of concerns between the core domain logic and interface-specific
//! frameworks:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers create wrapper structs that:
//! - Add framework-specific derives (clap::Args, schemars::JsonSchema, etc.)
//! - Use transparent serialization (`#[serde(transparent)]`)
//! - Convert to core parameters via `.into()` or accessor methods
//!
//! Each structure validates itself: the string fields accepted from the
//! outside world (status, priority, dates, sort options) are parsed into
//! their typed forms by the `validate` methods, so interface layers never
//! interpret user input themselves.
//!
//! ```ignore
//! // In CLI module
//! #[derive(Args)]
//! pub struct AddArgs {
//!     pub title: String,
//!     // ... clap-specific attributes
//! }
//!
//! impl From<AddArgs> for CreateTodo {
//!     fn from(args: AddArgs) -> Self {
//!         CreateTodo {
//!             title: args.title,
//!             ..Default::default()
//!         }
//!     }
//! }
//!
//! // In MCP module
//! #[derive(Deserialize, JsonSchema)]
//! #[serde(transparent)]
//! struct CreateTodoRequest(tally_core::params::CreateTodo);
//! ```

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, TodoFilter, TodoStatus, DESCRIPTION_MAX_LEN, TITLE_MAX_LEN};
use crate::page::{PageRequest, SortField, SortOrder};

/// Generic parameters for operations requiring just an ID.
///
/// Used for operations like get_todo, toggle_todo, delete_todo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the todo to operate on
    pub id: u64,
}

/// Parameters for creating a new todo.
///
/// New todos always start with status 'todo' and not completed; only the
/// fields below can be chosen at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTodo {
    /// Title of the todo (required, at most 200 characters)
    pub title: String,
    /// Optional detailed description (at most 1000 characters)
    pub description: Option<String>,
    /// Priority ('low', 'medium', 'high', or 'urgent'; defaults to 'medium')
    pub priority: Option<String>,
    /// Optional due date, RFC 3339 ('2025-06-01T12:00:00Z') or a calendar
    /// date ('2025-06-01', read as UTC midnight)
    pub due: Option<String>,
    /// Tags to attach to the todo
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateTodo {
    /// Validate creation parameters and return the parsed priority and due
    /// date.
    ///
    /// # Returns
    ///
    /// A Result containing a tuple of (optional parsed Priority, optional
    /// parsed due timestamp), or an error if validation fails.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the title is empty or exceeds
    ///   200 characters
    /// * `TrackerError::InvalidInput` - When the description exceeds 1000
    ///   characters
    /// * `TrackerError::InvalidInput` - When a tag is blank
    /// * `TrackerError::InvalidInput` - When the priority or due date string
    ///   does not parse
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::{models::Priority, params::CreateTodo};
    ///
    /// let mut params = CreateTodo::default();
    /// params.title = "Renew the domain".to_string();
    /// params.priority = Some("urgent".to_string());
    /// let (priority, due) = params.validate()?;
    /// assert_eq!(priority, Some(Priority::Urgent));
    /// assert_eq!(due, None);
    ///
    /// // Invalid - empty title
    /// let params = CreateTodo::default();
    /// assert!(params.validate().is_err());
    /// # use tally_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(&self) -> crate::Result<(Option<Priority>, Option<Timestamp>)> {
        validate_title(&self.title)?;
        validate_description(self.description.as_deref())?;
        validate_tags(&self.tags)?;

        let priority = parse_priority(self.priority.as_deref())?;
        let due_date = match &self.due {
            Some(value) => Some(parse_timestamp("due", value)?),
            None => None,
        };

        Ok((priority, due_date))
    }
}

/// Parameters for updating an existing todo.
///
/// Allows partial updates: fields left as `None` are not touched. Marking a
/// todo completed also moves its status to 'completed'; clearing the flag
/// leaves the status alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTodo {
    /// Todo ID to update (required)
    pub id: u64,
    /// Updated title of the todo (at most 200 characters)
    pub title: Option<String>,
    /// Updated detailed description (at most 1000 characters)
    pub description: Option<String>,
    /// New status ('todo', 'in_progress', or 'completed')
    pub status: Option<String>,
    /// New priority ('low', 'medium', 'high', or 'urgent')
    pub priority: Option<String>,
    /// New completion flag
    pub completed: Option<bool>,
    /// New due date, RFC 3339 or a calendar date
    pub due: Option<String>,
    /// Remove the due date. Cannot be combined with `due`.
    #[serde(default)]
    pub clear_due: bool,
    /// Replacement tag list (replaces all existing tags)
    pub tags: Option<Vec<String>>,
}

impl UpdateTodo {
    /// Validate update parameters and return the parsed status, priority,
    /// and due date.
    ///
    /// # Returns
    ///
    /// A Result containing a tuple of (optional parsed TodoStatus, optional
    /// parsed Priority, optional parsed due timestamp), or an error if
    /// validation fails.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When any field fails the creation
    ///   rules
    /// * `TrackerError::InvalidInput` - When `due` and `clear_due` are both
    ///   set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::{models::TodoStatus, params::UpdateTodo};
    ///
    /// let mut params = UpdateTodo::default();
    /// params.id = 1;
    /// params.status = Some("in_progress".to_string());
    /// let (status, priority, due) = params.validate()?;
    /// assert_eq!(status, Some(TodoStatus::InProgress));
    /// assert_eq!(priority, None);
    /// assert_eq!(due, None);
    ///
    /// // Invalid - setting and clearing the due date together
    /// let mut params = UpdateTodo::default();
    /// params.id = 1;
    /// params.due = Some("2025-06-01".to_string());
    /// params.clear_due = true;
    /// assert!(params.validate().is_err());
    /// # use tally_core::Result;
    /// # Result::<()>::Ok(())
    /// ```
    pub fn validate(
        &self,
    ) -> crate::Result<(Option<TodoStatus>, Option<Priority>, Option<Timestamp>)> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        validate_description(self.description.as_deref())?;
        if let Some(tags) = &self.tags {
            validate_tags(tags)?;
        }

        if self.due.is_some() && self.clear_due {
            return Err(crate::TrackerError::InvalidInput {
                field: "due".to_string(),
                reason: "Cannot set a due date and clear it in the same update".to_string(),
            });
        }

        let status = parse_status(self.status.as_deref())?;
        let priority = parse_priority(self.priority.as_deref())?;
        let due_date = match &self.due {
            Some(value) => Some(parse_timestamp("due", value)?),
            None => None,
        };

        Ok((status, priority, due_date))
    }
}

/// Parameters for listing todos.
///
/// All filter fields are optional and combine with AND. Page numbers start
/// at 1; out-of-range paging values are clamped rather than rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTodos {
    /// Only todos with this status ('todo', 'in_progress', or 'completed')
    pub status: Option<String>,
    /// Only todos with this priority ('low', 'medium', 'high', or 'urgent')
    pub priority: Option<String>,
    /// Only todos with this completion flag
    pub completed: Option<bool>,
    /// Only todos carrying at least one of these tags
    #[serde(default)]
    pub tags: Vec<String>,
    /// Case-insensitive substring match against title and description
    pub search: Option<String>,
    /// Only todos due at or before this date
    pub due_before: Option<String>,
    /// Only todos due at or after this date
    pub due_after: Option<String>,
    /// Page number, starting at 1
    pub page: Option<u32>,
    /// Page size (defaults to 10)
    pub limit: Option<u32>,
    /// Sort field ('createdAt', 'updatedAt', 'dueDate', 'priority', or
    /// 'title')
    pub sort_by: Option<String>,
    /// Sort direction; 'asc' sorts ascending, anything else descending
    pub sort_order: Option<String>,
}

impl ListTodos {
    /// Validate listing parameters and return the parsed filter and page
    /// request.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When a status, priority, date, or
    ///   sort field string does not parse
    pub fn validate(&self) -> crate::Result<(TodoFilter, PageRequest)> {
        use std::str::FromStr;

        let status = parse_status(self.status.as_deref())?;
        let priority = parse_priority(self.priority.as_deref())?;
        let due_before = match &self.due_before {
            Some(value) => Some(parse_timestamp("due_before", value)?),
            None => None,
        };
        let due_after = match &self.due_after {
            Some(value) => Some(parse_timestamp("due_after", value)?),
            None => None,
        };

        let sort_by = if let Some(field_str) = &self.sort_by {
            Some(
                SortField::from_str(field_str).map_err(|reason| {
                    crate::TrackerError::InvalidInput {
                        field: "sort_by".to_string(),
                        reason,
                    }
                })?,
            )
        } else {
            None
        };
        let sort_order = SortOrder::parse_lenient(self.sort_order.as_deref());

        let filter = TodoFilter {
            status,
            completed: self.completed,
            priority,
            tags: self.tags.clone(),
            search: self.search.clone(),
            due_before,
            due_after,
        };
        let page = PageRequest {
            page: self.page,
            limit: self.limit,
            sort_by,
            sort_order: Some(sort_order),
        };

        Ok((filter, page))
    }
}

fn validate_title(title: &str) -> crate::Result<()> {
    if title.trim().is_empty() {
        return Err(crate::TrackerError::InvalidInput {
            field: "title".to_string(),
            reason: "Title cannot be empty".to_string(),
        });
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err(crate::TrackerError::InvalidInput {
            field: "title".to_string(),
            reason: format!("Title cannot exceed {TITLE_MAX_LEN} characters"),
        });
    }
    Ok(())
}

fn validate_description(description: Option<&str>) -> crate::Result<()> {
    if let Some(description) = description {
        if description.chars().count() > DESCRIPTION_MAX_LEN {
            return Err(crate::TrackerError::InvalidInput {
                field: "description".to_string(),
                reason: format!("Description cannot exceed {DESCRIPTION_MAX_LEN} characters"),
            });
        }
    }
    Ok(())
}

fn validate_tags(tags: &[String]) -> crate::Result<()> {
    if tags.iter().any(|tag| tag.trim().is_empty()) {
        return Err(crate::TrackerError::InvalidInput {
            field: "tags".to_string(),
            reason: "Tags cannot be blank".to_string(),
        });
    }
    Ok(())
}

fn parse_status(status: Option<&str>) -> crate::Result<Option<TodoStatus>> {
    use std::str::FromStr;

    match status {
        Some(status_str) => Ok(Some(TodoStatus::from_str(status_str).map_err(|_| {
            crate::TrackerError::InvalidInput {
                field: "status".to_string(),
                reason: format!(
                    "Invalid status: {status_str}. Must be 'todo', 'in_progress', or 'completed'"
                ),
            }
        })?)),
        None => Ok(None),
    }
}

fn parse_priority(priority: Option<&str>) -> crate::Result<Option<Priority>> {
    use std::str::FromStr;

    match priority {
        Some(priority_str) => Ok(Some(Priority::from_str(priority_str).map_err(|_| {
            crate::TrackerError::InvalidInput {
                field: "priority".to_string(),
                reason: format!(
                    "Invalid priority: {priority_str}. Must be 'low', 'medium', 'high', or 'urgent'"
                ),
            }
        })?)),
        None => Ok(None),
    }
}

/// Parse a user-supplied date string into a timestamp.
///
/// Accepts RFC 3339 timestamps and plain calendar dates; a plain date is
/// read as midnight UTC so date-only filters behave the same everywhere.
fn parse_timestamp(field: &str, value: &str) -> crate::Result<Timestamp> {
    use jiff::civil::Date;
    use jiff::tz::TimeZone;

    if let Ok(timestamp) = value.parse::<Timestamp>() {
        return Ok(timestamp);
    }

    if let Ok(date) = value.parse::<Date>() {
        let zoned = date.at(0, 0, 0, 0).to_zoned(TimeZone::UTC).map_err(|e| {
            crate::TrackerError::InvalidInput {
                field: field.to_string(),
                reason: format!("Invalid date: {value}. {e}"),
            }
        })?;
        return Ok(zoned.timestamp());
    }

    Err(crate::TrackerError::InvalidInput {
        field: field.to_string(),
        reason: format!(
            "Invalid date: {value}. Use RFC 3339 like '2025-06-01T12:00:00Z' or a calendar date like '2025-06-01'"
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TrackerError;

    #[test]
    fn test_create_todo_validate_minimal() {
        let mut params = CreateTodo::default();
        params.title = "Water the plants".to_string();

        let result = params.validate();
        assert!(result.is_ok());

        let (priority, due) = result.unwrap();
        assert_eq!(priority, None);
        assert_eq!(due, None);
    }

    #[test]
    fn test_create_todo_validate_full() {
        let mut params = CreateTodo::default();
        params.title = "Quarterly report".to_string();
        params.description = Some("Numbers from finance".to_string());
        params.priority = Some("high".to_string());
        params.due = Some("2025-06-01T12:00:00Z".to_string());
        params.tags = vec!["work".to_string(), "reports".to_string()];

        let result = params.validate();
        assert!(result.is_ok());

        let (priority, due) = result.unwrap();
        assert_eq!(priority, Some(Priority::High));
        assert_eq!(due, Some("2025-06-01T12:00:00Z".parse().unwrap()));
    }

    #[test]
    fn test_create_todo_validate_empty_title() {
        let params = CreateTodo::default();

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert!(reason.contains("empty"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_todo_validate_whitespace_title() {
        let mut params = CreateTodo::default();
        params.title = "   \t  ".to_string();

        let result = params.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_create_todo_validate_title_too_long() {
        let mut params = CreateTodo::default();
        params.title = "x".repeat(TITLE_MAX_LEN + 1);

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert!(reason.contains("200"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_todo_validate_title_at_limit() {
        let mut params = CreateTodo::default();
        params.title = "x".repeat(TITLE_MAX_LEN);

        let result = params.validate();
        assert!(result.is_ok());
    }

    #[test]
    fn test_create_todo_validate_description_too_long() {
        let mut params = CreateTodo::default();
        params.title = "Short title".to_string();
        params.description = Some("y".repeat(DESCRIPTION_MAX_LEN + 1));

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "description");
                assert!(reason.contains("1000"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_todo_validate_invalid_priority() {
        let mut params = CreateTodo::default();
        params.title = "Short title".to_string();
        params.priority = Some("critical".to_string());

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "priority");
                assert!(reason.contains("Invalid priority: critical"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_todo_validate_invalid_due() {
        let mut params = CreateTodo::default();
        params.title = "Short title".to_string();
        params.due = Some("next tuesday".to_string());

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "due");
                assert!(reason.contains("Invalid date"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_create_todo_validate_date_only_due() {
        let mut params = CreateTodo::default();
        params.title = "Short title".to_string();
        params.due = Some("2025-06-01".to_string());

        let (_, due) = params.validate().unwrap();
        assert_eq!(due, Some("2025-06-01T00:00:00Z".parse().unwrap()));
    }

    #[test]
    fn test_create_todo_validate_blank_tag() {
        let mut params = CreateTodo::default();
        params.title = "Short title".to_string();
        params.tags = vec!["work".to_string(), "  ".to_string()];

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, .. } => {
                assert_eq!(field, "tags");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_update_todo_validate_no_changes() {
        let params = UpdateTodo::default();

        let result = params.validate();
        assert!(result.is_ok());

        let (status, priority, due) = result.unwrap();
        assert_eq!(status, None);
        assert_eq!(priority, None);
        assert_eq!(due, None);
    }

    #[test]
    fn test_update_todo_validate_status_and_priority() {
        let mut params = UpdateTodo::default();
        params.id = 1;
        params.status = Some("completed".to_string());
        params.priority = Some("low".to_string());

        let result = params.validate();
        assert!(result.is_ok());

        let (status, priority, due) = result.unwrap();
        assert_eq!(status, Some(TodoStatus::Completed));
        assert_eq!(priority, Some(Priority::Low));
        assert_eq!(due, None);
    }

    #[test]
    fn test_update_todo_validate_invalid_status() {
        let mut params = UpdateTodo::default();
        params.id = 1;
        params.status = Some("cancelled".to_string());

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "status");
                assert!(reason.contains("Invalid status: cancelled"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_update_todo_validate_alternative_inprogress_spelling() {
        let mut params = UpdateTodo::default();
        params.id = 1;
        params.status = Some("inprogress".to_string());

        let (status, _, _) = params.validate().unwrap();
        assert_eq!(status, Some(TodoStatus::InProgress));
    }

    #[test]
    fn test_update_todo_validate_due_conflicts_with_clear() {
        let mut params = UpdateTodo::default();
        params.id = 1;
        params.due = Some("2025-06-01".to_string());
        params.clear_due = true;

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, .. } => {
                assert_eq!(field, "due");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_update_todo_validate_empty_title() {
        let mut params = UpdateTodo::default();
        params.id = 1;
        params.title = Some(String::new());

        let result = params.validate();
        assert!(result.is_err());
    }

    #[test]
    fn test_list_todos_validate_defaults() {
        let params = ListTodos::default();

        let result = params.validate();
        assert!(result.is_ok());

        let (filter, page) = result.unwrap();
        assert_eq!(filter, TodoFilter::default());
        assert_eq!(page.page, None);
        assert_eq!(page.limit, None);
        assert_eq!(page.sort_by, None);
        assert_eq!(page.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_list_todos_validate_full() {
        let mut params = ListTodos::default();
        params.status = Some("in_progress".to_string());
        params.priority = Some("urgent".to_string());
        params.completed = Some(false);
        params.tags = vec!["work".to_string()];
        params.search = Some("report".to_string());
        params.due_before = Some("2025-07-01".to_string());
        params.due_after = Some("2025-06-01".to_string());
        params.page = Some(2);
        params.limit = Some(25);
        params.sort_by = Some("dueDate".to_string());
        params.sort_order = Some("asc".to_string());

        let (filter, page) = params.validate().unwrap();
        assert_eq!(filter.status, Some(TodoStatus::InProgress));
        assert_eq!(filter.priority, Some(Priority::Urgent));
        assert_eq!(filter.completed, Some(false));
        assert_eq!(filter.search, Some("report".to_string()));
        assert!(filter.due_before.is_some());
        assert!(filter.due_after.is_some());
        assert_eq!(page.page, Some(2));
        assert_eq!(page.limit, Some(25));
        assert_eq!(page.sort_by, Some(SortField::DueDate));
        assert_eq!(page.sort_order, Some(SortOrder::Asc));
    }

    #[test]
    fn test_list_todos_validate_invalid_sort_field() {
        let mut params = ListTodos::default();
        params.sort_by = Some("color".to_string());

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "sort_by");
                assert!(reason.contains("Invalid sort field"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_list_todos_validate_sort_order_lenient() {
        let mut params = ListTodos::default();
        params.sort_order = Some("ASC".to_string());
        let (_, page) = params.validate().unwrap();
        assert_eq!(page.sort_order, Some(SortOrder::Asc));

        let mut params = ListTodos::default();
        params.sort_order = Some("descending".to_string());
        let (_, page) = params.validate().unwrap();
        assert_eq!(page.sort_order, Some(SortOrder::Desc));
    }

    #[test]
    fn test_list_todos_validate_invalid_due_bound() {
        let mut params = ListTodos::default();
        params.due_before = Some("soonish".to_string());

        let result = params.validate();
        assert!(result.is_err());

        match result.unwrap_err() {
            TrackerError::InvalidInput { field, .. } => {
                assert_eq!(field, "due_before");
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }
}
