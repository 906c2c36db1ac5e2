//! Aggregate statistics types for todos.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Priority, TodoStatus};
use crate::error::{Result, TrackerError};

/// Aggregate counts over the whole todo collection.
///
/// The grouped maps are sparse: an enum value with no matching records is
/// omitted entirely rather than reported as zero. `pending` is defined by
/// the `completed` flag alone, so an in-progress record counts as pending.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoStats {
    /// Count of all records
    pub total: u64,
    /// Count of records with `completed = true`
    pub completed: u64,
    /// Count of records with `completed = false`
    pub pending: u64,
    /// Count of records per priority, absent values omitted
    pub by_priority: BTreeMap<Priority, u64>,
    /// Count of records per status, absent values omitted
    pub by_status: BTreeMap<TodoStatus, u64>,
}

impl TodoStats {
    /// Assemble statistics from raw counts and grouped rows.
    ///
    /// Group rows arrive as `(label, count)` pairs straight from the store;
    /// labels are parsed back into their enum values. A label the enums do
    /// not recognize means the stored data and the code disagree, which is
    /// reported as a configuration error rather than skipped.
    pub fn from_counts(
        total: u64,
        completed: u64,
        pending: u64,
        priority_rows: Vec<(String, u64)>,
        status_rows: Vec<(String, u64)>,
    ) -> Result<Self> {
        let mut by_priority = BTreeMap::new();
        for (label, count) in priority_rows {
            let priority: Priority = label.parse().map_err(|reason| {
                TrackerError::Configuration {
                    message: format!("unrecognized stored priority: {reason}"),
                }
            })?;
            by_priority.insert(priority, count);
        }

        let mut by_status = BTreeMap::new();
        for (label, count) in status_rows {
            let status: TodoStatus = label.parse().map_err(|reason| {
                TrackerError::Configuration {
                    message: format!("unrecognized stored status: {reason}"),
                }
            })?;
            by_status.insert(status, count);
        }

        Ok(Self {
            total,
            completed,
            pending,
            by_priority,
            by_status,
        })
    }
}
