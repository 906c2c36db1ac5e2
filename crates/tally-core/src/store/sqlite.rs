//! SQLite-backed todo storage.

use std::path::{Path, PathBuf};

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension, Row};

use super::{now_micros, GroupField, Store, StoreError, StoreResult};
use crate::models::requests::{NewTodo, TodoPatch};
use crate::models::{Priority, Todo, TodoStatus};
use crate::page::{PageSpec, SortField, SortOrder};
use crate::query::{Condition, Predicate};

// Optimized SQL queries as const strings for compile-time optimization
const INSERT_TODO_SQL: &str = "INSERT INTO todos (title, description, status, priority, due_date, tags, completed, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";
const SELECT_TODO_SQL: &str = "SELECT id, title, description, status, priority, due_date, tags, completed, created_at, updated_at FROM todos WHERE id = ?1";
const DELETE_TODO_SQL: &str = "DELETE FROM todos WHERE id = ?1";

const TODO_COLUMNS: &str =
    "id, title, description, status, priority, due_date, tags, completed, created_at, updated_at";

/// SQLite-backed [`Store`].
///
/// Holds only the database path; every operation opens its own connection
/// and runs the idempotent schema script, so a store value can be shared
/// freely across blocking tasks without locking.
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Creates a store for the given database file, initializing the
    /// schema.
    pub fn new<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        // Open once up front so a bad path fails here, not on first use
        store.open()?;
        Ok(store)
    }

    /// The database file this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&self) -> StoreResult<Connection> {
        let connection =
            Connection::open(&self.path).sql_context("Failed to open database connection")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        connection
            .execute_batch(schema_sql)
            .sql_context("Failed to initialize database schema")?;

        Ok(connection)
    }
}

impl Store for SqliteStore {
    fn insert(&self, new: NewTodo) -> StoreResult<Todo> {
        let connection = self.open()?;

        let now = now_micros();
        let tags_json = serde_json::to_string(&new.tags)
            .map_err(|e| StoreError::with_source("Failed to encode tags", e))?;

        connection
            .execute(
                INSERT_TODO_SQL,
                params![
                    new.title,
                    new.description,
                    TodoStatus::Todo.as_str(),
                    new.priority.as_str(),
                    new.due_date.map(|t| t.as_microsecond()),
                    tags_json,
                    false,
                    now.as_microsecond(),
                    now.as_microsecond(),
                ],
            )
            .sql_context("Failed to insert todo")?;

        let id = connection.last_insert_rowid() as u64;

        Ok(Todo {
            id,
            title: new.title,
            description: new.description,
            status: TodoStatus::Todo,
            priority: new.priority,
            due_date: new.due_date,
            tags: new.tags,
            completed: false,
            created_at: now,
            updated_at: now,
        })
    }

    fn find_by_id(&self, id: u64) -> StoreResult<Option<Todo>> {
        let connection = self.open()?;

        connection
            .query_row(SELECT_TODO_SQL, params![id as i64], build_todo_from_row)
            .optional()
            .sql_context("Failed to query todo")
    }

    fn find_many(&self, predicate: &Predicate, page: &PageSpec) -> StoreResult<Vec<Todo>> {
        let connection = self.open()?;

        let mut query = format!("SELECT {TODO_COLUMNS} FROM todos");
        let (conditions, mut params_vec) = predicate_clauses(predicate)?;

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY ");
        query.push_str(&order_clause(page));
        query.push_str(" LIMIT ? OFFSET ?");
        params_vec.push(Box::new(i64::from(page.limit)));
        params_vec.push(Box::new(page.skip as i64));

        let mut stmt = connection
            .prepare(&query)
            .sql_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let todos = stmt
            .query_map(&params_refs[..], build_todo_from_row)
            .sql_context("Failed to query todos")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .sql_context("Failed to fetch todos");
        todos
    }

    fn count(&self, predicate: &Predicate) -> StoreResult<u64> {
        let connection = self.open()?;

        let mut query = String::from("SELECT COUNT(*) FROM todos");
        let (conditions, params_vec) = predicate_clauses(predicate)?;

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let count: i64 = connection
            .query_row(&query, &params_refs[..], |row| row.get(0))
            .sql_context("Failed to count todos")?;

        Ok(count as u64)
    }

    fn update_by_id(&self, id: u64, patch: TodoPatch) -> StoreResult<Option<Todo>> {
        let mut connection = self.open()?;
        let tx = connection
            .transaction()
            .sql_context("Failed to begin transaction")?;

        let mut assignments: Vec<&str> = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(title) = patch.title {
            assignments.push("title = ?");
            params_vec.push(Box::new(title));
        }
        if let Some(description) = patch.description {
            assignments.push("description = ?");
            params_vec.push(Box::new(description));
        }
        if let Some(status) = patch.status {
            assignments.push("status = ?");
            params_vec.push(Box::new(status.as_str().to_string()));
        }
        if let Some(priority) = patch.priority {
            assignments.push("priority = ?");
            params_vec.push(Box::new(priority.as_str().to_string()));
        }
        if patch.clear_due_date {
            assignments.push("due_date = NULL");
        } else if let Some(due) = patch.due_date {
            assignments.push("due_date = ?");
            params_vec.push(Box::new(due.as_microsecond()));
        }
        if let Some(tags) = patch.tags {
            let tags_json = serde_json::to_string(&tags)
                .map_err(|e| StoreError::with_source("Failed to encode tags", e))?;
            assignments.push("tags = ?");
            params_vec.push(Box::new(tags_json));
        }
        if let Some(completed) = patch.completed {
            assignments.push("completed = ?");
            params_vec.push(Box::new(completed));
        }

        assignments.push("updated_at = ?");
        params_vec.push(Box::new(Timestamp::now().as_microsecond()));

        let sql = format!("UPDATE todos SET {} WHERE id = ?", assignments.join(", "));
        params_vec.push(Box::new(id as i64));

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows_affected = tx
            .execute(&sql, &params_refs[..])
            .sql_context("Failed to update todo")?;

        if rows_affected == 0 {
            return Ok(None);
        }

        let todo = tx
            .query_row(SELECT_TODO_SQL, params![id as i64], build_todo_from_row)
            .sql_context("Failed to query updated todo")?;

        tx.commit().sql_context("Failed to commit transaction")?;

        Ok(Some(todo))
    }

    fn delete_by_id(&self, id: u64) -> StoreResult<bool> {
        let connection = self.open()?;

        let rows_affected = connection
            .execute(DELETE_TODO_SQL, params![id as i64])
            .sql_context("Failed to delete todo")?;

        Ok(rows_affected > 0)
    }

    fn delete_many(&self, predicate: &Predicate) -> StoreResult<u64> {
        let connection = self.open()?;

        let mut query = String::from("DELETE FROM todos");
        let (conditions, params_vec) = predicate_clauses(predicate)?;

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows_affected = connection
            .execute(&query, &params_refs[..])
            .sql_context("Failed to delete todos")?;

        Ok(rows_affected as u64)
    }

    fn group_counts(&self, field: GroupField) -> StoreResult<Vec<(String, u64)>> {
        let connection = self.open()?;

        let query = format!(
            "SELECT {col}, COUNT(*) FROM todos GROUP BY {col}",
            col = field.as_str()
        );

        let mut stmt = connection
            .prepare(&query)
            .sql_context("Failed to prepare query")?;

        let counts = stmt
            .query_map([], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)? as u64))
            })
            .sql_context("Failed to query grouped counts")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .sql_context("Failed to fetch grouped counts");
        counts
    }
}

/// Translate a predicate into WHERE fragments and their bound parameters.
fn predicate_clauses(
    predicate: &Predicate,
) -> StoreResult<(Vec<String>, Vec<Box<dyn rusqlite::ToSql>>)> {
    let mut conditions: Vec<String> = Vec::new();
    let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

    for condition in predicate.conditions() {
        match condition {
            Condition::Status(status) => {
                conditions.push("status = ?".to_string());
                params_vec.push(Box::new(status.as_str().to_string()));
            }
            Condition::Completed(completed) => {
                conditions.push("completed = ?".to_string());
                params_vec.push(Box::new(*completed));
            }
            Condition::Priority(priority) => {
                conditions.push("priority = ?".to_string());
                params_vec.push(Box::new(priority.as_str().to_string()));
            }
            Condition::TagsAny(tags) => {
                let placeholders = vec!["?"; tags.len()].join(", ");
                conditions.push(format!(
                    "EXISTS (SELECT 1 FROM json_each(todos.tags) WHERE json_each.value IN ({placeholders}))"
                ));
                for tag in tags {
                    params_vec.push(Box::new(tag.clone()));
                }
            }
            Condition::Search(term) => {
                // Escape LIKE metacharacters so the term matches literally
                let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
                conditions.push(
                    "(LOWER(title) LIKE ? ESCAPE '\\' OR LOWER(description) LIKE ? ESCAPE '\\')"
                        .to_string(),
                );
                params_vec.push(Box::new(pattern.clone()));
                params_vec.push(Box::new(pattern));
            }
            Condition::DueBefore(bound) => {
                conditions.push("due_date <= ?".to_string());
                params_vec.push(Box::new(bound.as_microsecond()));
            }
            Condition::DueAfter(bound) => {
                conditions.push("due_date >= ?".to_string());
                params_vec.push(Box::new(bound.as_microsecond()));
            }
        }
    }

    Ok((conditions, params_vec))
}

/// Build the ORDER BY expression for a resolved page spec.
///
/// Todos without a due date always sort after dated ones, and id breaks
/// ties in the primary direction so ordering stays stable when timestamps
/// collide.
fn order_clause(page: &PageSpec) -> String {
    let direction = match page.sort_order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    };

    match page.sort_by {
        SortField::CreatedAt => format!("created_at {direction}, id {direction}"),
        SortField::UpdatedAt => format!("updated_at {direction}, id {direction}"),
        SortField::DueDate => format!("(due_date IS NULL), due_date {direction}, id {direction}"),
        SortField::Priority => format!(
            "CASE priority WHEN 'low' THEN 0 WHEN 'medium' THEN 1 WHEN 'high' THEN 2 WHEN 'urgent' THEN 3 END {direction}, id {direction}"
        ),
        SortField::Title => format!("title COLLATE NOCASE {direction}, id {direction}"),
    }
}

/// Escape `%`, `_`, and the escape character itself for a LIKE pattern.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn build_todo_from_row(row: &Row) -> rusqlite::Result<Todo> {
    let status_str: String = row.get(3)?;
    let status = status_str.parse::<TodoStatus>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            3,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid todo status: {status_str}"),
            )),
        )
    })?;

    let priority_str: String = row.get(4)?;
    let priority = priority_str.parse::<Priority>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            4,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid priority: {priority_str}"),
            )),
        )
    })?;

    let due_date = row
        .get::<_, Option<i64>>(5)?
        .map(|micros| {
            Timestamp::from_microsecond(micros).map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(5, Type::Integer, Box::new(e))
            })
        })
        .transpose()?;

    let tags_json: String = row.get(6)?;
    let tags: Vec<String> = serde_json::from_str(&tags_json)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

    Ok(Todo {
        id: row.get::<_, i64>(0)? as u64,
        title: row.get(1)?,
        description: row.get(2)?,
        status,
        priority,
        due_date,
        tags,
        completed: row.get(7)?,
        created_at: timestamp_from_column(row, 8)?,
        updated_at: timestamp_from_column(row, 9)?,
    })
}

fn timestamp_from_column(row: &Row, idx: usize) -> rusqlite::Result<Timestamp> {
    let micros: i64 = row.get(idx)?;
    Timestamp::from_microsecond(micros)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Integer, Box::new(e)))
}

/// Specialized extension trait for rusqlite Results.
trait SqliteResultExt<T> {
    /// Map SQLite errors with a message, preserving the driver error as
    /// the source.
    fn sql_context(self, message: &str) -> StoreResult<T>;
}

impl<T> SqliteResultExt<T> for rusqlite::Result<T> {
    fn sql_context(self, message: &str) -> StoreResult<T> {
        self.map_err(|e| StoreError::with_source(message, e))
    }
}
