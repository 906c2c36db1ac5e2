//! MCP tool handlers implementation

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tally_core::{
    params as core,
    store::{SqliteStore, Store},
    Tracker,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// This generic wrapper struct implements the parameter wrapper pattern by:
// 1. Wrapping any core parameter type in a transparent serde container
// 2. Adding MCP-specific derives (Deserialize, JsonSchema) for JSON handling
// 3. Keeping the core types clean of framework dependencies
//
// The #[serde(transparent)] attribute ensures that
// serialization/deserialization passes through directly to the wrapped core
// type, maintaining API compatibility while adding the necessary trait
// implementations for MCP protocol handling.

/// Generic MCP wrapper for core parameter types with serde integration
///
/// Provides JSON deserialization and schema generation for any parameter
/// type, eliminating the need for individual wrapper structs while keeping
/// the same functionality and type safety.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

// Type aliases for cleaner usage in function signatures
pub type Id = McpParams<core::Id>;
pub type CreateTodo = McpParams<core::CreateTodo>;
pub type ListTodos = McpParams<core::ListTodos>;
pub type UpdateTodo = McpParams<core::UpdateTodo>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers<S: Store = SqliteStore> {
    tracker: Tracker<S>,
}

impl<S: Store> McpHandlers<S> {
    pub fn new(tracker: Tracker<S>) -> Self {
        Self { tracker }
    }

    pub async fn create_todo(&self, Parameters(params): Parameters<CreateTodo>) -> McpResult {
        debug!("create_todo: {:?}", params);

        let result = self
            .tracker
            .create_todo_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to create todo", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn list_todos(&self, Parameters(params): Parameters<ListTodos>) -> McpResult {
        debug!("list_todos: {:?}", params);

        let page = self
            .tracker
            .list_todos_page(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to list todos", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            page.to_string(),
        )]))
    }

    pub async fn get_todo(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("get_todo: {:?}", params);

        let todo = self
            .tracker
            .show_todo(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to get todo", &e))?
            .ok_or_else(|| not_found(params.as_ref().id))?;

        Ok(CallToolResult::success(vec![Content::text(
            todo.to_string(),
        )]))
    }

    pub async fn update_todo(&self, Parameters(params): Parameters<UpdateTodo>) -> McpResult {
        debug!("update_todo: {:?}", params);

        let result = self
            .tracker
            .update_todo_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to update todo", &e))?
            .ok_or_else(|| not_found(params.as_ref().id))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn toggle_todo(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_todo: {:?}", params);

        let result = self
            .tracker
            .toggle_todo_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to toggle todo", &e))?
            .ok_or_else(|| not_found(params.as_ref().id))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_todo(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("delete_todo: {:?}", params);

        let result = self
            .tracker
            .delete_todo_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to delete todo", &e))?
            .ok_or_else(|| not_found(params.as_ref().id))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn delete_completed(&self) -> McpResult {
        debug!("delete_completed");

        let result = self
            .tracker
            .delete_completed_result()
            .await
            .map_err(|e| to_mcp_error("Failed to delete completed todos", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            result.to_string(),
        )]))
    }

    pub async fn todo_stats(&self) -> McpResult {
        debug!("todo_stats");

        let stats = self
            .tracker
            .stats()
            .await
            .map_err(|e| to_mcp_error("Failed to compute statistics", &e))?;

        Ok(CallToolResult::success(vec![Content::text(
            stats.to_string(),
        )]))
    }
}

fn not_found(id: u64) -> ErrorData {
    ErrorData::internal_error(format!("Todo with ID {id} not found"), None)
}

#[cfg(test)]
mod tests {
    use tally_core::store::MemoryStore;

    use super::*;

    fn create_test_handlers() -> McpHandlers<MemoryStore> {
        McpHandlers::new(Tracker::with_store(MemoryStore::new()))
    }

    fn create_params(title: &str) -> Parameters<CreateTodo> {
        let mut params = core::CreateTodo::default();
        params.title = title.to_string();
        Parameters(McpParams(params))
    }

    #[tokio::test]
    async fn test_create_and_get_todo() {
        let handlers = create_test_handlers();

        let result = handlers.create_todo(create_params("Water the plants")).await;
        assert!(result.is_ok());

        let result = handlers
            .get_todo(Parameters(McpParams(core::Id { id: 1 })))
            .await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_todo_missing_is_an_error() {
        let handlers = create_test_handlers();

        let err = handlers
            .get_todo(Parameters(McpParams(core::Id { id: 42 })))
            .await
            .unwrap_err();
        assert!(err.message.contains("Todo with ID 42 not found"));
    }

    #[tokio::test]
    async fn test_create_todo_invalid_priority_is_an_error() {
        let handlers = create_test_handlers();

        let mut params = core::CreateTodo::default();
        params.title = "Bad prio".to_string();
        params.priority = Some("critical".to_string());

        let err = handlers
            .create_todo(Parameters(McpParams(params)))
            .await
            .unwrap_err();
        assert!(err.message.contains("Failed to create todo"));
        assert!(err.message.contains("Invalid priority"));
    }

    #[tokio::test]
    async fn test_toggle_update_and_delete_flow() {
        let handlers = create_test_handlers();
        handlers
            .create_todo(create_params("Flow todo"))
            .await
            .unwrap();

        let result = handlers
            .toggle_todo(Parameters(McpParams(core::Id { id: 1 })))
            .await;
        assert!(result.is_ok());

        let mut update = core::UpdateTodo::default();
        update.id = 1;
        update.title = Some("Renamed flow todo".to_string());
        let result = handlers.update_todo(Parameters(McpParams(update))).await;
        assert!(result.is_ok());

        let result = handlers
            .delete_todo(Parameters(McpParams(core::Id { id: 1 })))
            .await;
        assert!(result.is_ok());

        let err = handlers
            .delete_todo(Parameters(McpParams(core::Id { id: 1 })))
            .await
            .unwrap_err();
        assert!(err.message.contains("not found"));
    }

    #[tokio::test]
    async fn test_stats_and_clear_on_empty_collection() {
        let handlers = create_test_handlers();

        assert!(handlers.todo_stats().await.is_ok());
        assert!(handlers.delete_completed().await.is_ok());
    }

    #[tokio::test]
    async fn test_list_todos_accepts_filters() {
        let handlers = create_test_handlers();
        handlers
            .create_todo(create_params("Searchable todo"))
            .await
            .unwrap();

        let mut params = core::ListTodos::default();
        params.search = Some("searchable".to_string());

        let result = handlers.list_todos(Parameters(McpParams(params))).await;
        assert!(result.is_ok());
    }
}
