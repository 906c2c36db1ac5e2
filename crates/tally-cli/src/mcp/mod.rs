//! MCP server implementation for Tally
//!
//! This module implements the Model Context Protocol server for Tally,
//! providing a standardized interface for AI models to manage the todo
//! collection over stdio.

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tally_core::Tracker;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

// Re-export parameter types and result type from handlers for external use
pub use handlers::{CreateTodo, Id, ListTodos, McpResult, UpdateTodo};

/// MCP server for Tally
#[derive(Clone)]
pub struct TallyMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TallyMcpServer {
    /// Create a new Tally MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    // Tool methods that delegate to handlers::McpHandlers methods
    #[tool(
        name = "create_todo",
        description = "Create a new todo. Provide a short title (required, up to 200 characters), optional description (up to 1000 characters), optional priority ('low', 'medium', 'high', or 'urgent'; defaults to 'medium'), optional due date (RFC 3339 like '2025-06-01T12:00:00Z' or a calendar date like '2025-06-01'), and optional tags. Returns the created todo with its ID."
    )]
    async fn create_todo(&self, params: Parameters<CreateTodo>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.create_todo(params).await
    }

    #[tool(
        name = "list_todos",
        description = "List todos with optional filters, all combined with AND: status, completed flag, priority, tags (a todo matches if it carries any of the given tags), case-insensitive search over title and description, and inclusive due-date bounds (due_before/due_after). Results are paginated: page starts at 1, limit defaults to 10, sorted by creation time newest first unless sort_by and sort_order say otherwise."
    )]
    async fn list_todos(&self, params: Parameters<ListTodos>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.list_todos(params).await
    }

    #[tool(
        name = "get_todo",
        description = "Fetch the full details of a single todo by ID, including description, tags, due date with overdue marker, and creation/update timestamps."
    )]
    async fn get_todo(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.get_todo(params).await
    }

    #[tool(
        name = "update_todo",
        description = "Update fields of an existing todo by ID. Only the provided fields change. Setting completed=true also moves the status to 'completed'; setting completed=false leaves the status alone. Use clear_due=true to remove the due date and tags=[] to remove all tags. Returns a summary of the changes made."
    )]
    async fn update_todo(&self, params: Parameters<UpdateTodo>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.update_todo(params).await
    }

    #[tool(
        name = "toggle_todo",
        description = "Flip a todo between completed and not completed. Completing sets the status to 'completed'; un-completing resets the status to 'todo'."
    )]
    async fn toggle_todo(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.toggle_todo(params).await
    }

    #[tool(
        name = "delete_todo",
        description = "Permanently delete a todo by ID. This operation cannot be undone. Returns the deleted todo's title for confirmation."
    )]
    async fn delete_todo(&self, params: Parameters<Id>) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.delete_todo(params).await
    }

    #[tool(
        name = "delete_completed",
        description = "Permanently delete every completed todo and report how many were removed. This operation cannot be undone."
    )]
    async fn delete_completed(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.delete_completed().await
    }

    #[tool(
        name = "todo_stats",
        description = "Show aggregate statistics over the whole collection: total, completed, and pending counts plus per-priority and per-status breakdowns. Only values that actually occur appear in the breakdowns."
    )]
    async fn todo_stats(&self) -> McpResult {
        let handlers = handlers::McpHandlers::new(self.tracker.clone());
        handlers.todo_stats().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TallyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tally".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Tally is a todo tracking system that keeps a single flat list of todos with statuses, priorities, due dates, and tags.

## Core Concepts
- **Todos**: Individual items with a title, optional description, status (todo/in_progress/completed), priority (low/medium/high/urgent), optional due date, and tags
- **Completion**: `completed` is a boolean flag; marking a todo completed also moves its status to 'completed'

## Workflow Examples

### Capturing Work
1. Create todos with `create_todo` - a clear title is enough, details are optional
2. Use tags to group related todos and priorities to rank them
3. Set due dates for anything time-sensitive; overdue todos are flagged when listed

### Staying on Top of Things
1. Use `list_todos` with filters to focus: by status, priority, tag, text search, or due-date window
2. Flip todos done/undone with `toggle_todo` as work progresses
3. Check `todo_stats` for a quick overview of how much is open
4. Periodically `delete_completed` to keep the list small

## Tool Categories
- **Creating and editing**: create_todo, update_todo, toggle_todo
- **Browsing**: list_todos, get_todo, todo_stats
- **Removing**: delete_todo, delete_completed"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: TallyMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Tally MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    // Set up signal handlers for graceful shutdown
    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
