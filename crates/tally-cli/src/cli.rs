//! Command execution for the Tally CLI
//!
//! This module runs parsed commands against a [`Tracker`] and renders the
//! results through the terminal renderer. It is also the layer that decides
//! how a missing todo surfaces to the user: core lookups return `Ok(None)`,
//! and the handlers here turn that absence into
//! [`TrackerError::TodoNotFound`] so the process exits non-zero with a clear
//! message instead of printing nothing.
//!
//! Argument structures convert into core parameter types before reaching
//! this module (see `args.rs`), so every method takes the same parameter
//! structs the MCP server uses.

use anyhow::Result;
use log::debug;
use tally_core::{
    params as core,
    store::{SqliteStore, Store},
    Tracker, TrackerError,
};

use crate::renderer::TerminalRenderer;

/// Executes commands against the tracker and renders the results
pub struct Cli<S: Store = SqliteStore> {
    tracker: Tracker<S>,
    renderer: TerminalRenderer,
}

impl<S: Store> Cli<S> {
    /// Create a new command executor
    pub fn new(tracker: Tracker<S>, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    /// Add a new todo and print the created record
    pub async fn add_todo(&self, params: &core::CreateTodo) -> Result<()> {
        debug!("add_todo: {:?}", params);

        let result = self.tracker.create_todo_result(params).await?;
        self.renderer.render(&result.to_string())
    }

    /// List todos matching the given filters, one page at a time
    pub async fn list_todos(&self, params: &core::ListTodos) -> Result<()> {
        debug!("list_todos: {:?}", params);

        let page = self.tracker.list_todos_page(params).await?;
        self.renderer.render(&page.to_string())
    }

    /// Show the full details of a single todo
    pub async fn show_todo(&self, params: &core::Id) -> Result<()> {
        debug!("show_todo: {:?}", params);

        let todo = self
            .tracker
            .show_todo(params)
            .await?
            .ok_or(TrackerError::TodoNotFound { id: params.id })?;
        self.renderer.render(&todo.to_string())
    }

    /// Update fields of a todo and print the change summary
    pub async fn update_todo(&self, params: &core::UpdateTodo) -> Result<()> {
        debug!("update_todo: {:?}", params);

        let result = self
            .tracker
            .update_todo_result(params)
            .await?
            .ok_or(TrackerError::TodoNotFound { id: params.id })?;
        self.renderer.render(&result.to_string())
    }

    /// Flip a todo between completed and not completed
    pub async fn toggle_todo(&self, params: &core::Id) -> Result<()> {
        debug!("toggle_todo: {:?}", params);

        let result = self
            .tracker
            .toggle_todo_result(params)
            .await?
            .ok_or(TrackerError::TodoNotFound { id: params.id })?;
        self.renderer.render(&result.to_string())
    }

    /// Delete a todo and print what was removed
    pub async fn delete_todo(&self, params: &core::Id) -> Result<()> {
        debug!("delete_todo: {:?}", params);

        let result = self
            .tracker
            .delete_todo_result(params)
            .await?
            .ok_or(TrackerError::TodoNotFound { id: params.id })?;
        self.renderer.render(&result.to_string())
    }

    /// Delete every completed todo and report how many went away
    pub async fn clear_completed(&self) -> Result<()> {
        debug!("clear_completed");

        let result = self.tracker.delete_completed_result().await?;
        self.renderer.render(&result.to_string())
    }

    /// Print aggregate statistics over the whole collection
    pub async fn show_stats(&self) -> Result<()> {
        debug!("show_stats");

        let stats = self.tracker.stats().await?;
        self.renderer.render(&stats.to_string())
    }
}
