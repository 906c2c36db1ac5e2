//! Tally CLI Application
//!
//! Command-line interface for the tally todo tracking tool.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TallyMcpServer};
use renderer::TerminalRenderer;
use tally_core::{params::ListTodos, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Tally started");

    match command {
        Some(Add(args)) => Cli::new(tracker, renderer).add_todo(&args.into()).await,
        Some(List(args)) => Cli::new(tracker, renderer).list_todos(&args.into()).await,
        Some(Show(args)) => Cli::new(tracker, renderer).show_todo(&args.into()).await,
        Some(Update(args)) => Cli::new(tracker, renderer).update_todo(&args.into()).await,
        Some(Toggle(args)) => Cli::new(tracker, renderer).toggle_todo(&args.into()).await,
        Some(Delete(args)) => Cli::new(tracker, renderer).delete_todo(&args.into()).await,
        Some(Clear) => Cli::new(tracker, renderer).clear_completed().await,
        Some(Stats) => Cli::new(tracker, renderer).show_stats().await,
        Some(Serve) => {
            info!("Starting Tally MCP server");
            run_stdio_server(TallyMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .list_todos(&ListTodos::default())
                .await
        }
    }
}
