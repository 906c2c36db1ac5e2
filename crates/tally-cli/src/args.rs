use std::fmt;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tally_core::params as core;

/// Main command-line interface for the Tally todo tracking tool
///
/// Tally keeps a single flat list of todos with statuses, priorities, due
/// dates, and tags. It provides a command-line interface for creating,
/// updating, and browsing todos, along with an MCP (Model Context Protocol)
/// server mode for integration with AI assistants.
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tally/tally.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Tally CLI
///
/// Running without a command lists todos with default settings. Every
/// command that takes an ID addresses exactly one todo; `clear` is the only
/// bulk operation.
#[derive(Subcommand)]
pub enum Commands {
    /// Add a new todo
    #[command(alias = "a")]
    Add(AddArgs),
    /// List todos with optional filters and paging
    #[command(alias = "ls")]
    List(ListArgs),
    /// Show full details of a todo
    #[command(alias = "s")]
    Show(IdArg),
    /// Update fields of a todo
    #[command(alias = "u")]
    Update(UpdateArgs),
    /// Toggle a todo between completed and not completed
    #[command(alias = "t")]
    Toggle(IdArg),
    /// Delete a todo
    #[command(alias = "rm")]
    Delete(IdArg),
    /// Delete all completed todos
    Clear,
    /// Show aggregate statistics
    Stats,
    /// Start the MCP server
    Serve,
}

/// Status values accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StatusArg {
    Todo,
    InProgress,
    Completed,
}

impl fmt::Display for StatusArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusArg::Todo => write!(f, "todo"),
            StatusArg::InProgress => write!(f, "in_progress"),
            StatusArg::Completed => write!(f, "completed"),
        }
    }
}

/// Priority values accepted on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Medium => write!(f, "medium"),
            PriorityArg::High => write!(f, "high"),
            PriorityArg::Urgent => write!(f, "urgent"),
        }
    }
}

/// Arguments for adding a new todo
#[derive(clap::Args)]
pub struct AddArgs {
    /// Title of the todo
    pub title: String,

    /// Optional detailed description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Priority of the todo (defaults to medium)
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,

    /// Due date, RFC 3339 or a calendar date like 2025-06-01
    #[arg(long)]
    pub due: Option<String>,

    /// Tag to attach; repeat for multiple tags
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

impl From<AddArgs> for core::CreateTodo {
    fn from(args: AddArgs) -> Self {
        Self {
            title: args.title,
            description: args.description,
            priority: args.priority.map(|p| p.to_string()),
            due: args.due,
            tags: args.tags,
        }
    }
}

/// Arguments for listing todos
#[derive(clap::Args)]
pub struct ListArgs {
    /// Only todos with this status
    #[arg(long)]
    pub status: Option<StatusArg>,

    /// Only completed todos
    #[arg(long, conflicts_with = "pending")]
    pub completed: bool,

    /// Only todos not yet completed
    #[arg(long)]
    pub pending: bool,

    /// Only todos with this priority
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,

    /// Only todos carrying this tag; repeat to match any of several
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,

    /// Case-insensitive search against title and description
    #[arg(long)]
    pub search: Option<String>,

    /// Only todos due at or before this date
    #[arg(long)]
    pub due_before: Option<String>,

    /// Only todos due at or after this date
    #[arg(long)]
    pub due_after: Option<String>,

    /// Page number, starting at 1
    #[arg(long)]
    pub page: Option<u32>,

    /// Todos per page (defaults to 10)
    #[arg(long)]
    pub limit: Option<u32>,

    /// Sort field: createdAt, updatedAt, dueDate, priority, or title
    #[arg(long)]
    pub sort_by: Option<String>,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,
}

impl From<ListArgs> for core::ListTodos {
    fn from(args: ListArgs) -> Self {
        let completed = if args.completed {
            Some(true)
        } else if args.pending {
            Some(false)
        } else {
            None
        };

        Self {
            status: args.status.map(|s| s.to_string()),
            priority: args.priority.map(|p| p.to_string()),
            completed,
            tags: args.tags,
            search: args.search,
            due_before: args.due_before,
            due_after: args.due_after,
            page: args.page,
            limit: args.limit,
            sort_by: args.sort_by,
            sort_order: args.asc.then(|| "asc".to_string()),
        }
    }
}

/// Arguments for commands addressing a single todo by ID
#[derive(clap::Args)]
pub struct IdArg {
    /// ID of the todo
    pub id: u64,
}

impl From<IdArg> for core::Id {
    fn from(args: IdArg) -> Self {
        Self { id: args.id }
    }
}

/// Arguments for updating an existing todo
#[derive(clap::Args)]
pub struct UpdateArgs {
    /// ID of the todo
    pub id: u64,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New detailed description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<StatusArg>,

    /// New priority
    #[arg(short, long)]
    pub priority: Option<PriorityArg>,

    /// Set or clear the completion flag (true or false)
    #[arg(long)]
    pub completed: Option<bool>,

    /// New due date, RFC 3339 or a calendar date
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,

    /// Remove the due date
    #[arg(long)]
    pub clear_due: bool,

    /// Replacement tag; repeat for multiple, replaces all existing tags
    #[arg(short, long = "tag", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Remove all tags
    #[arg(long)]
    pub clear_tags: bool,
}

impl From<UpdateArgs> for core::UpdateTodo {
    fn from(args: UpdateArgs) -> Self {
        // An empty -t list means "leave tags alone"; clearing is explicit.
        let tags = if args.clear_tags {
            Some(Vec::new())
        } else if args.tags.is_empty() {
            None
        } else {
            Some(args.tags)
        };

        Self {
            id: args.id,
            title: args.title,
            description: args.description,
            status: args.status.map(|s| s.to_string()),
            priority: args.priority.map(|p| p.to_string()),
            completed: args.completed,
            due: args.due,
            clear_due: args.clear_due,
            tags,
        }
    }
}
