//! # Tasksync
//!
//! A terminal client for a remote task list. Every command mutates the
//! local view optimistically, talks to the HTTP task service, and rolls
//! back cleanly if the call fails.
//!
//! ## Usage
//!
//! Point the client at your task service with `--url` or the `TASKS_API`
//! environment variable:
//!
//! ```bash
//! export TASKS_API=https://example.com/api/task
//!
//! # List tasks (oldest first; --reverse for newest first)
//! tasksync list
//! tasksync list --reverse
//!
//! # Add a task
//! tasksync add "Write report"
//!
//! # Toggle completion
//! tasksync complete 3
//!
//! # Rename
//! tasksync edit 3 "Write quarterly report"
//!
//! # Delete (a task already gone on the server counts as deleted)
//! tasksync remove 3
//! ```
//!
//! Set `RUST_LOG=tasksync=debug` to see request-level logging.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;

use tasksync::commands::*;
use tasksync::models::TaskId;

#[derive(Parser)]
#[command(name = "tasksync")]
#[command(about = "Task list client for a remote CRUD service", long_about = None)]
struct Cli {
    /// Base URL of the task service (falls back to the TASKS_API env var)
    #[arg(short, long, global = true)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List tasks
    List {
        /// Show newest tasks first
        #[arg(short, long)]
        reverse: bool,
    },
    /// Add a new task
    Add {
        /// Task name (quoted if it has spaces)
        name: String,
    },
    /// Toggle a task's completion state
    Complete {
        id: TaskId,
    },
    /// Rename a task
    Edit {
        id: TaskId,
        /// New task name
        name: String,
    },
    /// Remove a task
    Remove {
        id: TaskId,
    },
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List { reverse } => cmd_list(cli.url, reverse).await,
        Commands::Add { name } => cmd_add(cli.url, name).await,
        Commands::Complete { id } => cmd_complete(cli.url, id).await,
        Commands::Edit { id, name } => cmd_edit(cli.url, id, name).await,
        Commands::Remove { id } => cmd_remove(cli.url, id).await,
        Commands::Completions { shell } => {
            let shell_enum = match shell.as_str() {
                "bash" => Shell::Bash,
                "zsh" => Shell::Zsh,
                "fish" => Shell::Fish,
                "powershell" => Shell::PowerShell,
                "elvish" => Shell::Elvish,
                _ => {
                    eprintln!("Unsupported shell: {}", shell);
                    return;
                }
            };
            let mut cmd = Cli::command();
            generate(shell_enum, &mut cmd, "tasksync", &mut io::stdout());
        }
    }
}
