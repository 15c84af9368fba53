//! Command-line definition

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use super::add::AddArgs;
use super::language::LangArgs;
use super::list::ListArgs;
use super::task::{EditArgs, TaskArgs};

/// Track pending and resolved tasks in a plain-text file
#[derive(Parser)]
#[command(name = "todo", version)]
pub struct Cli {
    /// Task file to use instead of the configured one
    #[arg(short, long, global = true, env = "TODO_TRACKER_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a task to the top of the pending list
    Add(AddArgs),

    /// List pending and resolved tasks
    #[command(alias = "ls")]
    List(ListArgs),

    /// Resolve a pending task, or reopen a resolved one
    Toggle(TaskArgs),

    /// Change the text of a task
    Edit(EditArgs),

    /// Delete a task
    #[command(alias = "rm")]
    Delete(TaskArgs),

    /// Show or set the display language
    Lang(LangArgs),

    /// Generate shell completions
    Completion(CompletionArgs),
}

#[derive(Args)]
pub struct CompletionArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
