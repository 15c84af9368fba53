//! `todo toggle`, `todo edit` and `todo delete` command implementations

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{ensure_not_blank, open_store, summary_line, task_error};
use crate::task::TaskStatus;

#[derive(Args)]
pub struct TaskArgs {
    /// Task text, matched exactly
    pub text: String,
}

#[derive(Args)]
pub struct EditArgs {
    /// Current task text, matched exactly
    pub text: String,

    /// Replacement text
    pub new_text: String,
}

pub fn run_toggle(file: Option<PathBuf>, args: TaskArgs) -> Result<()> {
    let (config, mut store) = open_store(file)?;
    let text = args.text.trim();

    match store.toggle(text)? {
        Some(TaskStatus::Completed) => println!("Resolved: {}", text),
        Some(TaskStatus::Pending) => println!("Reopened: {}", text),
        None => println!("Task not found: {}", text),
    }
    println!("{}", summary_line(config.language, &store));
    Ok(())
}

pub fn run_edit(file: Option<PathBuf>, args: EditArgs) -> Result<()> {
    let (config, mut store) = open_store(file)?;
    let language = config.language;
    ensure_not_blank(language, &args.new_text)?;

    let text = args.text.trim();
    let found = store
        .edit(text, &args.new_text)
        .map_err(|e| task_error(language, e))?;

    if found {
        println!("Edited: {} -> {}", text, args.new_text.trim());
    } else {
        println!("Task not found: {}", text);
    }
    Ok(())
}

pub fn run_delete(file: Option<PathBuf>, args: TaskArgs) -> Result<()> {
    let (config, mut store) = open_store(file)?;

    let text = args.text.trim();
    if store.delete(text)? {
        println!("Deleted: {}", text);
    } else {
        println!("Task not found: {}", text);
    }
    println!("{}", summary_line(config.language, &store));
    Ok(())
}
