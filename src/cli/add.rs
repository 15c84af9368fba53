//! `todo add` command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::{open_store, summary_line, task_error};

#[derive(Args)]
pub struct AddArgs {
    /// Task text
    pub text: String,
}

pub fn run(file: Option<PathBuf>, args: AddArgs) -> Result<()> {
    let (config, mut store) = open_store(file)?;
    let language = config.language;

    store
        .add(&args.text)
        .map_err(|e| task_error(language, e))?;

    println!("Added: {}", args.text.trim());
    println!("{}", summary_line(language, &store));
    Ok(())
}
