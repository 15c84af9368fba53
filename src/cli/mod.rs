//! CLI command implementations

pub mod add;
pub mod definition;
pub mod language;
pub mod list;
pub mod task;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};
use std::path::PathBuf;
use tracing::warn;

use crate::config::Config;
use crate::i18n::{self, Language};
use crate::task::{TaskError, TaskStore};

/// Load the config and open the task file it points to, unless `file`
/// overrides it. With an explicit file, an unreadable config only costs the
/// language setting.
pub fn open_store(file: Option<PathBuf>) -> Result<(Config, TaskStore)> {
    let (config, path) = match file {
        Some(path) => {
            let config = Config::load().unwrap_or_else(|e| {
                warn!("Ignoring config: {:#}", e);
                Config::default()
            });
            (config, path)
        }
        None => {
            let config = Config::load()?;
            let path = config.tasks_path()?;
            (config, path)
        }
    };
    let store = TaskStore::open(path)?;
    Ok((config, store))
}

/// Turn a store error into a CLI error, localizing validation messages.
pub(crate) fn task_error(language: Language, err: TaskError) -> anyhow::Error {
    if err.is_validation() {
        anyhow::anyhow!("{}", language.tr(&err.to_string()))
    } else {
        err.into()
    }
}

/// One-line summary, e.g. `Pending Tasks (2) | Resolved Tasks (1)`
pub fn summary_line(language: Language, store: &TaskStore) -> String {
    let (pending, completed) = store.counts();
    format!(
        "{} | {}",
        language.counted(i18n::PENDING_TASKS, pending),
        language.counted(i18n::RESOLVED_TASKS, completed)
    )
}

pub(crate) fn ensure_not_blank(language: Language, text: &str) -> Result<()> {
    if text.trim().is_empty() {
        bail!("{}", language.tr(i18n::MUST_ENTER_TASK));
    }
    Ok(())
}
