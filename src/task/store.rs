//! Task store - in-memory lists mirrored to the task file

use std::path::{Path, PathBuf};
use tracing::debug;

use super::error::Result;
use super::format;
use super::model::{normalize_text, TaskLists, TaskStatus};

/// Owns the pending/completed lists and persists them after every mutation.
///
/// Mutations that name a task which is in neither list are no-ops, not
/// errors; they report `false`/`None` and still rewrite the file.
pub struct TaskStore {
    path: PathBuf,
    lists: TaskLists,
}

impl TaskStore {
    /// Create the task file if needed and load it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        format::ensure_file(&path)?;
        let mut store = Self {
            path,
            lists: TaskLists::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Build a store around existing lists without touching the disk.
    pub fn with_lists(path: impl Into<PathBuf>, lists: TaskLists) -> Self {
        Self {
            path: path.into(),
            lists,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn lists(&self) -> &TaskLists {
        &self.lists
    }

    pub fn pending(&self) -> &[String] {
        &self.lists.pending
    }

    pub fn completed(&self) -> &[String] {
        &self.lists.completed
    }

    pub fn counts(&self) -> (usize, usize) {
        self.lists.counts()
    }

    pub fn status_of(&self, text: &str) -> Option<TaskStatus> {
        self.lists.status_of(text)
    }

    /// Replace the in-memory lists with the file content.
    pub fn load(&mut self) -> Result<&TaskLists> {
        self.lists = format::read_file(&self.path)?;
        let (pending, completed) = self.lists.counts();
        debug!(
            "Loaded {} pending, {} completed from {}",
            pending,
            completed,
            self.path.display()
        );
        Ok(&self.lists)
    }

    pub fn save(&self) -> Result<()> {
        format::write_file(&self.path, &self.lists)?;
        debug!("Saved tasks to {}", self.path.display());
        Ok(())
    }

    /// Add a task to the front of the pending list. Blank text is a
    /// validation error and leaves the lists unchanged.
    pub fn add(&mut self, text: &str) -> Result<()> {
        self.lists.add(text)?;
        debug!("Added task: {}", text.trim());
        self.save()
    }

    /// Returns whether the task was found.
    pub fn delete(&mut self, text: &str) -> Result<bool> {
        let found = self.lists.delete(text);
        debug!("Delete '{}': found={}", text, found);
        self.save()?;
        Ok(found)
    }

    /// Replace a task's text in place. Blank `new_text` is ignored entirely
    /// (nothing is written). Returns whether a task was renamed.
    pub fn edit(&mut self, text: &str, new_text: &str) -> Result<bool> {
        if new_text.trim().is_empty() {
            return Ok(false);
        }
        let new_text = normalize_text(new_text)?;
        let found = self.lists.replace(text, new_text);
        debug!("Edit '{}' -> '{}': found={}", text, new_text, found);
        self.save()?;
        Ok(found)
    }

    /// Move a task between the lists. Returns its new status, or `None` if
    /// the task was not found.
    pub fn toggle(&mut self, text: &str) -> Result<Option<TaskStatus>> {
        let status = self.lists.toggle(text);
        debug!("Toggle '{}': {:?}", text, status);
        self.save()?;
        Ok(status)
    }
}
