//! Task data model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::{Result, TaskError};

/// Which of the two lists a task lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
}

impl TaskStatus {
    /// Parse the status token of a task-file record. Anything other than
    /// `completed` is treated as pending.
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => Self::Completed,
            _ => Self::Pending,
        }
    }

    /// Token written to the task file
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Trim task text and reject values that cannot be stored as one record.
pub fn normalize_text(text: &str) -> Result<&str> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TaskError::EmptyTask);
    }
    if text.contains(['\n', '\r']) {
        return Err(TaskError::MultiLine);
    }
    Ok(text)
}

/// The two ordered task sequences.
///
/// Tasks are identified by their text only. When the same text appears more
/// than once, every lookup acts on the first match, pending before completed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskLists {
    pub pending: Vec<String>,
    pub completed: Vec<String>,
}

impl TaskLists {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty() && self.completed.is_empty()
    }

    /// (pending, completed)
    pub fn counts(&self) -> (usize, usize) {
        (self.pending.len(), self.completed.len())
    }

    pub fn status_of(&self, text: &str) -> Option<TaskStatus> {
        if self.pending.iter().any(|t| t == text) {
            Some(TaskStatus::Pending)
        } else if self.completed.iter().any(|t| t == text) {
            Some(TaskStatus::Completed)
        } else {
            None
        }
    }

    pub fn list(&self, status: TaskStatus) -> &[String] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Insert at the front of the pending list.
    pub fn add(&mut self, text: &str) -> Result<()> {
        let text = normalize_text(text)?;
        self.pending.insert(0, text.to_string());
        Ok(())
    }

    /// Remove the first match. Returns false when the task is in neither list.
    pub fn delete(&mut self, text: &str) -> bool {
        if let Some(idx) = position(&self.pending, text) {
            self.pending.remove(idx);
            true
        } else if let Some(idx) = position(&self.completed, text) {
            self.completed.remove(idx);
            true
        } else {
            false
        }
    }

    /// Replace the first match in place, keeping its list and position.
    pub fn replace(&mut self, text: &str, new_text: &str) -> bool {
        let slot = if let Some(idx) = position(&self.pending, text) {
            &mut self.pending[idx]
        } else if let Some(idx) = position(&self.completed, text) {
            &mut self.completed[idx]
        } else {
            return false;
        };
        *slot = new_text.to_string();
        true
    }

    /// Move a task to the other list. Completing appends to the end of the
    /// completed list; reopening puts the task at the front of pending.
    /// Returns the new status, or `None` if the task was not found.
    pub fn toggle(&mut self, text: &str) -> Option<TaskStatus> {
        if let Some(idx) = position(&self.pending, text) {
            let task = self.pending.remove(idx);
            self.completed.push(task);
            Some(TaskStatus::Completed)
        } else if let Some(idx) = position(&self.completed, text) {
            let task = self.completed.remove(idx);
            self.pending.insert(0, task);
            Some(TaskStatus::Pending)
        } else {
            None
        }
    }
}

fn position(list: &[String], text: &str) -> Option<usize> {
    list.iter().position(|t| t == text)
}
