//! Task file reader and writer
//!
//! One record per line: `<task text>,<pending|completed>`. The status is
//! whatever follows the right-most comma, so task text may itself contain
//! commas.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use super::error::{Result, TaskError};
use super::model::{TaskLists, TaskStatus};

/// Parse task-file content. Lines without a comma are skipped.
pub fn parse(content: &str) -> TaskLists {
    let mut lists = TaskLists::new();

    for line in content.lines() {
        let Some((text, status)) = line.trim().rsplit_once(',') else {
            continue;
        };

        match TaskStatus::parse(status) {
            TaskStatus::Completed => lists.completed.push(text.to_string()),
            TaskStatus::Pending => lists.pending.push(text.to_string()),
        }
    }

    lists
}

/// Render all pending records followed by all completed records.
pub fn render(lists: &TaskLists) -> String {
    let mut output = String::new();

    for (status, tasks) in [
        (TaskStatus::Pending, &lists.pending),
        (TaskStatus::Completed, &lists.completed),
    ] {
        for task in tasks {
            output.push_str(task);
            output.push(',');
            output.push_str(status.label());
            output.push('\n');
        }
    }

    output
}

/// Read a task file. A missing file reads as empty lists.
pub fn read_file(path: &Path) -> Result<TaskLists> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(parse(&content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(TaskLists::new()),
        Err(e) => Err(TaskError::io(path, e)),
    }
}

/// Replace the task file with the rendered lists.
///
/// The content goes to a temporary file in the same directory first and is
/// renamed over the target, so a crash mid-write leaves the previous file.
/// A symlinked task file is written through to its target, and an existing
/// file keeps its permissions.
pub fn write_file(path: &Path, lists: &TaskLists) -> Result<()> {
    let (target, permissions) = match fs::canonicalize(path) {
        Ok(resolved) => {
            let permissions = fs::metadata(&resolved)
                .ok()
                .filter(|meta| meta.is_file())
                .map(|meta| meta.permissions());
            (resolved, permissions)
        }
        Err(_) => (path.to_path_buf(), None),
    };

    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| TaskError::io(dir, e))?;
    tmp.write_all(render(lists).as_bytes())
        .map_err(|e| TaskError::io(tmp.path(), e))?;
    if let Some(permissions) = permissions {
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| TaskError::io(tmp.path(), e))?;
    }
    tmp.persist(&target)
        .map_err(|e| TaskError::io(&target, e.error))?;
    Ok(())
}

/// Create an empty task file (and its directory) if none exists yet.
pub fn ensure_file(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| TaskError::io(parent, e))?;
        }
    }
    fs::write(path, "").map_err(|e| TaskError::io(path, e))
}
