use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Raised by add/edit validation; the display string doubles as the
    /// localization key shown to the user.
    #[error("You must enter a task.")]
    EmptyTask,

    #[error("Task text cannot contain line breaks.")]
    MultiLine,

    #[error("Failed to access task file {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl TaskError {
    pub fn is_validation(&self) -> bool {
        matches!(self, TaskError::EmptyTask | TaskError::MultiLine)
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TaskError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TaskError>;
