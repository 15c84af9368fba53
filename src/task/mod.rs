//! Task tracking
//!
//! Two ordered lists of task text (pending, completed) persisted to a
//! line-oriented text file after every change:
//! - `model`: the lists and their in-memory operations
//! - `format`: the `<text>,<status>` file format
//! - `store`: lists bound to a file, saving on every mutation

mod error;
pub mod format;
pub mod model;
mod store;

pub use error::{Result, TaskError};
pub use model::{TaskLists, TaskStatus};
pub use store::TaskStore;
