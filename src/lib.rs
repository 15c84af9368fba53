//! todo-tracker library - task lists, persistence, localization and the
//! terminal front ends built on them

pub mod cli;
pub mod config;
pub mod i18n;
pub mod task;
pub mod tui;
