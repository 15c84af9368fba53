//! Task operations for HomeView (add, toggle, edit, delete, language)

use tracing::{debug, error, warn};
use tui_input::Input;

use super::{HomeView, Pane};
use crate::config::save_config;
use crate::i18n::{self, Language};
use crate::task::{TaskError, TaskStatus};
use crate::tui::dialogs::InfoDialog;

impl HomeView {
    pub(super) fn add_task(&mut self) {
        let text = self.add_input.value().to_string();
        match self.store.add(&text) {
            Ok(()) => {
                self.add_input = Input::default();
                self.focus = Pane::Pending;
                self.pending_cursor = 0;
            }
            Err(e) => {
                // A failed save still leaves the task in the pending list
                if !e.is_validation() {
                    self.add_input = Input::default();
                }
                self.report(e, "Failed to add task");
            }
        }
        self.clamp_cursors();
    }

    pub(super) fn toggle_selected(&mut self) {
        let Some(text) = self.selected_task().map(str::to_string) else {
            return;
        };
        match self.store.toggle(&text) {
            Ok(Some(TaskStatus::Completed)) => debug!("Resolved '{}'", text),
            Ok(Some(TaskStatus::Pending)) => debug!("Reopened '{}'", text),
            Ok(None) => warn!("Task '{}' vanished before it could be toggled", text),
            Err(e) => self.report(e, "Failed to toggle task"),
        }
        self.clamp_cursors();
    }

    pub(super) fn edit_task(&mut self, text: &str, new_text: &str) {
        if let Err(e) = self.store.edit(text, new_text) {
            self.report(e, "Failed to edit task");
        }
        self.clamp_cursors();
    }

    pub(super) fn delete_task(&mut self, text: &str) {
        if let Err(e) = self.store.delete(text) {
            self.report(e, "Failed to delete task");
        }
        self.clamp_cursors();
    }

    pub(super) fn reload(&mut self) {
        if let Err(e) = self.store.load() {
            self.report(e, "Failed to reload tasks");
        }
        self.clamp_cursors();
    }

    /// Switch the display language and remember it for next time.
    pub(super) fn set_language(&mut self, language: Language) {
        if language == self.config.language {
            return;
        }
        self.config.language = language;
        if let Err(e) = save_config(&self.config) {
            warn!("Failed to save language setting: {}", e);
        }
    }

    /// Validation problems become a localized warning. Anything else is a
    /// storage failure: it is logged and shown, and the in-memory lists
    /// keep the change.
    fn report(&mut self, err: TaskError, context: &str) {
        let lang = self.language();
        let message = if err.is_validation() {
            lang.tr(&err.to_string()).to_string()
        } else {
            error!("{}: {}", context, err);
            err.to_string()
        };
        self.info_dialog = Some(InfoDialog::new(lang.tr(i18n::WARNING), &message));
    }
}
