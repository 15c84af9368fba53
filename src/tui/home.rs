//! Home view - pending and resolved task panes with the add bar

mod operations;

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::app::Action;
use super::components::{render_text_field, truncate_to_width, HelpOverlay};
use super::dialogs::{ConfirmDialog, DialogResult, EditDialog, InfoDialog, LanguageDialog};
use super::styles::Theme;
use crate::config::Config;
use crate::i18n::{self, Language};
use crate::task::{TaskStatus, TaskStore};

/// The list that has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Pending,
    Resolved,
}

impl Pane {
    pub fn status(self) -> TaskStatus {
        match self {
            Pane::Pending => TaskStatus::Pending,
            Pane::Resolved => TaskStatus::Completed,
        }
    }

    fn other(self) -> Self {
        match self {
            Pane::Pending => Pane::Resolved,
            Pane::Resolved => Pane::Pending,
        }
    }
}

pub struct HomeView {
    store: TaskStore,
    config: Config,

    // UI state
    focus: Pane,
    pending_cursor: usize,
    resolved_cursor: usize,
    add_input: Input,
    add_active: bool,

    // Dialogs
    show_help: bool,
    edit_dialog: Option<EditDialog>,
    confirm_dialog: Option<ConfirmDialog>,
    info_dialog: Option<InfoDialog>,
    language_dialog: Option<LanguageDialog>,
}

impl HomeView {
    pub fn new(store: TaskStore, config: Config) -> Self {
        Self {
            store,
            config,
            focus: Pane::Pending,
            pending_cursor: 0,
            resolved_cursor: 0,
            add_input: Input::default(),
            add_active: false,
            show_help: false,
            edit_dialog: None,
            confirm_dialog: None,
            info_dialog: None,
            language_dialog: None,
        }
    }

    pub fn language(&self) -> Language {
        self.config.language
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// True while something other than the task panes owns the keyboard.
    pub fn has_dialog(&self) -> bool {
        self.add_active
            || self.show_help
            || self.edit_dialog.is_some()
            || self.confirm_dialog.is_some()
            || self.info_dialog.is_some()
            || self.language_dialog.is_some()
    }

    fn cursor(&self) -> usize {
        match self.focus {
            Pane::Pending => self.pending_cursor,
            Pane::Resolved => self.resolved_cursor,
        }
    }

    fn cursor_mut(&mut self) -> &mut usize {
        match self.focus {
            Pane::Pending => &mut self.pending_cursor,
            Pane::Resolved => &mut self.resolved_cursor,
        }
    }

    fn focused_tasks(&self) -> &[String] {
        self.store.lists().list(self.focus.status())
    }

    pub fn selected_task(&self) -> Option<&str> {
        self.focused_tasks().get(self.cursor()).map(String::as_str)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Warnings sit on top of everything else
        if let Some(dialog) = &mut self.info_dialog {
            if let DialogResult::Cancel = dialog.handle_key(key) {
                self.info_dialog = None;
            }
            return None;
        }

        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.language_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.language_dialog = None,
                DialogResult::Submit(language) => {
                    self.language_dialog = None;
                    self.set_language(language);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.edit_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.edit_dialog = None,
                DialogResult::Submit(request) => {
                    self.edit_dialog = None;
                    self.edit_task(&request.original, &request.new_text);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.confirm_dialog = None,
                DialogResult::Submit(text) => {
                    self.confirm_dialog = None;
                    self.delete_task(&text);
                }
            }
            return None;
        }

        if self.add_active {
            match key.code {
                KeyCode::Esc => self.add_active = false,
                KeyCode::Enter => self.add_task(),
                _ => {
                    self.add_input.handle_event(&Event::Key(key));
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('a') | KeyCode::Char('i') => self.add_active = true,
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                self.focus = self.focus.other();
            }
            KeyCode::Char('h') => self.focus = Pane::Pending,
            KeyCode::Char('l') => self.focus = Pane::Resolved,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => *self.cursor_mut() = 0,
            KeyCode::End | KeyCode::Char('G') => {
                let len = self.focused_tasks().len();
                *self.cursor_mut() = len.saturating_sub(1);
            }
            KeyCode::Char(' ') | KeyCode::Char('x') => self.toggle_selected(),
            KeyCode::Enter | KeyCode::Char('e') => {
                if let Some(text) = self.selected_task() {
                    self.edit_dialog = Some(EditDialog::new(text, self.language()));
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(text) = self.selected_task() {
                    let lang = self.language();
                    self.confirm_dialog = Some(ConfirmDialog::new(
                        lang.tr(i18n::DELETE_TASK),
                        lang.tr(i18n::DELETE_CONFIRM),
                        text,
                    ));
                }
            }
            KeyCode::Char('L') => {
                self.language_dialog = Some(LanguageDialog::new(self.language()));
            }
            KeyCode::Char('r') | KeyCode::F(5) => self.reload(),
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = self.focused_tasks().len();
        if len == 0 {
            return;
        }

        let cursor = self.cursor();
        let new_cursor = if delta < 0 {
            cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (cursor + delta as usize).min(len - 1)
        };
        *self.cursor_mut() = new_cursor;
    }

    /// Keep both cursors inside their lists after a mutation.
    fn clamp_cursors(&mut self) {
        let (pending, completed) = self.store.counts();
        self.pending_cursor = self.pending_cursor.min(pending.saturating_sub(1));
        self.resolved_cursor = self.resolved_cursor.min(completed.saturating_sub(1));
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        frame.render_widget(
            Block::default().style(Style::default().bg(theme.background)),
            area,
        );

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(area);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);

        self.render_add_bar(frame, chunks[0], theme);
        self.render_pane(frame, panes[0], Pane::Pending, theme);
        self.render_pane(frame, panes[1], Pane::Resolved, theme);
        self.render_status_bar(frame, chunks[2], theme);

        // Render dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some(dialog) = &self.edit_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.language_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.info_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_add_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.add_active {
            theme.accent
        } else {
            theme.border
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", self.language().tr(i18n::ADD_TASK)))
            .title_style(Style::default().fg(theme.accent).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        render_text_field(
            frame,
            inner,
            "+",
            &self.add_input,
            self.add_active,
            Some("press 'a' to type a new task"),
            theme,
        );
    }

    fn render_pane(&self, frame: &mut Frame, area: Rect, pane: Pane, theme: &Theme) {
        let lang = self.language();
        let tasks = self.store.lists().list(pane.status());
        let (title, color, cursor) = match pane {
            Pane::Pending => (i18n::PENDING_TASKS, theme.pending, self.pending_cursor),
            Pane::Resolved => (i18n::RESOLVED_TASKS, theme.resolved, self.resolved_cursor),
        };
        let focused = self.focus == pane && !self.add_active;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused { color } else { theme.border }))
            .title(format!(" {} ", lang.counted(title, tasks.len())))
            .title_style(Style::default().fg(color).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if tasks.is_empty() {
            let empty = Paragraph::new(format!("({})", lang.tr(i18n::NO_TASKS)))
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center);
            frame.render_widget(empty, inner);
            return;
        }

        let text_width = (inner.width as usize).saturating_sub(2);
        let items: Vec<ListItem> = tasks
            .iter()
            .map(|task| {
                let (icon, style) = match pane {
                    Pane::Pending => ("○", Style::default().fg(theme.text)),
                    Pane::Resolved => ("✓", Style::default().fg(theme.resolved_text).italic()),
                };
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{} ", icon), Style::default().fg(color)),
                    Span::styled(truncate_to_width(task, text_width), style),
                ]))
            })
            .collect();

        let list = List::new(items).highlight_style(Style::default().bg(theme.selection).bold());
        let mut state = ListState::default().with_selected(focused.then_some(cursor));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let lang = self.language();
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let hints: Vec<(&str, String)> = if self.add_active {
            vec![
                ("Enter", lang.tr(i18n::ADD_TASK).to_string()),
                ("Esc", "Cancel".to_string()),
            ]
        } else {
            vec![
                ("j/k", "Navigate".to_string()),
                ("Tab", "Switch".to_string()),
                ("Space", "Resolve".to_string()),
                ("a", lang.tr(i18n::ADD_TASK).to_string()),
                ("e", lang.tr(i18n::EDIT).to_string()),
                ("d", lang.tr(i18n::DELETE).to_string()),
                ("L", lang.tr(i18n::LANGUAGE).to_string()),
                ("?", "Help".to_string()),
                ("q", "Quit".to_string()),
            ]
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
