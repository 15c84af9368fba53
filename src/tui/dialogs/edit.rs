//! Edit task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::i18n::{self, Language};
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct EditDialog {
    original: String,
    input: Input,
    language: Language,
}

/// Submitted by [`EditDialog`]: the task to change and its new text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditRequest {
    pub original: String,
    pub new_text: String,
}

impl EditDialog {
    /// The input starts out holding the current text.
    pub fn new(current: &str, language: Language) -> Self {
        Self {
            original: current.to_string(),
            input: Input::new(current.to_string()),
            language,
        }
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Blank input cancels, leaving the task untouched.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<EditRequest> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => {
                if self.input.value().trim().is_empty() {
                    DialogResult::Cancel
                } else {
                    DialogResult::Submit(EditRequest {
                        original: self.original.clone(),
                        new_text: self.input.value().to_string(),
                    })
                }
            }
            _ => {
                self.input.handle_event(&Event::Key(key));
                DialogResult::Continue
            }
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 60, 8);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.language.tr(i18n::EDIT_TASK)))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        let prompt = Paragraph::new(self.language.tr(i18n::EDIT_PROMPT))
            .style(Style::default().fg(theme.dimmed));
        frame.render_widget(prompt, chunks[0]);

        render_text_field(frame, chunks[1], ">", &self.input, true, None, theme);

        let hint = Line::from(vec![
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[2]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_prefilled_with_current_text() {
        let dialog = EditDialog::new("Buy milk", Language::En);
        assert_eq!(dialog.value(), "Buy milk");
    }

    #[test]
    fn test_typing_appends() {
        let mut dialog = EditDialog::new("Buy milk", Language::En);
        dialog.handle_key(key(KeyCode::Char('!')));
        assert_eq!(dialog.value(), "Buy milk!");
    }

    #[test]
    fn test_enter_submits_request() {
        let mut dialog = EditDialog::new("Buy milk", Language::En);
        dialog.handle_key(key(KeyCode::Char('s')));
        match dialog.handle_key(key(KeyCode::Enter)) {
            DialogResult::Submit(req) => {
                assert_eq!(req.original, "Buy milk");
                assert_eq!(req.new_text, "Buy milks");
            }
            _ => panic!("expected submit"),
        }
    }

    #[test]
    fn test_enter_on_blank_cancels() {
        let mut dialog = EditDialog::new("ab", Language::En);
        dialog.handle_key(key(KeyCode::Backspace));
        dialog.handle_key(key(KeyCode::Backspace));
        assert_eq!(dialog.value(), "");
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Cancel
        ));
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = EditDialog::new("Buy milk", Language::En);
        assert!(matches!(
            dialog.handle_key(key(KeyCode::Esc)),
            DialogResult::Cancel
        ));
    }
}
