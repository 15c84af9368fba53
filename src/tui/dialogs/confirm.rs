//! Delete confirmation dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::tui::styles::Theme;

pub struct ConfirmDialog {
    title: String,
    message: String,
    target: String,
    selected: bool, // true = Yes, false = No
}

impl ConfirmDialog {
    /// `target` is the task text the confirmation applies to.
    pub fn new(title: &str, message: &str, target: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            target: target.to_string(),
            selected: false,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Submits the target text on confirmation.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<String> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Enter => {
                if self.selected {
                    DialogResult::Submit(self.target.clone())
                } else {
                    DialogResult::Cancel
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(self.target.clone()),
            KeyCode::Left | KeyCode::Char('h') => {
                self.selected = true;
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.selected = false;
                DialogResult::Continue
            }
            KeyCode::Tab => {
                self.selected = !self.selected;
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 50, 9);

        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.danger))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(theme.danger).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(1),
                Constraint::Length(1),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(&*self.message).style(Style::default().fg(theme.text)),
            chunks[0],
        );

        let target = Paragraph::new(format!("\"{}\"", self.target))
            .style(Style::default().fg(theme.title).bold())
            .wrap(Wrap { trim: true });
        frame.render_widget(target, chunks[1]);

        let yes_style = if self.selected {
            Style::default().fg(theme.danger).bold()
        } else {
            Style::default().fg(theme.dimmed)
        };
        let no_style = if !self.selected {
            Style::default().fg(theme.accent).bold()
        } else {
            Style::default().fg(theme.dimmed)
        };

        let buttons = Line::from(vec![
            Span::styled("[Yes]", yes_style),
            Span::raw("    "),
            Span::styled("[No]", no_style),
        ]);

        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[2],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn dialog() -> ConfirmDialog {
        ConfirmDialog::new("Delete Task", "Delete this task?", "Buy milk")
    }

    #[test]
    fn test_default_selection_is_no() {
        assert!(!dialog().selected);
    }

    #[test]
    fn test_target_accessor() {
        assert_eq!(dialog().target(), "Buy milk");
    }

    #[test]
    fn test_esc_and_n_cancel() {
        for code in [KeyCode::Esc, KeyCode::Char('n'), KeyCode::Char('N')] {
            let result = dialog().handle_key(key(code));
            assert!(matches!(result, DialogResult::Cancel));
        }
    }

    #[test]
    fn test_y_submits_target() {
        let result = dialog().handle_key(key(KeyCode::Char('y')));
        assert!(matches!(result, DialogResult::Submit(ref t) if t == "Buy milk"));
    }

    #[test]
    fn test_enter_with_no_selected_cancels() {
        let result = dialog().handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Cancel));
    }

    #[test]
    fn test_enter_with_yes_selected_submits() {
        let mut d = dialog();
        d.handle_key(key(KeyCode::Left));
        let result = d.handle_key(key(KeyCode::Enter));
        assert!(matches!(result, DialogResult::Submit(_)));
    }

    #[test]
    fn test_tab_toggles_selection() {
        let mut d = dialog();
        d.handle_key(key(KeyCode::Tab));
        assert!(d.selected);
        d.handle_key(key(KeyCode::Tab));
        assert!(!d.selected);
    }

    #[test]
    fn test_right_selects_no() {
        let mut d = dialog();
        d.selected = true;
        d.handle_key(key(KeyCode::Char('l')));
        assert!(!d.selected);
    }

    #[test]
    fn test_unknown_key_continues() {
        let result = dialog().handle_key(key(KeyCode::Char('x')));
        assert!(matches!(result, DialogResult::Continue));
    }
}
