//! Language picker dialog

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::i18n::{self, Language};
use crate::tui::styles::Theme;

pub struct LanguageDialog {
    current: Language,
    selected: usize,
}

impl LanguageDialog {
    /// The cursor starts on the active language.
    pub fn new(current: Language) -> Self {
        let selected = Language::ALL
            .iter()
            .position(|lang| *lang == current)
            .unwrap_or(0);
        Self { current, selected }
    }

    pub fn selected(&self) -> Language {
        Language::ALL[self.selected]
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<Language> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => DialogResult::Submit(self.selected()),
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
                DialogResult::Continue
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < Language::ALL.len() {
                    self.selected += 1;
                }
                DialogResult::Continue
            }
            _ => DialogResult::Continue,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        // list + hint (1) + borders (2) + margin (2)
        let dialog_height = Language::ALL.len() as u16 + 5;
        let dialog_area = super::centered_rect(area, 36, dialog_height);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(format!(" {} ", self.current.tr(i18n::LANGUAGE)))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let lines: Vec<Line> = Language::ALL
            .iter()
            .enumerate()
            .map(|(i, lang)| {
                let marker = if *lang == self.current { "●" } else { " " };
                let text = format!(" {} {}", marker, lang);
                if i == self.selected {
                    Line::from(Span::styled(
                        text,
                        Style::default()
                            .fg(theme.title)
                            .bg(theme.selection)
                            .bold(),
                    ))
                } else {
                    Line::from(Span::styled(text, Style::default().fg(theme.text)))
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let hint = Line::from(vec![
            Span::styled("j/k", Style::default().fg(theme.hint)),
            Span::raw(" move  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" select  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[1]);
    }
}
