//! `?` overlay listing the home view's keys

use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::dialogs::centered_rect;
use crate::tui::styles::Theme;

const KEY_WIDTH: u16 = 9;
const DIALOG_WIDTH: u16 = 46;

type Section = (&'static str, &'static [(&'static str, &'static str)]);

const SECTIONS: &[Section] = &[
    (
        "Navigation",
        &[
            ("j/↓ k/↑", "Move down / up"),
            ("g G", "Jump to top / bottom"),
            ("Tab", "Switch pending/resolved"),
        ],
    ),
    (
        "Tasks",
        &[
            ("a i", "Type a new task"),
            ("Space x", "Resolve or reopen"),
            ("e Enter", "Edit selected task"),
            ("d", "Delete selected task"),
            ("r F5", "Reload the task file"),
        ],
    ),
    (
        "Other",
        &[("L", "Language"), ("?", "Close this help"), ("q", "Quit")],
    ),
];

/// Header plus keys per section, one blank row between sections
fn row_count() -> u16 {
    let rows: usize = SECTIONS.iter().map(|(_, keys)| keys.len() + 1).sum();
    (rows + SECTIONS.len() - 1) as u16
}

pub struct HelpOverlay;

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = centered_rect(area, DIALOG_WIDTH, row_count() + 2);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" Keys ")
            .title_style(Style::default().fg(theme.title).bold());

        let mut rows = Vec::new();
        for (i, (section, keys)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new([""]));
            }
            let header = Cell::from(*section).style(Style::default().fg(theme.accent).bold());
            rows.push(Row::new([header]));
            rows.extend(keys.iter().map(|(key, desc)| {
                Row::new([
                    Cell::from(*key).style(Style::default().fg(theme.hint)),
                    Cell::from(*desc).style(Style::default().fg(theme.text)),
                ])
            }));
        }

        let table = Table::new(rows, [Constraint::Length(KEY_WIDTH), Constraint::Min(1)])
            .block(block)
            .column_spacing(1);
        frame.render_widget(table, dialog_area);
    }
}
