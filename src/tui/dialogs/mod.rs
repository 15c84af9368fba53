//! TUI dialog components

mod confirm;
mod edit;
mod info;
mod language;

pub use confirm::ConfirmDialog;
pub use edit::{EditDialog, EditRequest};
pub use info::InfoDialog;
pub use language::LanguageDialog;

use ratatui::layout::Rect;

pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// A `width` x `height` rect centred in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 30, 6);
        let rect = centered_rect(area, 50, 10);
        assert_eq!(rect, Rect::new(5, 5, 30, 6));
    }
}
