//! TUI dialog components

mod add_task;
mod confirm;
mod edit_task;
mod remove_task;

pub use add_task::AddTaskDialog;
pub use confirm::ConfirmDialog;
pub use edit_task::EditTaskDialog;
pub use remove_task::RemoveTaskDialog;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear};

use crate::tui::styles::Theme;

#[derive(Debug, PartialEq)]
pub enum DialogResult<T> {
    Continue,
    Cancel,
    Submit(T),
}

/// A `width` x `height` rect centered in `area`, clamped to fit.
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

/// Outline shared by every modal: a bordered, titled box over a cleared area.
pub struct DialogFrame<'a> {
    pub title: &'a str,
    pub width: u16,
    pub height: u16,
    pub border: Color,
    pub title_color: Color,
}

impl DialogFrame<'_> {
    /// Draws the box centered in `area` and returns the space inside it.
    pub fn draw(&self, frame: &mut Frame, area: Rect, theme: &Theme) -> Rect {
        let dialog_area = centered_rect(area, self.width, self.height);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .style(Style::default().bg(theme.background))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
            .title(format!(" {} ", self.title))
            .title_style(Style::default().fg(self.title_color).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);
        inner
    }
}
