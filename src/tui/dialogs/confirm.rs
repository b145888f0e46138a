//! Yes/No confirmation for destructive task actions

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::DialogResult;
use crate::task::TaskAction;
use crate::tui::styles::Theme;

pub struct ConfirmDialog {
    title: String,
    message: String,
    action: TaskAction,
    selected: bool, // true = Yes, false = No
}

impl ConfirmDialog {
    pub fn new(title: &str, message: &str, action: TaskAction) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action,
            selected: false,
        }
    }

    /// Confirmation for wiping the whole list.
    pub fn clear_all(task_count: usize) -> Self {
        let message = format!(
            "Delete all {} task(s)? This cannot be undone.",
            task_count
        );
        Self::new("Clear All Tasks", &message, TaskAction::Clear)
    }

    pub fn action(&self) -> &TaskAction {
        &self.action
    }

    /// Yields the guarded action once the user says yes.
    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskAction> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => DialogResult::Cancel,
            KeyCode::Enter => {
                if self.selected {
                    DialogResult::Submit(self.action.clone())
                } else {
                    DialogResult::Cancel
                }
            }
            KeyCode::Char('y') | KeyCode::Char('Y') => DialogResult::Submit(self.action.clone()),
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
        let inner = super::DialogFrame {
            title: &self.title,
            width: 50,
            height: 8,
            border: theme.error,
            title_color: theme.error,
        }
        .draw(frame, area, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(2)])
            .split(inner);

        let message = Paragraph::new(&*self.message)
            .style(Style::default().fg(theme.text))
            .wrap(Wrap { trim: true });
        frame.render_widget(message, chunks[0]);

        let yes_style = if self.selected {
            Style::default().fg(theme.error).bold()
        } else {
            Style::default().fg(theme.dimmed)
        };
        let no_style = if !self.selected {
            Style::default().fg(theme.success).bold()
        } else {
            Style::default().fg(theme.dimmed)
        };

        let buttons = Line::from(vec![
            Span::raw("  "),
            Span::styled("[Yes]", yes_style),
            Span::raw("    "),
            Span::styled("[No]", no_style),
        ]);

        frame.render_widget(
            Paragraph::new(buttons).alignment(Alignment::Center),
            chunks[1],
        );
    }
}
