//! Remove a task by its list position

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::parser::parse_position;
use crate::task::TaskAction;
use crate::tui::components::render_text_field;
use crate::tui::styles::Theme;

pub struct RemoveTaskDialog {
    /// Descriptions in sequence order, for the preview line
    descriptions: Vec<String>,
    position: Input,
    error_message: Option<String>,
}

impl RemoveTaskDialog {
    pub fn new(descriptions: Vec<String>, position: usize) -> Self {
        Self {
            descriptions,
            position: Input::new(position.to_string()),
            error_message: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskAction> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => match parse_position(self.position.value()) {
                Ok(position) => DialogResult::Submit(TaskAction::Remove { position }),
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    DialogResult::Continue
                }
            },
            _ => {
                self.position.handle_event(&Event::Key(key));
                self.error_message = None;
                DialogResult::Continue
            }
        }
    }

    fn target(&self) -> Option<&str> {
        let position = parse_position(self.position.value()).ok()?;
        self.descriptions.get(position - 1).map(String::as_str)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let inner = super::DialogFrame {
            title: "Remove Task",
            width: 56,
            height: 9,
            border: theme.error,
            title_color: theme.error,
        }
        .draw(frame, area, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            "Task Number:",
            &self.position,
            true,
            None,
            theme,
        );

        let preview = match self.target() {
            Some(description) => Line::from(vec![
                Span::styled("Removes: ", Style::default().fg(theme.dimmed)),
                Span::styled(description, Style::default().fg(theme.text)),
            ]),
            None => Line::from(Span::styled(
                "No task at this number",
                Style::default().fg(theme.dimmed),
            )),
        };
        frame.render_widget(Paragraph::new(preview), chunks[1]);

        let footer = if let Some(error) = &self.error_message {
            Line::from(vec![
                Span::styled("✗ ", Style::default().fg(theme.error).bold()),
                Span::styled(error.as_str(), Style::default().fg(theme.error)),
            ])
        } else {
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" remove  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ])
        };
        frame.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), chunks[2]);
    }
}
