//! New task dialog

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::parser::{parse_date, parse_time, InputError};
use crate::task::{Priority, TaskDraft};
use crate::tui::components::{render_choice_field, render_text_field};
use crate::tui::styles::Theme;

const TASK_FIELD: usize = 0;
const DUE_FIELD: usize = 1;
const PRIORITY_FIELD: usize = 2;
const START_FIELD: usize = 3;
const END_FIELD: usize = 4;
const FIELD_COUNT: usize = 5;

pub struct AddTaskDialog {
    description: Input,
    due_date: Input,
    priority: Priority,
    start_time: Input,
    end_time: Input,
    focused_field: usize,
    error_message: Option<String>,
}

impl Default for AddTaskDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl AddTaskDialog {
    pub fn new() -> Self {
        Self {
            description: Input::default(),
            due_date: Input::default(),
            priority: Priority::default(),
            start_time: Input::default(),
            end_time: Input::default(),
            focused_field: TASK_FIELD,
            error_message: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskDraft> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => match self.build_draft() {
                Ok(draft) => DialogResult::Submit(draft),
                Err(e) => {
                    self.error_message = Some(e.to_string());
                    DialogResult::Continue
                }
            },
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focused_field == PRIORITY_FIELD => {
                self.priority = self.priority.cycle();
                DialogResult::Continue
            }
            KeyCode::Left if self.focused_field == PRIORITY_FIELD => {
                self.priority = self.priority.cycle_back();
                DialogResult::Continue
            }
            _ => {
                if let Some(input) = self.current_input_mut() {
                    input.handle_event(&Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.focused_field {
            TASK_FIELD => Some(&mut self.description),
            DUE_FIELD => Some(&mut self.due_date),
            START_FIELD => Some(&mut self.start_time),
            END_FIELD => Some(&mut self.end_time),
            _ => None,
        }
    }

    fn build_draft(&self) -> Result<TaskDraft, InputError> {
        let description = self.description.value();
        if description.trim().is_empty() {
            return Err(InputError::EmptyDescription);
        }
        Ok(TaskDraft {
            description: description.to_string(),
            due_date: parse_date(self.due_date.value())?,
            priority: self.priority,
            start_time: parse_time(self.start_time.value())?,
            end_time: parse_time(self.end_time.value())?,
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let inner = super::DialogFrame {
            title: "Add Task",
            width: 64,
            height: 15,
            border: theme.accent,
            title_color: theme.title,
        }
        .draw(frame, area, theme);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[TASK_FIELD],
            "Task:",
            &self.description,
            self.focused_field == TASK_FIELD,
            Some("(required)"),
            theme,
        );
        render_text_field(
            frame,
            chunks[DUE_FIELD],
            "Due Date:",
            &self.due_date,
            self.focused_field == DUE_FIELD,
            Some("YYYY-MM-DD (optional)"),
            theme,
        );
        render_choice_field(
            frame,
            chunks[PRIORITY_FIELD],
            "Priority:",
            self.priority.label(),
            theme.priority(self.priority),
            self.focused_field == PRIORITY_FIELD,
            theme,
        );
        render_text_field(
            frame,
            chunks[START_FIELD],
            "Start Time:",
            &self.start_time,
            self.focused_field == START_FIELD,
            Some("HH:MM (optional)"),
            theme,
        );
        render_text_field(
            frame,
            chunks[END_FIELD],
            "End Time:",
            &self.end_time,
            self.focused_field == END_FIELD,
            Some("HH:MM (optional)"),
            theme,
        );

        let footer = if let Some(error) = &self.error_message {
            Line::from(vec![
                Span::styled("✗ ", Style::default().fg(theme.error).bold()),
                Span::styled(error.as_str(), Style::default().fg(theme.error)),
            ])
        } else {
            Line::from(vec![
                Span::styled("Tab", Style::default().fg(theme.hint)),
                Span::raw(" next  "),
                Span::styled("←/→", Style::default().fg(theme.hint)),
                Span::raw(" priority  "),
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" add  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ])
        };
        frame.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), chunks[5]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(dialog: &mut AddTaskDialog, s: &str) {
        for c in s.chars() {
            dialog.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_starts_on_task_field() {
        let dialog = AddTaskDialog::new();
        assert_eq!(dialog.focused_field, TASK_FIELD);
        assert_eq!(dialog.priority, Priority::Low);
    }

    #[test]
    fn test_esc_cancels() {
        let mut dialog = AddTaskDialog::new();
        assert_eq!(dialog.handle_key(key(KeyCode::Esc)), DialogResult::Cancel);
    }

    #[test]
    fn test_tab_cycles_fields() {
        let mut dialog = AddTaskDialog::new();
        for expected in [DUE_FIELD, PRIORITY_FIELD, START_FIELD, END_FIELD, TASK_FIELD] {
            dialog.handle_key(key(KeyCode::Tab));
            assert_eq!(dialog.focused_field, expected);
        }
    }

    #[test]
    fn test_backtab_wraps_to_last_field() {
        let mut dialog = AddTaskDialog::new();
        dialog.handle_key(key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field, END_FIELD);
    }

    #[test]
    fn test_empty_task_keeps_dialog_open() {
        let mut dialog = AddTaskDialog::new();
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogResult::Continue);
        assert_eq!(
            dialog.error_message.as_deref(),
            Some("Please enter a task description.")
        );
    }

    #[test]
    fn test_typing_clears_error() {
        let mut dialog = AddTaskDialog::new();
        dialog.handle_key(key(KeyCode::Enter));
        type_str(&mut dialog, "x");
        assert!(dialog.error_message.is_none());
    }

    #[test]
    fn test_priority_cycles_only_when_focused() {
        let mut dialog = AddTaskDialog::new();
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.priority, Priority::Low);

        dialog.focused_field = PRIORITY_FIELD;
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.priority, Priority::Medium);
        dialog.handle_key(key(KeyCode::Char(' ')));
        assert_eq!(dialog.priority, Priority::High);
        dialog.handle_key(key(KeyCode::Left));
        assert_eq!(dialog.priority, Priority::Medium);
    }

    #[test]
    fn test_space_is_text_in_task_field() {
        let mut dialog = AddTaskDialog::new();
        type_str(&mut dialog, "buy milk");
        assert_eq!(dialog.description.value(), "buy milk");
    }

    #[test]
    fn test_submit_full_draft() {
        let mut dialog = AddTaskDialog::new();
        type_str(&mut dialog, "Write report");
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "2024-06-01");
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Left));
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "09:30");
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "10:00");

        let expected = TaskDraft::new("Write report")
            .due(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
            .priority(Priority::High)
            .start(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
            .end(NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(expected)
        );
    }

    #[test]
    fn test_bad_date_keeps_dialog_open() {
        let mut dialog = AddTaskDialog::new();
        type_str(&mut dialog, "x");
        dialog.handle_key(key(KeyCode::Tab));
        type_str(&mut dialog, "tomorrow");
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogResult::Continue);
        assert!(dialog
            .error_message
            .as_deref()
            .is_some_and(|e| e.contains("not a valid date")));
    }
}
