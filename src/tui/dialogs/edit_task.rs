//! Edit one field of a task, addressed by its list position

use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::parser::{parse_position, InputError, DATE_FORMAT, TIME_FORMAT};
use crate::task::{FieldEdit, Priority, Task, TaskAction, TaskField};
use crate::tui::components::{render_choice_field, render_text_field};
use crate::tui::styles::Theme;

const POSITION_FIELD: usize = 0;
const FIELD_FIELD: usize = 1;
const VALUE_FIELD: usize = 2;
const FIELD_COUNT: usize = 3;

pub struct EditTaskDialog {
    /// Snapshot in sequence order, used to prefill the value
    tasks: Vec<Task>,
    position: Input,
    field: TaskField,
    value: Input,
    priority: Priority,
    focused_field: usize,
    error_message: Option<String>,
}

impl EditTaskDialog {
    pub fn new(tasks: Vec<Task>, position: usize) -> Self {
        let mut dialog = Self {
            tasks,
            position: Input::new(position.to_string()),
            field: TaskField::Description,
            value: Input::default(),
            priority: Priority::default(),
            focused_field: FIELD_FIELD,
            error_message: None,
        };
        dialog.prefill();
        dialog
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<TaskAction> {
        match key.code {
            KeyCode::Esc => DialogResult::Cancel,
            KeyCode::Enter => match self.build_action() {
                Ok(action) => DialogResult::Submit(action),
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
            KeyCode::Right | KeyCode::Char(' ') if self.focused_field == FIELD_FIELD => {
                self.field = self.field.cycle();
                self.prefill();
                DialogResult::Continue
            }
            KeyCode::Left if self.focused_field == FIELD_FIELD => {
                self.field = self.field.cycle_back();
                self.prefill();
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.editing_priority() => {
                self.priority = self.priority.cycle();
                DialogResult::Continue
            }
            KeyCode::Left if self.editing_priority() => {
                self.priority = self.priority.cycle_back();
                DialogResult::Continue
            }
            _ => {
                let event = Event::Key(key);
                match self.focused_field {
                    POSITION_FIELD => {
                        if self.position.handle_event(&event).is_some() {
                            self.prefill();
                        }
                    }
                    VALUE_FIELD => {
                        self.value.handle_event(&event);
                    }
                    _ => return DialogResult::Continue,
                }
                self.error_message = None;
                DialogResult::Continue
            }
        }
    }

    fn editing_priority(&self) -> bool {
        self.focused_field == VALUE_FIELD && self.field == TaskField::Priority
    }

    fn target(&self) -> Option<&Task> {
        let position = parse_position(self.position.value()).ok()?;
        self.tasks.get(position - 1)
    }

    /// Load the targeted task's current value for the chosen field.
    fn prefill(&mut self) {
        let field = self.field;
        let Some((current, priority)) = self.target().map(|task| {
            let current = match field {
                TaskField::Description => task.description.clone(),
                TaskField::DueDate => task
                    .due_date
                    .map(|d| d.format(DATE_FORMAT).to_string())
                    .unwrap_or_default(),
                TaskField::Priority => task.priority.label().to_string(),
                TaskField::StartTime => format_time(task.start_time),
                TaskField::EndTime => format_time(task.end_time),
            };
            (current, task.priority)
        }) else {
            self.value = Input::default();
            return;
        };
        self.priority = priority;
        self.value = Input::new(current);
    }

    fn build_action(&self) -> Result<TaskAction, InputError> {
        let position = parse_position(self.position.value())?;
        let edit = if self.field == TaskField::Priority {
            FieldEdit::Priority(self.priority)
        } else {
            FieldEdit::parse(self.field, self.value.value())?
        };
        Ok(TaskAction::Edit { position, edit })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let inner = super::DialogFrame {
            title: "Edit Task",
            width: 64,
            height: 12,
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
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[POSITION_FIELD],
            "Task Number:",
            &self.position,
            self.focused_field == POSITION_FIELD,
            None,
            theme,
        );
        render_choice_field(
            frame,
            chunks[FIELD_FIELD],
            "Field:",
            self.field.label(),
            theme.text,
            self.focused_field == FIELD_FIELD,
            theme,
        );

        let value_label = format!("New {}:", self.field.label());
        if self.field == TaskField::Priority {
            render_choice_field(
                frame,
                chunks[VALUE_FIELD],
                &value_label,
                self.priority.label(),
                theme.priority(self.priority),
                self.focused_field == VALUE_FIELD,
                theme,
            );
        } else {
            render_text_field(
                frame,
                chunks[VALUE_FIELD],
                &value_label,
                &self.value,
                self.focused_field == VALUE_FIELD,
                Some(self.field.hint()),
                theme,
            );
        }

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
                Span::raw(" cycle  "),
                Span::styled("Enter", Style::default().fg(theme.hint)),
                Span::raw(" save  "),
                Span::styled("Esc", Style::default().fg(theme.hint)),
                Span::raw(" cancel"),
            ])
        };
        frame.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), chunks[3]);
    }
}

fn format_time(time: Option<chrono::NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{TaskDraft, TaskSequence};
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn tasks() -> Vec<Task> {
        let seq: TaskSequence = vec![
            TaskDraft::new("first").due(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            TaskDraft::new("second").priority(Priority::High),
        ]
        .into_iter()
        .collect();
        seq.to_list()
    }

    #[test]
    fn test_prefills_description_of_position() {
        let dialog = EditTaskDialog::new(tasks(), 2);
        assert_eq!(dialog.position.value(), "2");
        assert_eq!(dialog.field, TaskField::Description);
        assert_eq!(dialog.value.value(), "second");
        assert_eq!(dialog.focused_field, FIELD_FIELD);
    }

    #[test]
    fn test_cycling_field_refills_value() {
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.field, TaskField::DueDate);
        assert_eq!(dialog.value.value(), "2024-01-01");

        dialog.handle_key(key(KeyCode::Right));
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.field, TaskField::StartTime);
        assert_eq!(dialog.value.value(), "");
    }

    #[test]
    fn test_submit_description_edit() {
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Char('!')));
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(TaskAction::Edit {
                position: 1,
                edit: FieldEdit::Description("first!".to_string()),
            })
        );
    }

    #[test]
    fn test_priority_value_is_cycled() {
        let mut dialog = EditTaskDialog::new(tasks(), 2);
        dialog.handle_key(key(KeyCode::Right));
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.field, TaskField::Priority);
        assert_eq!(dialog.priority, Priority::High);

        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Right));
        assert_eq!(dialog.priority, Priority::Low);
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(TaskAction::Edit {
                position: 2,
                edit: FieldEdit::Priority(Priority::Low),
            })
        );
    }

    #[test]
    fn test_changing_position_refills_value() {
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::BackTab));
        assert_eq!(dialog.focused_field, POSITION_FIELD);
        dialog.handle_key(key(KeyCode::Backspace));
        dialog.handle_key(key(KeyCode::Char('2')));
        assert_eq!(dialog.value.value(), "second");
    }

    #[test]
    fn test_unknown_position_still_submits() {
        // The list reports "not found"; the dialog only checks the format.
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::BackTab));
        dialog.handle_key(key(KeyCode::Backspace));
        dialog.handle_key(key(KeyCode::Char('9')));
        assert_eq!(dialog.value.value(), "");
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Tab));
        dialog.handle_key(key(KeyCode::Char('x')));
        assert_eq!(
            dialog.handle_key(key(KeyCode::Enter)),
            DialogResult::Submit(TaskAction::Edit {
                position: 9,
                edit: FieldEdit::Description("x".to_string()),
            })
        );
    }

    #[test]
    fn test_invalid_position_shows_error() {
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::BackTab));
        dialog.handle_key(key(KeyCode::Backspace));
        dialog.handle_key(key(KeyCode::Char('0')));
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogResult::Continue);
        assert!(dialog.error_message.is_some());
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut dialog = EditTaskDialog::new(tasks(), 1);
        dialog.handle_key(key(KeyCode::Tab));
        for _ in 0.."first".len() {
            dialog.handle_key(key(KeyCode::Backspace));
        }
        assert_eq!(dialog.handle_key(key(KeyCode::Enter)), DialogResult::Continue);
        assert_eq!(
            dialog.error_message.as_deref(),
            Some("Please enter a task description.")
        );
    }
}
