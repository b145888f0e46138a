//! Home view - sorted task list, banners and the task dialogs

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::Action;
use super::components::HelpOverlay;
use super::dialogs::{
    AddTaskDialog, ConfirmDialog, DialogResult, EditTaskDialog, RemoveTaskDialog,
};
use super::styles::Theme;
use crate::session::{Config, DisplayConfig, Session};
use crate::task::display::{format_today, MOTTO};
use crate::task::{display_rows, Notice, TaskAction, TaskRow, TaskSequence};

pub const EMPTY_MESSAGE: &str = "No tasks yet. Press 'a' to add one.";

pub struct HomeView {
    session: Session,
    rows: Vec<TaskRow>,
    display: DisplayConfig,
    confirm_clear: bool,

    // UI state
    cursor: usize,

    // Dialogs
    show_help: bool,
    add_dialog: Option<AddTaskDialog>,
    edit_dialog: Option<EditTaskDialog>,
    remove_dialog: Option<RemoveTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,
}

impl HomeView {
    pub fn new(config: &Config) -> Self {
        Self {
            session: Session::new(),
            rows: Vec::new(),
            display: config.display.clone(),
            confirm_clear: config.tui.confirm_clear,
            cursor: 0,
            show_help: false,
            add_dialog: None,
            edit_dialog: None,
            remove_dialog: None,
            confirm_dialog: None,
        }
    }

    pub fn tasks(&self) -> &TaskSequence {
        &self.session.tasks
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.session.notice()
    }

    pub fn has_dialog(&self) -> bool {
        self.show_help
            || self.add_dialog.is_some()
            || self.edit_dialog.is_some()
            || self.remove_dialog.is_some()
            || self.confirm_dialog.is_some()
    }

    pub fn selected_row(&self) -> Option<&TaskRow> {
        self.rows.get(self.cursor)
    }

    /// Sequence position of the highlighted row, 1 when the list is empty.
    fn selected_position(&self) -> usize {
        self.selected_row().map(|row| row.position).unwrap_or(1)
    }

    /// Apply an action to the list and rebuild the sorted rows.
    pub fn run(&mut self, action: TaskAction) {
        let is_add = matches!(action, TaskAction::Add(_));
        self.session.run(action);
        self.refresh_rows();

        // Follow a freshly added task to wherever it sorts.
        if is_add {
            let last_id = self.session.tasks.iter().last().map(|task| task.id.clone());
            if let Some(idx) = last_id.and_then(|id| self.rows.iter().position(|r| r.id == id)) {
                self.cursor = idx;
            }
        }
    }

    fn refresh_rows(&mut self) {
        self.rows = display_rows(&self.session.tasks, self.display.options());
        if self.cursor >= self.rows.len() {
            self.cursor = self.rows.len().saturating_sub(1);
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        // Handle dialog input first
        if self.show_help {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                self.show_help = false;
            }
            return None;
        }

        if let Some(dialog) = &mut self.add_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.add_dialog = None,
                DialogResult::Submit(draft) => {
                    self.add_dialog = None;
                    self.run(TaskAction::Add(draft));
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.edit_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.edit_dialog = None,
                DialogResult::Submit(action) => {
                    self.edit_dialog = None;
                    self.run(action);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.remove_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.remove_dialog = None,
                DialogResult::Submit(action) => {
                    self.remove_dialog = None;
                    self.run(action);
                }
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => self.confirm_dialog = None,
                DialogResult::Submit(action) => {
                    self.confirm_dialog = None;
                    self.run(action);
                }
            }
            return None;
        }

        // Normal mode keybindings
        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            KeyCode::Char('a') => {
                self.add_dialog = Some(AddTaskDialog::new());
            }
            KeyCode::Char('e') => {
                self.edit_dialog = Some(EditTaskDialog::new(
                    self.session.tasks.to_list(),
                    self.selected_position(),
                ));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                let descriptions = self
                    .session
                    .tasks
                    .iter()
                    .map(|task| task.description.clone())
                    .collect();
                self.remove_dialog = Some(RemoveTaskDialog::new(
                    descriptions,
                    self.selected_position(),
                ));
            }
            KeyCode::Char('c') => {
                if self.confirm_clear {
                    self.confirm_dialog = Some(ConfirmDialog::clear_all(self.session.tasks.len()));
                } else {
                    self.run(TaskAction::Clear);
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
            }
            KeyCode::PageUp => {
                self.move_cursor(-10);
            }
            KeyCode::PageDown => {
                self.move_cursor(10);
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.rows.len().saturating_sub(1);
            }
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.rows.is_empty() {
            return;
        }

        self.cursor = if delta < 0 {
            self.cursor.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (self.cursor + delta as usize).min(self.rows.len() - 1)
        };
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Min(0),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        self.render_header(frame, chunks[0], theme);
        self.render_list(frame, chunks[1], theme);
        self.render_notice(frame, chunks[2], theme);
        self.render_status_bar(frame, chunks[3], theme);

        // Render dialogs on top
        if self.show_help {
            HelpOverlay::render(frame, area, theme);
        }
        if let Some(dialog) = &self.add_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.edit_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.remove_dialog {
            dialog.render(frame, area, theme);
        }
        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(" To-Do List ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = Vec::new();
        if self.display.show_today {
            lines.push(Line::from(vec![
                Span::styled("Today's Date: ", Style::default().fg(theme.dimmed)),
                Span::styled(
                    format_today(chrono::Local::now().date_naive()),
                    Style::default().fg(theme.text).bold(),
                ),
            ]));
        }
        lines.push(Line::from(Span::styled(
            MOTTO,
            Style::default().fg(theme.hint).italic(),
        )));
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" My To-Do List ({}) ", self.rows.len()))
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(area);
        frame.render_widget(block, area);

        if self.rows.is_empty() {
            let empty_text = vec![
                Line::from(""),
                Line::from(EMPTY_MESSAGE).style(Style::default().fg(theme.dimmed)),
            ];
            let para = Paragraph::new(empty_text).alignment(Alignment::Center);
            frame.render_widget(para, inner);
            return;
        }

        let width = inner.width as usize;
        let items: Vec<ListItem> = self
            .rows()
            .iter()
            .map(|row| render_row(row, width, theme))
            .collect();

        let list = List::new(items).highlight_style(Style::default().bg(theme.selection));
        let mut state = ListState::default().with_selected(Some(self.cursor));
        frame.render_stateful_widget(list, inner, &mut state);
    }

    fn render_notice(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let Some(notice) = self.notice() else {
            return;
        };
        let color = if notice.is_success() {
            theme.success
        } else {
            theme.error
        };
        let line = Line::from(vec![
            Span::raw(" "),
            Span::raw(notice.icon()),
            Span::raw(" "),
            Span::styled(notice.message.as_str(), Style::default().fg(color)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let spans = vec![
            Span::styled(" j/k", key_style),
            Span::styled(" Navigate ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" a", key_style),
            Span::styled(" Add ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" e", key_style),
            Span::styled(" Edit ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" d", key_style),
            Span::styled(" Remove ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" c", key_style),
            Span::styled(" Clear ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" ?", key_style),
            Span::styled(" Help ", desc_style),
            Span::styled("│", sep_style),
            Span::styled(" q", key_style),
            Span::styled(" Quit", desc_style),
        ];

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}

fn render_row(row: &TaskRow, width: usize, theme: &Theme) -> ListItem<'static> {
    let rank = format!("{:>3}. ", row.rank);
    let badge = format!(" [{}]", row.priority.label());
    let room = width.saturating_sub(rank.width() + badge.width());

    let title = Line::from(vec![
        Span::styled(rank, Style::default().fg(theme.dimmed)),
        Span::styled(
            truncate_to_width(&row.description, room),
            Style::default().fg(theme.text).bold(),
        ),
        Span::styled(badge, Style::default().fg(theme.priority(row.priority))),
    ]);
    let details = Line::from(vec![
        Span::raw("     "),
        Span::styled(
            format!("#{} ", row.position),
            Style::default().fg(theme.hint),
        ),
        Span::styled(
            format!("Due: {}  {}", row.due, row.schedule()),
            Style::default().fg(theme.dimmed),
        ),
    ]);

    ListItem::new(vec![title, details])
}

/// Cut `text` to at most `max` terminal columns, marking the cut with `…`.
fn truncate_to_width(text: &str, max: usize) -> String {
    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
