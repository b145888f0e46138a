//! Display ordering and formatting of task snapshots

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use std::cmp::Ordering;

use super::model::{Priority, Task, TaskId};
use super::parser::{DATE_FORMAT, TIME_FORMAT};
use super::sequence::TaskSequence;

pub const NO_DUE_DATE: &str = "No due date";
pub const NO_START_TIME: &str = "No start time";
pub const NO_FINISH_TIME: &str = "No finish time";
pub const MOTTO: &str = "Stay Focused & Be Productive";
pub const TODAY_FORMAT: &str = "%B %d, %Y";

/// Display order: higher priority first, then later due date first.
///
/// Tasks without a due date come after every dated task of the same
/// priority.
pub fn display_cmp(a: &Task, b: &Task) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| due_date_desc(a.due_date, b.due_date))
}

fn due_date_desc(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Sort a snapshot for display. Stable, so full ties keep list order.
pub fn sort_for_display(tasks: &mut [Task]) {
    tasks.sort_by(display_cmp);
}

pub fn format_due(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NO_DUE_DATE.to_string())
}

pub fn format_start(time: Option<NaiveTime>) -> String {
    format_time_or(time, NO_START_TIME)
}

pub fn format_end(time: Option<NaiveTime>) -> String {
    format_time_or(time, NO_FINISH_TIME)
}

fn format_time_or(time: Option<NaiveTime>, placeholder: &str) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_else(|| placeholder.to_string())
}

/// "October 18, 2026"
pub fn format_today(today: NaiveDate) -> String {
    today.format(TODAY_FORMAT).to_string()
}

/// First character upper case, the rest lower case.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DisplayOptions {
    pub capitalize_descriptions: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            capitalize_descriptions: true,
        }
    }
}

/// One formatted line of the task list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRow {
    /// 1-based rank in display order
    pub rank: usize,
    /// Current 1-based position in the sequence, the number remove/edit take
    pub position: usize,
    pub id: TaskId,
    pub description: String,
    pub priority: Priority,
    pub due: String,
    pub start: String,
    pub end: String,
}

impl TaskRow {
    pub fn schedule(&self) -> String {
        format!("{} ~ {}", self.start, self.end)
    }
}

/// Snapshot `sequence`, sort it for display and format every row.
pub fn display_rows(sequence: &TaskSequence, options: DisplayOptions) -> Vec<TaskRow> {
    let mut indexed: Vec<(usize, &Task)> = sequence
        .iter()
        .enumerate()
        .map(|(idx, task)| (idx + 1, task))
        .collect();
    indexed.sort_by(|(_, a), (_, b)| display_cmp(a, b));

    indexed
        .into_iter()
        .enumerate()
        .map(|(idx, (position, task))| TaskRow {
            rank: idx + 1,
            position,
            id: task.id.clone(),
            description: if options.capitalize_descriptions {
                capitalize(&task.description)
            } else {
                task.description.clone()
            },
            priority: task.priority,
            due: format_due(task.due_date),
            start: format_start(task.start_time),
            end: format_end(task.end_time),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskDraft;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_priority_then_later_due_date_first() {
        let seq: TaskSequence = vec![
            TaskDraft::new("A")
                .priority(Priority::Low)
                .due(date(2024, 1, 1)),
            TaskDraft::new("B")
                .priority(Priority::High)
                .due(date(2024, 1, 1)),
            TaskDraft::new("C")
                .priority(Priority::High)
                .due(date(2024, 6, 1)),
        ]
        .into_iter()
        .collect();

        let mut tasks = seq.to_list();
        sort_for_display(&mut tasks);
        let order: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(order, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_absent_due_date_sorts_after_dated() {
        let seq: TaskSequence = vec![
            TaskDraft::new("undated").priority(Priority::Medium),
            TaskDraft::new("early")
                .priority(Priority::Medium)
                .due(date(2020, 1, 1)),
            TaskDraft::new("other tier").priority(Priority::Low),
            TaskDraft::new("late")
                .priority(Priority::Medium)
                .due(date(2030, 1, 1)),
        ]
        .into_iter()
        .collect();

        let rows = display_rows(
            &seq,
            DisplayOptions {
                capitalize_descriptions: false,
            },
        );
        let order: Vec<&str> = rows.iter().map(|r| r.description.as_str()).collect();
        assert_eq!(order, vec!["late", "early", "undated", "other tier"]);
    }

    #[test]
    fn test_ties_keep_list_order() {
        let seq: TaskSequence = ["first", "second", "third"]
            .iter()
            .map(|n| TaskDraft::new(*n))
            .collect();
        let rows = display_rows(&seq, DisplayOptions::default());
        let positions: Vec<usize> = rows.iter().map(|r| r.position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_rows_carry_rank_and_position() {
        let seq: TaskSequence = vec![
            TaskDraft::new("low one"),
            TaskDraft::new("high one").priority(Priority::High),
        ]
        .into_iter()
        .collect();

        let rows = display_rows(&seq, DisplayOptions::default());
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].position, 2);
        assert_eq!(rows[0].description, "High one");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(rows[1].position, 1);
    }

    #[test]
    fn test_row_formatting_and_placeholders() {
        let seq: TaskSequence = vec![TaskDraft::new("write REPORT")
            .due(date(2024, 6, 1))
            .start(NaiveTime::from_hms_opt(9, 5, 0).unwrap())]
        .into_iter()
        .collect();

        let row = &display_rows(&seq, DisplayOptions::default())[0];
        assert_eq!(row.description, "Write report");
        assert_eq!(row.due, "2024-06-01");
        assert_eq!(row.start, "09:05");
        assert_eq!(row.end, NO_FINISH_TIME);
        assert_eq!(row.schedule(), "09:05 ~ No finish time");
        assert_eq!(row.id, TaskId::from_number(1));
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_due(None), "No due date");
        assert_eq!(format_start(None), "No start time");
        assert_eq!(
            format_end(NaiveTime::from_hms_opt(18, 30, 59)),
            "18:30"
        );
        assert_eq!(format_today(date(2026, 10, 18)), "October 18, 2026");
        assert_eq!(format_today(date(2024, 3, 5)), "March 05, 2024");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("buy milk"), "Buy milk");
        assert_eq!(capitalize("CALL Bank"), "Call bank");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_display_rows_does_not_mutate() {
        let seq: TaskSequence = vec![
            TaskDraft::new("a"),
            TaskDraft::new("b").priority(Priority::High),
        ]
        .into_iter()
        .collect();
        let before = seq.to_list();
        let _ = display_rows(&seq, DisplayOptions::default());
        assert_eq!(seq.to_list(), before);
    }
}
