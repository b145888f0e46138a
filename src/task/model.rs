//! Task data model

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::parser::{self, InputError};

/// Task ID in format T001, T002, etc.
///
/// Assigned once by the owning [`TaskSequence`](super::TaskSequence) and never
/// reused, so it survives removals that renumber positions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(pub String);

impl TaskId {
    /// Create a new task ID from number
    pub fn from_number(n: u32) -> Self {
        Self(format!("T{:03}", n))
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority tier. The discriminants are the stored levels.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum Priority {
    #[default]
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Parse priority from a label (`Low`, `medium`, ...) or a level (`0`..`2`)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "0" => Some(Self::Low),
            "medium" | "med" | "1" => Some(Self::Medium),
            "high" | "2" => Some(Self::High),
            _ => None,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            0 => Some(Self::Low),
            1 => Some(Self::Medium),
            2 => Some(Self::High),
            _ => None,
        }
    }

    pub fn level(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Next tier, wrapping High back to Low. Used by selector widgets.
    pub fn cycle(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn cycle_back(self) -> Self {
        match self {
            Self::Low => Self::High,
            Self::Medium => Self::Low,
            Self::High => Self::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single to-do item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    pub description: String,

    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub start_time: Option<NaiveTime>,

    #[serde(default)]
    pub end_time: Option<NaiveTime>,
}

impl Task {
    pub(crate) fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
            start_time: draft.start_time,
            end_time: draft.end_time,
        }
    }

    /// Overwrite exactly the field named by `edit`.
    pub fn apply_edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Description(text) => self.description = text,
            FieldEdit::DueDate(date) => self.due_date = date,
            FieldEdit::Priority(priority) => self.priority = priority,
            FieldEdit::StartTime(time) => self.start_time = time,
            FieldEdit::EndTime(time) => self.end_time = time,
        }
    }
}

/// The fields of a task needed to append it. Ids are assigned on append.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskDraft {
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl TaskDraft {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Default::default()
        }
    }

    pub fn due(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(date);
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn start(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self
    }

    pub fn end(mut self, time: NaiveTime) -> Self {
        self.end_time = Some(time);
        self
    }
}

/// Editable task fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskField {
    #[serde(rename = "Task")]
    Description,
    #[serde(rename = "Due Date")]
    DueDate,
    Priority,
    #[serde(rename = "Start Time")]
    StartTime,
    #[serde(rename = "End Time", alias = "Finish Time")]
    EndTime,
}

impl TaskField {
    pub const ALL: [TaskField; 5] = [
        TaskField::Description,
        TaskField::DueDate,
        TaskField::Priority,
        TaskField::StartTime,
        TaskField::EndTime,
    ];

    /// Parse a field name. "Finish Time" is accepted for the end time.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect();
        match normalized.as_str() {
            "task" | "description" => Some(Self::Description),
            "duedate" | "due" => Some(Self::DueDate),
            "priority" => Some(Self::Priority),
            "starttime" | "start" => Some(Self::StartTime),
            "endtime" | "end" | "finishtime" | "finish" => Some(Self::EndTime),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Description => "Task",
            Self::DueDate => "Due Date",
            Self::Priority => "Priority",
            Self::StartTime => "Start Time",
            Self::EndTime => "End Time",
        }
    }

    /// Input format hint shown next to value inputs
    pub fn hint(self) -> &'static str {
        match self {
            Self::Description => "new task text",
            Self::DueDate => "YYYY-MM-DD, empty clears",
            Self::Priority => "Low / Medium / High",
            Self::StartTime | Self::EndTime => "HH:MM, empty clears",
        }
    }

    pub fn cycle(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn cycle_back(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for TaskField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A typed replacement value for one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Description(String),
    DueDate(Option<NaiveDate>),
    Priority(Priority),
    StartTime(Option<NaiveTime>),
    EndTime(Option<NaiveTime>),
}

impl FieldEdit {
    pub fn field(&self) -> TaskField {
        match self {
            Self::Description(_) => TaskField::Description,
            Self::DueDate(_) => TaskField::DueDate,
            Self::Priority(_) => TaskField::Priority,
            Self::StartTime(_) => TaskField::StartTime,
            Self::EndTime(_) => TaskField::EndTime,
        }
    }

    /// Build an edit from raw form input for `field`.
    ///
    /// Priority labels go through the Low/Medium/High table here, so the
    /// sequence only ever stores a [`Priority`].
    pub fn parse(field: TaskField, raw: &str) -> Result<Self, InputError> {
        match field {
            TaskField::Description => {
                if raw.trim().is_empty() {
                    Err(InputError::EmptyDescription)
                } else {
                    Ok(Self::Description(raw.to_string()))
                }
            }
            TaskField::DueDate => parser::parse_date(raw).map(Self::DueDate),
            TaskField::Priority => Priority::parse(raw)
                .map(Self::Priority)
                .ok_or_else(|| InputError::InvalidPriority(raw.to_string())),
            TaskField::StartTime => parser::parse_time(raw).map(Self::StartTime),
            TaskField::EndTime => parser::parse_time(raw).map(Self::EndTime),
        }
    }
}
