//! HTML page for the web form UI, rendered from `templates/index.html`

use askama::Template;
use chrono::NaiveDate;

use crate::task::display::{format_today, MOTTO};
use crate::task::{Notice, Priority, TaskField, TaskRow};

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add some tasks using the sidebar!";

#[derive(Debug)]
pub struct PriorityOption {
    pub label: &'static str,
    pub selected: bool,
}

/// The whole page: sidebar forms plus the sorted list. User text is escaped
/// by the template engine.
#[derive(Template, Debug)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    today: Option<String>,
    rows: &'a [TaskRow],
    notice: Option<&'a Notice>,
    priorities: Vec<PriorityOption>,
    fields: Vec<&'static str>,
    motto: &'static str,
    empty_message: &'static str,
}

impl<'a> IndexPage<'a> {
    pub fn new(
        today: NaiveDate,
        show_today: bool,
        rows: &'a [TaskRow],
        notice: Option<&'a Notice>,
    ) -> Self {
        Self {
            today: show_today.then(|| format_today(today)),
            rows,
            notice,
            priorities: Priority::ALL
                .into_iter()
                .map(|priority| PriorityOption {
                    label: priority.label(),
                    selected: priority == Priority::default(),
                })
                .collect(),
            fields: TaskField::ALL.into_iter().map(TaskField::label).collect(),
            motto: MOTTO,
            empty_message: EMPTY_MESSAGE,
        }
    }
}
