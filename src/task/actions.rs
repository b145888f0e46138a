//! User-facing task operations and the banners they produce
//!
//! Both front-ends turn their input into a [`TaskAction`], run it through
//! [`apply`] and render the returned [`Notice`].

use serde::Serialize;

use super::model::{FieldEdit, TaskDraft};
use super::sequence::TaskSequence;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskAction {
    Add(TaskDraft),
    Remove { position: usize },
    Edit { position: usize, edit: FieldEdit },
    Clear,
}

impl TaskAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Remove { .. } => "remove",
            Self::Edit { .. } => "edit",
            Self::Clear => "clear",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
}

/// A success or error banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }

    pub fn icon(&self) -> &'static str {
        match self.kind {
            NoticeKind::Success => "✅",
            NoticeKind::Error => "❌",
        }
    }
}

/// Run `action` against `tasks` and describe the outcome.
pub fn apply(tasks: &mut TaskSequence, action: TaskAction) -> Notice {
    let name = action.name();
    let notice = match action {
        TaskAction::Add(draft) => {
            let message = format!(
                "Task '{}' has been added successfully.",
                draft.description
            );
            let id = tasks.append(draft);
            tracing::debug!(%id, "task appended");
            Notice::success(message)
        }
        TaskAction::Remove { position } => {
            if tasks.remove_at(position) {
                Notice::success(format!(
                    "Task number {} has been removed successfully.",
                    position
                ))
            } else {
                not_found(position)
            }
        }
        TaskAction::Edit { position, edit } => {
            let field = edit.field();
            if tasks.edit_field_at(position, edit) {
                tracing::debug!(position, %field, "task field edited");
                Notice::success(format!(
                    "Task number {} has been edited successfully.",
                    position
                ))
            } else {
                not_found(position)
            }
        }
        TaskAction::Clear => {
            tasks.clear();
            Notice::success("All tasks have been cleared.")
        }
    };

    tracing::debug!(
        action = name,
        ok = notice.is_success(),
        remaining = tasks.len(),
        "task action applied"
    );
    notice
}

fn not_found(position: usize) -> Notice {
    Notice::error(format!("Task number {} is not found.", position))
}
