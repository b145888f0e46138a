//! Task management module
//!
//! This module provides the task list itself and everything the front-ends
//! share:
//! - Task data model and typed field edits
//! - `TaskSequence`, the insertion-ordered linked list
//! - Form input parsing
//! - Display ordering and formatting
//! - Actions and their success/error notices

pub mod actions;
pub mod display;
pub mod model;
pub mod parser;
pub mod sequence;

pub use actions::{apply, Notice, NoticeKind, TaskAction};
pub use display::{display_rows, sort_for_display, DisplayOptions, TaskRow};
pub use model::{FieldEdit, Priority, Task, TaskDraft, TaskField, TaskId};
pub use parser::InputError;
pub use sequence::TaskSequence;
