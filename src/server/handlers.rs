//! Request handlers

use axum::extract::{Form, State};
use askama::Template;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{Html, Redirect, Response};
use axum::Json;
use serde::Deserialize;

use super::cookie::{resolve, with_cookie};
use super::page::IndexPage;
use super::AppState;
use crate::task::parser::{parse_date, parse_field, parse_position, parse_priority, parse_time};
use crate::task::{display_rows, FieldEdit, InputError, Notice, TaskAction, TaskDraft, TaskField};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AddForm {
    pub task: String,
    pub due_date: String,
    pub priority: String,
    pub start_time: String,
    pub end_time: String,
}

impl AddForm {
    fn into_action(self) -> Result<TaskAction, InputError> {
        if self.task.trim().is_empty() {
            return Err(InputError::EmptyDescription);
        }
        let priority = if self.priority.trim().is_empty() {
            Default::default()
        } else {
            parse_priority(&self.priority)?
        };
        Ok(TaskAction::Add(TaskDraft {
            description: self.task,
            due_date: parse_date(&self.due_date)?,
            priority,
            start_time: parse_time(&self.start_time)?,
            end_time: parse_time(&self.end_time)?,
        }))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RemoveForm {
    pub position: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EditForm {
    pub position: String,
    pub field: String,
    /// Plain text value; also the fallback for every typed input below
    pub value: String,
    pub value_date: Option<String>,
    pub value_priority: Option<String>,
    pub value_time: Option<String>,
}

impl EditForm {
    fn into_action(self) -> Result<TaskAction, InputError> {
        let position = parse_position(&self.position)?;
        let field = parse_field(&self.field)?;
        let raw = match field {
            TaskField::Description => Some(self.value.as_str()),
            TaskField::DueDate => self.value_date.as_deref(),
            TaskField::Priority => self.value_priority.as_deref(),
            TaskField::StartTime | TaskField::EndTime => self.value_time.as_deref(),
        }
        .unwrap_or(self.value.as_str());
        let edit = FieldEdit::parse(field, raw)?;
        Ok(TaskAction::Edit { position, edit })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ClearForm {
    pub confirm: Option<String>,
}

pub const CONFIRM_CLEAR_MESSAGE: &str = "Tick the confirmation box to clear all tasks.";

pub async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, set_cookie) = resolve(&headers);
    let html = {
        let mut sessions = state.sessions.lock().await;
        let session = sessions.get_or_create(id);
        let notice = session.take_notice();
        let rows = display_rows(&session.tasks, state.display.options());
        IndexPage::new(
            chrono::Local::now().date_naive(),
            state.display.show_today,
            &rows,
            notice.as_ref(),
        )
        .render()
    };
    match html {
        Ok(html) => with_cookie(set_cookie, Html(html)),
        Err(e) => {
            tracing::error!("failed to render task page: {}", e);
            with_cookie(
                set_cookie,
                (StatusCode::INTERNAL_SERVER_ERROR, "failed to render page"),
            )
        }
    }
}

pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<AddForm>,
) -> Response {
    run_action(&state, &headers, form.into_action()).await
}

pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<RemoveForm>,
) -> Response {
    let action = parse_position(&form.position).map(|position| TaskAction::Remove { position });
    run_action(&state, &headers, action).await
}

pub async fn edit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<EditForm>,
) -> Response {
    run_action(&state, &headers, form.into_action()).await
}

pub async fn clear(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<ClearForm>,
) -> Response {
    let confirmed = form.confirm.is_some_and(|v| !v.is_empty());
    if !confirmed {
        let (id, set_cookie) = resolve(&headers);
        state
            .sessions
            .lock()
            .await
            .get_or_create(id)
            .set_notice(Notice::error(CONFIRM_CLEAR_MESSAGE));
        return with_cookie(set_cookie, Redirect::to("/"));
    }
    run_action(&state, &headers, Ok(TaskAction::Clear)).await
}

pub async fn list_tasks(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, set_cookie) = resolve(&headers);
    let rows = {
        let mut sessions = state.sessions.lock().await;
        display_rows(&sessions.get_or_create(id).tasks, state.display.options())
    };
    with_cookie(set_cookie, Json(rows))
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

async fn run_action(
    state: &AppState,
    headers: &HeaderMap,
    action: Result<TaskAction, InputError>,
) -> Response {
    let (id, set_cookie) = resolve(headers);
    {
        let mut sessions = state.sessions.lock().await;
        let session = sessions.get_or_create(id);
        match action {
            Ok(action) => {
                session.run(action);
            }
            Err(e) => {
                tracing::debug!(session = %id, "rejected form input: {}", e);
                session.set_notice(Notice::error(e.to_string()));
            }
        }
    }
    with_cookie(set_cookie, Redirect::to("/"))
}
