//! Web form UI
//!
//! Every browser gets its own task list, keyed by the `todo_session` cookie.
//! Form posts apply one action, stash the resulting notice in the session and
//! redirect back to `/`, which renders and consumes it.

mod cookie;
mod handlers;
mod page;

pub use cookie::COOKIE_NAME;

use anyhow::Context;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::info;

use crate::session::{Config, DisplayConfig, SessionStore};

#[derive(Clone)]
pub struct AppState {
    sessions: Arc<Mutex<SessionStore>>,
    display: DisplayConfig,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(SessionStore::new(config.server.max_sessions))),
            display: config.display.clone(),
        }
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.lock().await.len()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/tasks/add", post(handlers::add))
        .route("/tasks/remove", post(handlers::remove))
        .route("/tasks/edit", post(handlers::edit))
        .route("/tasks/clear", post(handlers::clear))
        .route("/api/tasks", get(handlers::list_tasks))
        .route("/health", get(handlers::health))
        .with_state(state)
}

pub async fn serve(config: Config) -> anyhow::Result<()> {
    let listen = config.server.listen;
    let app = router(AppState::new(&config));

    let listener = tokio::net::TcpListener::bind(listen)
        .await
        .with_context(|| format!("Failed to bind {}", listen))?;
    info!("todo-garden listening on http://{}", listen);
    println!("todo-garden listening on http://{}", listen);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated with error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to listen for ctrl-c: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
