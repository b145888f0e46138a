//! Tracing subscriber setup
//!
//! `TODO_GARDEN_LOG` takes an `EnvFilter` directive and wins over everything
//! else. `TODO_GARDEN_DEBUG` raises the crate to debug level.

use anyhow::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::session::get_app_dir;

pub const LOG_ENV: &str = "TODO_GARDEN_LOG";
pub const DEBUG_ENV: &str = "TODO_GARDEN_DEBUG";
pub const LOG_FILE_NAME: &str = "todo-garden.log";

pub fn debug_enabled() -> bool {
    std::env::var(DEBUG_ENV)
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

fn filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        let level = if debug_enabled() { "debug" } else { default_level };
        EnvFilter::new(format!("todo_garden={}", level))
    })
}

/// Log to stderr. Used by `serve` and the one-shot CLI commands.
pub fn init_stderr(default_level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(default_level))
        .with_writer(std::io::stderr)
        .try_init();
}

/// Log to `<app dir>/todo-garden.log`, truncated on start.
///
/// The TUI owns the terminal, so it only logs when debugging is requested.
pub fn init_tui() -> Result<()> {
    if !debug_enabled() && std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }

    let path = get_app_dir()?.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter("info"))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();

    tracing::info!("logging to {}", path.display());
    Ok(())
}
