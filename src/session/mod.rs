//! Sessions and user configuration
//!
//! A session owns exactly one task list. Nothing here is global: the TUI
//! holds a single [`Session`], the web server holds a [`SessionStore`] keyed
//! by the browser's session cookie.

pub mod config;
mod store;

pub use config::{
    load_config, save_config, Config, DisplayConfig, ServerConfig, ThemeConfig, TuiConfig,
};
pub use store::{Session, SessionId, SessionStore};

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

pub const APP_DIR_NAME: &str = "todo-garden";

/// Overrides the application directory; mostly useful for tests and
/// sandboxed runs.
pub const APP_DIR_ENV: &str = "TODO_GARDEN_CONFIG_DIR";

/// Directory holding `config.toml` and the debug log.
///
/// `$TODO_GARDEN_CONFIG_DIR` if set, otherwise `$XDG_CONFIG_HOME/todo-garden`
/// on Linux and `~/.todo-garden` elsewhere. Created on first use.
pub fn get_app_dir() -> Result<PathBuf> {
    let dir = if let Some(dir) = std::env::var_os(APP_DIR_ENV).filter(|v| !v.is_empty()) {
        PathBuf::from(dir)
    } else if cfg!(target_os = "linux") {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
            .join(APP_DIR_NAME)
    } else {
        dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(format!(".{}", APP_DIR_NAME))
    };

    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}
