//! Todo Garden library - task list core shared by the terminal and web UIs

pub mod cli;
pub mod logging;
#[cfg(feature = "serve")]
pub mod server;
pub mod session;
pub mod task;
pub mod tui;
