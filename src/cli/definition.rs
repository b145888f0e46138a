//! Command-line definitions

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::config::ConfigCommands;
#[cfg(feature = "serve")]
use super::serve::ServeArgs;

/// Todo Garden - a small task list with a terminal UI and a web form UI
#[derive(Parser)]
#[command(name = "todo")]
#[command(version, about, long_about = None)]
#[command(
    after_help = "Run without a subcommand to open the terminal UI.\n\nENVIRONMENT:\n    TODO_GARDEN_DEBUG=1      Enable debug logging\n    TODO_GARDEN_LOG=<filter> Override the log filter\n    TODO_GARDEN_CONFIG_DIR   Use another config directory"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the task list as a web form UI (one list per browser session)
    #[cfg(feature = "serve")]
    Serve(ServeArgs),

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
