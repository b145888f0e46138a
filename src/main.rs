//! Todo Garden - single-user task list with a terminal UI and a web form UI

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use todo_garden::cli::{self, Cli, Commands};
use todo_garden::{logging, tui};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Completion { shell }) => {
            generate(shell, &mut Cli::command(), "todo", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Config { command }) => {
            logging::init_stderr("warn");
            cli::config::run(command)
        }
        #[cfg(feature = "serve")]
        Some(Commands::Serve(args)) => {
            logging::init_stderr("info");
            cli::serve::run(args).await
        }
        None => {
            logging::init_tui()?;
            tui::run().await
        }
    }
}
