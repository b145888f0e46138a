//! `todo config` subcommands implementation

use anyhow::{bail, Result};
use clap::Subcommand;

use crate::session::{self, config::config_path, Config};

#[derive(Subcommand, Debug, PartialEq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Show) | None => show(),
        Some(ConfigCommands::Path) => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        Some(ConfigCommands::Init { force }) => init(force),
    }
}

fn show() -> Result<()> {
    let path = config_path()?;
    let config = match session::load_config()? {
        Some(config) => {
            println!("# {}", path.display());
            config
        }
        None => {
            println!("# {} (not found, showing defaults)", path.display());
            Config::default()
        }
    };
    print!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn init(force: bool) -> Result<()> {
    let path = config_path()?;
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }
    session::save_config(&Config::default())?;
    tracing::info!("wrote default config to {}", path.display());
    println!("✓ Wrote default config to {}", path.display());
    Ok(())
}
