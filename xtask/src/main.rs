//! xtask - Development tasks for todo-garden

use clap::{Parser, Subcommand};
use std::fs;
use std::path::Path;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tasks for todo-garden")]
struct Xtask {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the `todo` CLI reference into docs/cli/reference.md
    GenDocs {
        /// Output directory
        #[arg(long, default_value = "docs/cli")]
        out_dir: String,
    },
}

fn main() -> ExitCode {
    let args = Xtask::parse();
    let result = match args.command {
        Commands::GenDocs { out_dir } => generate_cli_docs(Path::new(&out_dir)),
    };
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("xtask failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn generate_cli_docs(docs_dir: &Path) -> std::io::Result<()> {
    let markdown = clap_markdown::help_markdown::<todo_garden::cli::Cli>();

    fs::create_dir_all(docs_dir)?;
    let output_path = docs_dir.join("reference.md");
    fs::write(&output_path, markdown)?;

    println!("Generated CLI documentation at {}", output_path.display());
    Ok(())
}
