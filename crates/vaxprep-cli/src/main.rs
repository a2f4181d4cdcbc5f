//! Vaxprep CLI - vaccination data-preparation tool.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { dir } => commands::init::run(dir, cli.verbose),

        Commands::Assess { file, json, output } => {
            commands::assess::run(file, json, output, cli.verbose)
        }

        Commands::Clean {
            file,
            output,
            format,
            summary,
        } => commands::clean::run(file, output, format, summary, cli.verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
