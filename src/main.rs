mod agents;
mod cli;
mod error;
mod updates;
mod workflow;

use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;
use updates::UpdateOptions;

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Updates {
            interactive,
            direct,
        } => workflow::execute_updates(&UpdateOptions {
            interactive,
            direct_only: direct,
            verbose: cli.verbose,
        }),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
