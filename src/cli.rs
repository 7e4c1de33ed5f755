use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "modup",
    about = "modup - Check for and apply Go module updates",
    version,
    author
)]
pub struct Cli {
    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check for available module updates
    Updates {
        /// Pick the updates to apply from an interactive list
        #[arg(short = 'u', long)]
        interactive: bool,

        /// Only report direct dependencies
        #[arg(short, long)]
        direct: bool,
    },
}
