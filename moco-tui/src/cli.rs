use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "moco-tui")]
#[command(about = "Terminal UI for booking time in MOCO")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Subcommand)]
pub enum Commands {
    /// Run against the MOCO API (default)
    Run,
    /// Run in dev mode with local in-memory data
    Dev,
    /// Print config path and create default file if missing
    ConfigPath,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::Run)
    }
}
