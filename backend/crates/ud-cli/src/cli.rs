use crate::UserCommands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ud")]
#[command(about = "User directory CLI")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Use a throwaway in-memory database instead of the configured file
    #[arg(long, global = true)]
    pub ephemeral: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// User operations
    User {
        #[command(subcommand)]
        action: UserCommands,
    },
}
