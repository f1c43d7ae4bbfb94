//! ud-cli library
//!
//! Wires configuration, logging and the SQLite connection into a
//! `UserService` and dispatches CLI commands against it.

pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod user_commands;


pub use app::{execute, run};
pub use cli::{Cli, Commands};
pub use error::{CliError, Result};
pub use user_commands::UserCommands;
