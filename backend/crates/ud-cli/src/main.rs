//! ud - User directory CLI
//!
//! # Examples
//!
//! ```bash
//! # Create a user
//! ud user create alice alice@example.com
//!
//! # Look one up
//! ud user get 1 --pretty
//! ```

use ud_cli::Cli;

use std::process::ExitCode;

use clap::Parser;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let pretty = cli.pretty;

    match ud_cli::run(cli).await {
        Ok(value) => {
            let output = if pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
