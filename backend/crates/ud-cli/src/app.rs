use crate::{Cli, CliError, Commands, Result, UserCommands, logger};

use ud_config::Config;
use ud_core::UserService;
use ud_db::SqliteConnection;

use log::info;
use serde_json::{Value, json};

/// Load config, initialize logging, open the store and run one command.
pub async fn run(cli: Cli) -> Result<Value> {
    let config = Config::load()?;
    config.validate()?;

    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ud v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let connection = if cli.ephemeral {
        info!("Using in-memory database");
        SqliteConnection::in_memory().await?
    } else {
        SqliteConnection::open(config.database_path()?).await?
    };

    let service = UserService::new(connection);
    let result = execute(&service, cli.command).await;

    service.connection().pool().close().await;

    result
}

/// Dispatch a single command against a service.
pub async fn execute(service: &UserService<SqliteConnection>, command: Commands) -> Result<Value> {
    match command {
        Commands::User { action } => match action {
            UserCommands::Get { id } => {
                let user = service
                    .find_user_by_id(id)
                    .await?
                    .ok_or_else(|| CliError::not_found(id))?;

                Ok(serde_json::to_value(user)?)
            }
            UserCommands::Create { username, email } => {
                service.create_user(&username, &email).await?;

                Ok(json!({ "created": true }))
            }
        },
    }
}
