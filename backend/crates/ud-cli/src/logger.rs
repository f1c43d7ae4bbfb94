use crate::{CliError, Result};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Record, debug};

/// Initialize logger with fern
///
/// # Arguments
/// * `log_level` - Log level filter
/// * `log_file` - Optional path to log file. None = stderr, Some = file output
/// * `colored` - Enable colored output (ignored when logging to file)
///
/// stdout is reserved for command output, so console logging goes to stderr.
pub fn initialize(
    log_level: ud_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> Result<()> {
    let level_filter = log_level.0;

    let dispatch = if let Some(ref log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CliError::logger(format!(
                    "Failed to create log directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)
            .map_err(|e| {
                CliError::logger(format!(
                    "Failed to open log file {}: {}",
                    log_path.display(),
                    e
                ))
            })?;

        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} {origin}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    origin = origin(record),
                ))
            })
            .chain(file)
    } else if colored {
        let colors = ColoredLevelConfig::new()
            .trace(Color::Magenta)
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red);

        Dispatch::new()
            .format(move |out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} {origin}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = colors.color(record.level()),
                    message = message,
                    origin = origin(record),
                ))
            })
            .chain(std::io::stderr())
    } else {
        Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{date} - {level}] {message} {origin}",
                    date = humantime::format_rfc3339(SystemTime::now()),
                    level = record.level(),
                    message = message,
                    origin = origin(record),
                ))
            })
            .chain(std::io::stderr())
    };

    Dispatch::new()
        .level(level_filter)
        // sqlx logs every statement at info
        .level_for("sqlx", log::LevelFilter::Warn)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::logger(format!("Failed to initialize logger: {e}")))?;

    match log_file {
        Some(ref path) => debug!(
            "Logger initialized: level={:?}, file={}",
            level_filter,
            path.display()
        ),
        None => debug!("Logger initialized: level={:?}, stderr", level_filter),
    }

    Ok(())
}

/// `[file:line]` suffix for a log record.
pub(crate) fn origin(record: &Record) -> String {
    format!(
        "[{}:{}]",
        record.file().unwrap_or("unknown"),
        record.line().unwrap_or(0)
    )
}
