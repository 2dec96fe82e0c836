use crate::config::Config;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Default log file name inside the log directory
const LOG_FILE_NAME: &str = "cricket_dashboard.log";

/// Sets up logging for the application.
///
/// Logs always go to a daily-rolling file so command output stays clean;
/// with `debug` enabled they are mirrored to stdout at debug level. The log
/// file location is resolved from, in order: the explicit CLI path, the
/// config file, the platform default.
///
/// Returns the path to the log file and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    cli_log_file: Option<&String>,
    debug: bool,
) -> Result<(String, WorkerGuard), AppError> {
    // Try to load config to get log file path if specified
    let config_log_path = Config::load()
        .await
        .ok()
        .and_then(|config| config.log_file_path);

    let custom_log_path = cli_log_file.or(config_log_path.as_ref());
    let (log_dir, log_file_name) = match custom_log_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path.parent().unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), LOG_FILE_NAME.to_string()),
    };

    // Create log directory if it doesn't exist
    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    // Daily rolling file appender with a non-blocking writer; the guard
    // must outlive the program so buffered logs are flushed
    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let directive = if debug {
        "cricket_dashboard=debug"
    } else {
        "cricket_dashboard=info"
    };
    let file_filter = EnvFilter::from_default_env().add_directive(
        directive
            .parse()
            .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?,
    );

    let registry = tracing_subscriber::registry().with(
        fmt::Layer::new()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_filter(file_filter),
    );

    if debug {
        let stdout_filter = EnvFilter::from_default_env().add_directive(
            directive
                .parse()
                .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?,
        );
        registry
            .with(
                fmt::Layer::new()
                    .with_writer(stdout)
                    .with_ansi(true)
                    .with_filter(stdout_filter),
            )
            .init();
    } else {
        registry.init();
    }

    let log_file_path = format!("{log_dir}/{log_file_name}");
    Ok((log_file_path, guard))
}
