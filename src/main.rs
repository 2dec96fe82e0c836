// src/main.rs
mod app;
mod cli;

use clap::Parser;
use cli::Args;
use cricket_dashboard::error::AppError;
use cricket_dashboard::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(args.log_file.as_ref(), args.debug).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    app::run(args).await
}
