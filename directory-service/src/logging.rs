// Logging setup
// The terminal belongs to the UI, so log lines go to a daily rolling file

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

pub const LOG_FILE_PREFIX: &str = "user-directory.log";

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to create log directory: {0}")]
    Directory(#[from] std::io::Error),

    #[error("failed to install subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Install the global subscriber. `RUST_LOG` takes precedence over the
/// configured level. Keep the returned guard alive until exit so buffered
/// lines are flushed.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard, LoggingError> {
    let directory = config.resolved_directory();
    std::fs::create_dir_all(&directory)?;

    let file = rolling::daily(&directory, LOG_FILE_PREFIX);
    let (writer, guard) = non_blocking(file);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(
        level = %config.level,
        directory = %directory.display(),
        "Logging initialized"
    );
    Ok(guard)
}
