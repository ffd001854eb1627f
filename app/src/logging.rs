use crate::EnvPaths;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{
    fmt::{self, time::OffsetTime},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Initialize the logging system with file output under the data
/// directory.
pub fn init_logging(
    env_paths: &EnvPaths,
) -> Result<tracing_appender::non_blocking::WorkerGuard, Box<dyn std::error::Error>> {
    let logs_dir = env_paths.data_path.join("logs");
    std::fs::create_dir_all(&logs_dir)?;

    // New log file daily
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("mgmt-console")
        .filename_suffix("log")
        .build(&logs_dir)?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let timer = OffsetTime::local_rfc_3339().unwrap_or_else(|_| {
        // Fallback to UTC if the local offset cannot be determined
        OffsetTime::new(
            time::UtcOffset::UTC,
            time::format_description::well_known::Rfc3339,
        )
    });

    tracing_subscriber::registry()
        // File layer with full details
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_timer(timer.clone())
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        // Console layer for development
        .with(
            fmt::layer()
                .with_timer(timer)
                .with_target(false)
                .with_file(false)
                .with_line_number(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    tracing::info!("Logging system initialized");
    tracing::info!("Log files are being written to: {:?}", logs_dir);

    Ok(guard)
}

/// Log application shutdown
pub fn log_shutdown() {
    tracing::info!("=== Management console access-control shutdown complete ===");
}
