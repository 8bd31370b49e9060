use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

/// Installs the global subscriber: a console stream plus an error-only JSON
/// `error.log` under `log_dir`. The returned guard must be held for the
/// lifetime of the process or buffered file output is lost.
pub fn init(log_dir: String) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(log_dir, "error.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer().with_writer(std::io::stdout);
    let error_file_layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(non_blocking)
        .with_filter(LevelFilter::ERROR);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(console_layer)
        .with(error_file_layer)
        .init();

    Ok(guard)
}
