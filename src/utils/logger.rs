use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initialize logging.
///
/// Logs go to stderr at `warn` (`debug` when verbose). Setting
/// `VIDEO2PSP_LOG_DIR` sends them to a daily rolling file instead; the
/// returned guard must live until exit so the file gets flushed.
pub fn init_logging(verbose: bool) -> Option<WorkerGuard> {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    if let Some(log_dir) = std::env::var_os("VIDEO2PSP_LOG_DIR") {
        let log_dir = std::path::PathBuf::from(log_dir);
        let _ = std::fs::create_dir_all(&log_dir);

        let file_appender = tracing_appender::rolling::daily(&log_dir, "video2psp.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::fmt()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_env_filter(filter)
            .init();

        tracing::info!("video2psp logging initialized");
        Some(guard)
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
            .with_env_filter(filter)
            .init();
        None
    }
}
