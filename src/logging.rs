use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var naming the log file.
pub const LOG_ENV_VAR: &str = "RECORD_CARDS_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled unless `RECORD_CARDS_LOG` names a file path, so
/// stdout only ever carries flow updates. The filter comes from `RUST_LOG`
/// and defaults to `info`.
pub fn init_tracing() {
    let Some(log_path) = std::env::var(LOG_ENV_VAR).ok().filter(|p| !p.is_empty()) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let Ok(file) = std::fs::File::create(&log_path) else {
        eprintln!("Warning: Failed to create log file: {}", log_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
