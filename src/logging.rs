use crate::config::LoggingConfig;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_FILE_NAME: &str = "order_portal.log";

/// Console output plus a plain-text copy in `log_dir/order_portal.log`.
///
/// Calling this twice keeps the first subscriber.
pub fn initialize(config: &LoggingConfig, log_dir: &Path) -> anyhow::Result<()> {
    std::fs::create_dir_all(log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join(LOG_FILE_NAME))?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|e| {
        eprintln!("invalid log level '{}': {}, using info", config.level, e);
        EnvFilter::new("info")
    });

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Logging to {}", log_dir.join(LOG_FILE_NAME).display());
    }
    Ok(())
}
