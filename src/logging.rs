use crate::{Error, Result};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Builds the subscriber filter. `RUST_LOG` wins and may hold full
/// directives (`inference_relay=debug,tower_http=info`); otherwise the
/// configured level must be a single plain level.
pub fn log_filter(rust_log: Option<&str>, config_level: &str) -> Result<EnvFilter> {
    if let Some(directives) = rust_log {
        return EnvFilter::try_new(directives)
            .map_err(|e| Error::config(format!("Invalid RUST_LOG '{}': {}", directives, e)));
    }

    config_level.parse::<LevelFilter>().map_err(|_| {
        Error::config(format!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            config_level
        ))
    })?;

    Ok(EnvFilter::new(config_level))
}
