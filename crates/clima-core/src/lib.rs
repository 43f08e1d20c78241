pub mod config;
pub mod error;

pub use config::{
    ApiConfig, Config, LocationConfig, LoggingConfig, ValidationResult,
    DEFAULT_FALLBACK_LATITUDE, DEFAULT_FALLBACK_LONGITUDE,
};
pub use error::{AppError, ConfigError, NetworkError, ReqwestErrorExt, WeatherError};

use anyhow::Result;

/// Build the log filter: `RUST_LOG` wins, then the configured directive, then `info`.
pub fn env_filter(configured: &str) -> tracing_subscriber::EnvFilter {
    let configured = match configured.trim() {
        "" => "info",
        directive => directive,
    };
    tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| tracing_subscriber::EnvFilter::try_new(configured))
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
}

/// Initialize tracing/logging for native builds.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init(filter: &str) -> Result<()> {
    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter(filter))
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Clima core initialized");
    }
    Ok(())
}
