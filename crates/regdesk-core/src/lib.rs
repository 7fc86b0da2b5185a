pub mod app;
pub mod config;
pub mod error;

pub use app::App;
pub use config::{Config, RegistryConfig, ValidationResult, WeatherConfig};
pub use error::{AppError, ConfigError};

use anyhow::Result;

/// Initialize the core application
///
/// # Errors
/// Currently infallible; kept fallible for call-site symmetry with the rest
/// of startup.
pub fn init() -> Result<()> {
    // Initialize tracing/logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("RegDesk core initialized");
    Ok(())
}
