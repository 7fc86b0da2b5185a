//! Centralized error types for the RegDesk application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly banner messages suitable for UI display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

use regdesk_registry::RegistryError;
use regdesk_weather::types::{LocationError, WeatherError};

/// Top-level application error type.
///
/// All errors in the RegDesk application should be convertible to this type.
/// Use `user_message()` to get a UI-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Weather service error: {0}")]
    Weather(#[from] WeatherError),

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for the banner surface.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Weather(e) => weather_user_message(e),
            AppError::Location(e) => location_user_message(e),
            AppError::Registry(RegistryError::NotFound(_)) => "That record no longer exists.",
            AppError::Config(e) => e.user_message(),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

fn weather_user_message(error: &WeatherError) -> &'static str {
    match error {
        WeatherError::EmptyQuery => "Please enter a city name",
        WeatherError::CityNotFound => "City not found",
        WeatherError::Location(e) => location_user_message(e),
        WeatherError::Network(_) => "Unable to reach the weather service. Check your connection.",
        WeatherError::Parse(_) => "Received an unexpected response. Please try again.",
    }
}

fn location_user_message(error: &LocationError) -> &'static str {
    match error {
        LocationError::PermissionDenied => "Location access denied",
        LocationError::ServiceUnavailable | LocationError::Other(_) => {
            "Unable to determine your location."
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Configuration parse error: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
            ConfigError::Parse(_) => "Configuration file is malformed. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_strings_match_the_surface_wording() {
        assert_eq!(
            AppError::from(WeatherError::EmptyQuery).user_message(),
            "Please enter a city name"
        );
        assert_eq!(
            AppError::from(WeatherError::CityNotFound).user_message(),
            "City not found"
        );
        assert_eq!(
            AppError::from(LocationError::PermissionDenied).user_message(),
            "Location access denied"
        );
    }

    #[test]
    fn location_error_nested_in_weather_maps_the_same() {
        let nested = AppError::from(WeatherError::from(LocationError::PermissionDenied));
        assert_eq!(nested.user_message(), "Location access denied");
    }

    #[test]
    fn registry_not_found_conversion() {
        let err = AppError::from(RegistryError::NotFound(3));
        assert!(matches!(err, AppError::Registry(RegistryError::NotFound(3))));
        assert_eq!(err.user_message(), "That record no longer exists.");
    }
}
