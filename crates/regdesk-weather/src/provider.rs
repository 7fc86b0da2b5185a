//! Current conditions and the daily outlook from the forecast endpoint.

use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::types::{Coordinates, CurrentConditions, DayOutlook, WeatherError, WeatherReport};

/// Production forecast endpoint.
pub const FORECAST_URL: &str = "https://api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Days shown in the outlook strip.
pub const OUTLOOK_DAYS: usize = 5;

const CURRENT_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,wind_speed_10m";
const DAILY_FIELDS: &str = "temperature_2m_max,wind_speed_10m_max,relative_humidity_2m_max";

// Only the consumed subset of the response is modeled; anything else the
// endpoint sends is ignored, and missing sections fail closed.
#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<CurrentSection>,
    daily: Option<DailySection>,
}

#[derive(Debug, Deserialize)]
struct CurrentSection {
    temperature_2m: f64,
    relative_humidity_2m: f64,
    weather_code: i32,
    wind_speed_10m: f64,
}

#[derive(Debug, Default, Deserialize)]
struct DailySection {
    #[serde(default)]
    temperature_2m_max: Vec<f64>,
    #[serde(default)]
    relative_humidity_2m_max: Vec<f64>,
    #[serde(default)]
    wind_speed_10m_max: Vec<f64>,
}

#[derive(Debug, Clone)]
pub struct WeatherProvider {
    client: Client,
    base_url: String,
}

impl WeatherProvider {
    /// # Errors
    /// Returns [`WeatherError::Network`] when the HTTP client cannot be
    /// built.
    pub fn new() -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self { client, base_url: FORECAST_URL.to_string() })
    }

    /// Point the provider at a different endpoint (tests, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch current conditions and the daily outlook for a point.
    ///
    /// The outlook is the first [`OUTLOOK_DAYS`] entries of the daily
    /// arrays, zipped; uneven or missing arrays shorten it rather than
    /// erroring.
    ///
    /// # Errors
    /// [`WeatherError::Network`] for transport failures,
    /// [`WeatherError::Parse`] when the response has no current section.
    pub async fn fetch(&self, coordinates: Coordinates) -> Result<WeatherReport, WeatherError> {
        let url = format!("{}/v1/forecast", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", coordinates.latitude.to_string()),
                ("longitude", coordinates.longitude.to_string()),
                ("current", CURRENT_FIELDS.to_string()),
                ("daily", DAILY_FIELDS.to_string()),
                ("timezone", "auto".to_string()),
            ])
            .send()
            .await?;
        let body: ForecastResponse = response.json().await?;

        let current = body
            .current
            .ok_or_else(|| WeatherError::Parse("response has no current section".to_string()))?;
        let daily = body.daily.unwrap_or_default();

        let outlook: Vec<DayOutlook> = daily
            .temperature_2m_max
            .iter()
            .zip(&daily.relative_humidity_2m_max)
            .zip(&daily.wind_speed_10m_max)
            .take(OUTLOOK_DAYS)
            .map(|((&high_c, &humidity_max_pct), &wind_max_kmh)| DayOutlook {
                high_c,
                humidity_max_pct,
                wind_max_kmh,
            })
            .collect();

        tracing::debug!(
            "Fetched weather for {}, {}: code {}, {} outlook days",
            coordinates.latitude,
            coordinates.longitude,
            current.weather_code,
            outlook.len()
        );

        Ok(WeatherReport {
            place: None,
            current: CurrentConditions {
                temperature_c: current.temperature_2m,
                humidity_pct: current.relative_humidity_2m,
                wind_speed_kmh: current.wind_speed_10m,
                code: current.weather_code,
            },
            outlook,
            fetched_at: Utc::now(),
        })
    }
}
