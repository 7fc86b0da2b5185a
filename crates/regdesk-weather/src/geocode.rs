//! Forward geocoding: resolve a free-text place name to coordinates.
//! Uses the Open-Meteo geocoding API - free, no API key required.

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;

use crate::types::{Coordinates, WeatherError};

/// Production geocoding endpoint.
pub const GEOCODING_URL: &str = "https://geocoding-api.open-meteo.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    // absent entirely when the collaborator knows no such place
    results: Option<Vec<SearchHit>>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    latitude: f64,
    longitude: f64,
    name: String,
}

/// A resolved place: canonical name plus coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlace {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone)]
pub struct GeocodeClient {
    client: Client,
    base_url: String,
}

impl GeocodeClient {
    /// # Errors
    /// Returns [`WeatherError::Network`] when the HTTP client cannot be
    /// built.
    pub fn new() -> Result<Self, WeatherError> {
        let client = Client::builder().timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS)).build()?;
        Ok(Self { client, base_url: GEOCODING_URL.to_string() })
    }

    /// Point the client at a different endpoint (tests, mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Resolve a city name to its best-match coordinates.
    ///
    /// # Errors
    /// [`WeatherError::EmptyQuery`] for a blank name,
    /// [`WeatherError::CityNotFound`] when the response carries no results
    /// array (or an empty one), [`WeatherError::Network`] for transport
    /// failures.
    pub async fn search(&self, city: &str) -> Result<ResolvedPlace, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::EmptyQuery);
        }

        let url = format!("{}/v1/search", self.base_url);
        let response =
            self.client.get(&url).query(&[("name", city), ("count", "1")]).send().await?;
        let body: SearchResponse = response.json().await?;

        let mut hits = body.results.ok_or(WeatherError::CityNotFound)?;
        if hits.is_empty() {
            return Err(WeatherError::CityNotFound);
        }
        let hit = hits.remove(0);
        tracing::info!("Geocoded {} to {}, {}", city, hit.latitude, hit.longitude);

        Ok(ResolvedPlace {
            name: hit.name,
            coordinates: Coordinates { latitude: hit.latitude, longitude: hit.longitude },
        })
    }
}
