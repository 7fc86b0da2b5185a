//! Weather lookup for RegDesk
//!
//! Resolves free-text place names via the Open-Meteo geocoding API, fetches
//! current conditions plus a five-day outlook, buckets condition codes into
//! display categories, and keeps a persisted list of recently searched
//! cities.

pub mod cities;
pub mod geocode;
pub mod provider;
pub mod service;
pub mod types;

pub use cities::RecentCities;
pub use geocode::{GeocodeClient, ResolvedPlace};
pub use provider::{WeatherProvider, OUTLOOK_DAYS};
pub use service::{WeatherEvent, WeatherService};
pub use types::*;
