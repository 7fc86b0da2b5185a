//! Fire-and-forget weather fetches reporting back over a channel.
//!
//! Each user action issues at most one outstanding request; there is no
//! retry and no cancellation. Overlapping requests resolve last-issued-wins:
//! every request is tagged with a monotonically increasing sequence number,
//! completions carry the tag of the request that produced them, and
//! [`WeatherService::is_current`] tells the consumer whether a completion
//! came from the most recently issued request.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::cities::RecentCities;
use crate::geocode::GeocodeClient;
use crate::provider::WeatherProvider;
use crate::types::{Coordinates, LocationError, WeatherError, WeatherReport};

/// Completion of one weather fetch.
#[derive(Debug)]
pub struct WeatherEvent {
    /// Sequence number of the request that produced this event.
    pub seq: u64,
    pub result: Result<WeatherReport, WeatherError>,
}

/// Spawns fetches on the runtime and sends one [`WeatherEvent`] per request.
pub struct WeatherService {
    runtime: tokio::runtime::Handle,
    geocode: GeocodeClient,
    provider: WeatherProvider,
    cities: Arc<Mutex<RecentCities>>,
    tx: Sender<WeatherEvent>,
    seq: AtomicU64,
}

impl WeatherService {
    pub fn new(
        runtime: tokio::runtime::Handle,
        geocode: GeocodeClient,
        provider: WeatherProvider,
        cities: Arc<Mutex<RecentCities>>,
        tx: Sender<WeatherEvent>,
    ) -> Self {
        Self { runtime, geocode, provider, cities, tx, seq: AtomicU64::new(0) }
    }

    /// Look up a city by name, remember it on success, then fetch its
    /// weather. Returns the request's sequence number.
    ///
    /// A blank name completes immediately with
    /// [`WeatherError::EmptyQuery`]; nothing is fetched.
    pub fn request_city(&self, city: &str) -> u64 {
        let seq = self.next_seq();
        let city = city.trim().to_string();
        if city.is_empty() {
            let _ = self.tx.send(WeatherEvent { seq, result: Err(WeatherError::EmptyQuery) });
            return seq;
        }

        let geocode = self.geocode.clone();
        let provider = self.provider.clone();
        let cities = Arc::clone(&self.cities);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let result = fetch_city(&geocode, &provider, &cities, &city).await;
            let _ = tx.send(WeatherEvent { seq, result });
        });
        seq
    }

    /// Fetch weather for a point. Callers resolve the platform position
    /// themselves; a denied or failed position arrives here as a
    /// [`LocationError`] and completes immediately. Returns the request's
    /// sequence number.
    pub fn request_position(&self, position: Result<Coordinates, LocationError>) -> u64 {
        let seq = self.next_seq();
        match position {
            Err(e) => {
                let _ = self.tx.send(WeatherEvent { seq, result: Err(e.into()) });
            }
            Ok(coordinates) => {
                let provider = self.provider.clone();
                let tx = self.tx.clone();
                self.runtime.spawn(async move {
                    let result = provider.fetch(coordinates).await;
                    let _ = tx.send(WeatherEvent { seq, result });
                });
            }
        }
        seq
    }

    /// True when `seq` belongs to the most recently issued request; stale
    /// completions should be dropped by the consumer.
    pub fn is_current(&self, seq: u64) -> bool {
        seq == self.seq.load(Ordering::SeqCst)
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::SeqCst) + 1
    }
}

async fn fetch_city(
    geocode: &GeocodeClient,
    provider: &WeatherProvider,
    cities: &Mutex<RecentCities>,
    city: &str,
) -> Result<WeatherReport, WeatherError> {
    let place = geocode.search(city).await?;
    cities.lock().remember(&place.name);

    let mut report = provider.fetch(place.coordinates).await?;
    report.place = Some(place.name);
    Ok(report)
}
