//! Recently searched cities, persisted as a single JSON document in the
//! config directory.

use std::path::{Path, PathBuf};

/// Persisted list of previously searched city names, oldest first.
#[derive(Debug)]
pub struct RecentCities {
    path: PathBuf,
    cities: Vec<String>,
}

impl RecentCities {
    /// Open the list stored under `config_dir`. Missing or malformed
    /// content reads as an empty list.
    pub fn open(config_dir: &Path) -> Self {
        let path = config_dir.join("recent_cities.json");
        let cities = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("recent cities list is malformed, starting empty: {e}");
                Vec::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("failed to read recent cities: {e}");
                Vec::new()
            }
        };
        Self { path, cities }
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Record a successfully searched city.
    ///
    /// Known names are left where they are; a new name is appended and the
    /// list persisted. Persistence is best-effort: a failed write is logged
    /// and the in-memory list keeps the name.
    pub fn remember(&mut self, name: &str) {
        if self.cities.iter().any(|c| c == name) {
            return;
        }
        self.cities.push(name.to_string());
        if let Err(e) = self.persist() {
            tracing::warn!("failed to persist recent cities: {e}");
        }
    }

    fn persist(&self) -> std::io::Result<()> {
        let raw = serde_json::to_string(&self.cities).map_err(std::io::Error::other)?;
        std::fs::write(&self.path, raw)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn starts_empty_when_nothing_is_stored() {
        let dir = tempdir().unwrap();
        let cities = RecentCities::open(dir.path());
        assert!(cities.cities().is_empty());
    }

    #[test]
    fn remember_appends_and_deduplicates() {
        let dir = tempdir().unwrap();
        let mut cities = RecentCities::open(dir.path());

        cities.remember("Berlin");
        cities.remember("Lagos");
        cities.remember("Berlin");

        assert_eq!(cities.cities(), ["Berlin", "Lagos"]);
    }

    #[test]
    fn remembered_cities_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut cities = RecentCities::open(dir.path());
            cities.remember("Berlin");
        }

        let reopened = RecentCities::open(dir.path());
        assert_eq!(reopened.cities(), ["Berlin"]);
    }

    #[test]
    fn malformed_document_reads_as_empty() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("recent_cities.json"), "][").unwrap();

        let cities = RecentCities::open(dir.path());
        assert!(cities.cities().is_empty());
    }
}
