use anyhow::Result;
use std::sync::Arc;

use regdesk_registry::{Desk, JsonFileBacking, RecordStore};

use crate::Config;

/// Main application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    desk: Desk,
}

impl App {
    /// Create a new application instance: load the config, open the record
    /// store under the config directory, and wire the registration desk.
    ///
    /// # Errors
    /// Fails when the config cannot be loaded or the config directory
    /// cannot be created.
    pub fn new() -> Result<Self> {
        let config = Arc::new(Config::load()?);
        std::fs::create_dir_all(&config.config_dir)?;

        let backing = JsonFileBacking::new(config.records_path());
        let desk = Desk::new(RecordStore::open(Box::new(backing)));

        tracing::info!(
            "Opened record store with {} records",
            desk.store().len()
        );

        Ok(Self { config, desk })
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn desk(&self) -> &Desk {
        &self.desk
    }

    pub fn desk_mut(&mut self) -> &mut Desk {
        &mut self.desk
    }

    /// Shutdown the application
    ///
    /// # Errors
    /// Currently infallible; kept fallible for lifecycle symmetry.
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::info!("Shutting down application");
        Ok(())
    }
}
