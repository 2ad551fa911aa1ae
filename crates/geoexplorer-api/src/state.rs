//! Application state.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use geoexplorer_core::{RelayClient, Settings};

/// Application state shared across handlers.
pub struct AppState {
    pub relay: RelayClient,
    pub settings: Settings,
    store_id: String,
    allowed_origins: Vec<String>,
    start_time: Instant,
    request_count: AtomicU64,
}

impl AppState {
    pub fn new(relay: RelayClient, settings: Settings, store_id: impl Into<String>) -> Self {
        Self {
            relay,
            settings,
            store_id: store_id.into(),
            allowed_origins: Vec::new(),
            start_time: Instant::now(),
            request_count: AtomicU64::new(0),
        }
    }

    /// Browser origins allowed to call the API cross-origin.
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    /// ID of the storage backend behind the relay.
    pub fn store_id(&self) -> &str {
        &self.store_id
    }

    /// Get uptime.
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Get relay request count.
    pub fn request_count(&self) -> u64 {
        self.request_count.load(Ordering::Relaxed)
    }

    /// Increment relay request count.
    pub fn increment_requests(&self) {
        self.request_count.fetch_add(1, Ordering::Relaxed);
    }
}
