//! Test doubles shared by the unit tests in this crate.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use geoexplorer_protocols::error::GenerationError;
use geoexplorer_protocols::TextGenerator;

/// Generator returning a fixed reply and recording every prompt it receives.
pub struct StubGenerator {
    reply: Result<String, String>,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl StubGenerator {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A generator whose every call fails with a transport error.
    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// `(api_key, prompt)` of the most recent call.
    pub fn last(&self) -> Option<(String, String)> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl TextGenerator for StubGenerator {
    fn id(&self) -> &str {
        "stub"
    }

    fn display_name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((api_key.to_string(), prompt.to_string()));
        self.reply.clone().map_err(GenerationError::Network)
    }
}

/// Mapping provider whose lookups always fail.
pub struct FailingMaps;

#[async_trait]
impl geoexplorer_protocols::MapsProvider for FailingMaps {
    fn id(&self) -> &str {
        "failing"
    }

    async fn geocode(
        &self,
        address: &str,
    ) -> Result<geoexplorer_protocols::LatLng, geoexplorer_protocols::GeocodeError> {
        Err(geoexplorer_protocols::GeocodeError::ZeroResults(address.to_string()))
    }

    async fn reverse_geocode(
        &self,
        _point: geoexplorer_protocols::LatLng,
    ) -> Result<String, geoexplorer_protocols::GeocodeError> {
        Err(geoexplorer_protocols::GeocodeError::Network("offline".to_string()))
    }
}
