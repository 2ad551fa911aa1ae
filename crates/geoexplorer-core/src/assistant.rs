//! Location descriptions and chat replies.

use std::sync::Arc;

use tracing::debug;

use geoexplorer_protocols::error::{GenerationError, RelayError};
use geoexplorer_protocols::{LatLng, TextGenerator};

use crate::prompts;
use crate::settings::Settings;

/// Builds prompts and forwards them to a [`TextGenerator`] with the stored
/// credential.
#[derive(Clone)]
pub struct Assistant {
    generator: Arc<dyn TextGenerator>,
    settings: Settings,
}

impl Assistant {
    pub fn new(generator: Arc<dyn TextGenerator>, settings: Settings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    /// Describe the location at `point`.
    pub async fn describe(
        &self,
        point: LatLng,
        address: Option<&str>,
    ) -> Result<String, RelayError> {
        let prompt = prompts::describe(point, address);
        self.generate(&prompt).await
    }

    /// Answer `message` about the map centred at `point`.
    pub async fn chat(
        &self,
        message: &str,
        point: LatLng,
        address: Option<&str>,
    ) -> Result<String, RelayError> {
        let prompt = prompts::chat(message, point, address);
        self.generate(&prompt).await
    }

    async fn generate(&self, prompt: &str) -> Result<String, RelayError> {
        let credentials = self.settings.load().await?;
        let api_key = credentials.text_gen_key().ok_or_else(|| {
            GenerationError::MissingCredential(self.generator.display_name().to_string())
        })?;

        debug!(
            "Sending {} character prompt to {}",
            prompt.len(),
            self.generator.id()
        );
        Ok(self.generator.generate(api_key, prompt).await?)
    }
}

#[cfg(test)]
#[path = "assistant_tests.rs"]
mod tests;
