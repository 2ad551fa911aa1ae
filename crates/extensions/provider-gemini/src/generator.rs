//! Gemini text generator.

use async_trait::async_trait;
use tracing::error;

use geoexplorer_protocols::error::GenerationError;
use geoexplorer_protocols::TextGenerator;

use crate::client::{GeminiClient, DEFAULT_BASE_URL};
use crate::types::GenerateContentRequest;

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// [`TextGenerator`] backed by Gemini `generateContent`.
pub struct GeminiGenerator {
    client: GeminiClient,
    model: String,
}

impl GeminiGenerator {
    /// Create a generator for the public endpoint and default model.
    pub fn new() -> Result<Self, GenerationError> {
        Self::with_endpoint(DEFAULT_BASE_URL, DEFAULT_MODEL)
    }

    /// Create a generator for a specific endpoint and model.
    pub fn with_endpoint(
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, GenerationError> {
        Ok(Self {
            client: GeminiClient::new(base_url)?,
            model: model.into(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn id(&self) -> &str {
        "gemini"
    }

    fn display_name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GenerationError> {
        if api_key.trim().is_empty() {
            return Err(GenerationError::MissingCredential(
                self.display_name().to_string(),
            ));
        }

        let request = GenerateContentRequest::from_prompt(prompt);
        let response = self
            .client
            .generate_content(api_key, &self.model, &request)
            .await?;

        match response.first_text() {
            Some(text) => Ok(text.to_string()),
            None => {
                error!("Gemini response for model {} carried no candidate text", self.model);
                Err(GenerationError::MalformedResponse(
                    "Response has no candidate text".to_string(),
                ))
            }
        }
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
