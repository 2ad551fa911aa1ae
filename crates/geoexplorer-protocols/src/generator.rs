//! Remote text generator protocol definitions.

use async_trait::async_trait;

use crate::error::GenerationError;

/// Core trait for remote text-generation clients.
///
/// Implementations issue exactly one request per call: no retries, no
/// backoff. The credential is supplied per call because it is read from the
/// store on every request.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Returns the generator ID.
    fn id(&self) -> &str;

    /// Human-readable provider name used in configuration messages.
    fn display_name(&self) -> &str;

    /// Send `prompt` and return the single generated text.
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String, GenerationError>;
}
