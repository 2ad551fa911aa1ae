//! # GeoExplorer Provider - Gemini
//!
//! Google Gemini `generateContent` client implementing
//! [`TextGenerator`](geoexplorer_protocols::TextGenerator).

mod client;
mod generator;
mod types;

pub use client::{GeminiClient, DEFAULT_BASE_URL};
pub use generator::{GeminiGenerator, DEFAULT_MODEL};
pub use types::*;
