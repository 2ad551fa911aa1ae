//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub gemini: GeminiConfig,

    #[serde(default)]
    pub maps: MapsConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP surface configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origins allowed to call the API cross-origin, e.g.
    /// `http://localhost:3000`. Empty means same-origin only.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            allowed_origins: Vec::new(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Persistent store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// `"sqlite"` or `"memory"`.
    #[serde(default = "default_backend")]
    pub backend: String,

    /// Database path for the sqlite backend. Supports `~`.
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            path: None,
        }
    }
}

fn default_backend() -> String {
    "sqlite".to_string()
}

/// Text-generation provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,

    #[serde(default = "default_gemini_model")]
    pub model: String,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
        }
    }
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

/// Mapping provider and initial map view configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    #[serde(default = "default_maps_base_url")]
    pub base_url: String,

    #[serde(default = "default_center_lat")]
    pub center_lat: f64,

    #[serde(default = "default_center_lng")]
    pub center_lng: f64,

    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            base_url: default_maps_base_url(),
            center_lat: default_center_lat(),
            center_lng: default_center_lng(),
            zoom: default_zoom(),
        }
    }
}

fn default_maps_base_url() -> String {
    "https://maps.googleapis.com/maps/api".to_string()
}

fn default_center_lat() -> f64 {
    38.8920621
}

fn default_center_lng() -> f64 {
    -77.0199124
}

fn default_zoom() -> u8 {
    13
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Directory for daily-rotated log files. Console only when unset.
    #[serde(default)]
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            dir: None,
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.storage.backend, "sqlite");
        assert!(config.storage.path.is_none());
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert!(config.gemini.base_url.starts_with("https://"));
        assert_eq!(config.maps.zoom, 13);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_section_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [gemini]
            model = "gemini-2.0-flash"
        "#,
        )
        .unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        assert_eq!(config.gemini.base_url, default_gemini_base_url());
    }

    #[test]
    fn test_serialize_round_trip_keeps_values() {
        let mut config = Config::default();
        config.maps.center_lat = 51.5;
        let text = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.maps.center_lat, 51.5);
    }
}
