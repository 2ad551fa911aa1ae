//! Configuration validation.

use crate::error::ConfigError;
use crate::schema::Config;

/// Storage backends the binary knows how to build.
pub const STORAGE_BACKENDS: &[&str] = &["sqlite", "memory"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// The first error as a [`ConfigError`], if any.
    pub fn into_error(self) -> Option<ConfigError> {
        self.errors.into_iter().next().map(|e| ConfigError::InvalidValue {
            field: e.path,
            message: e.message,
        })
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_server(config, &mut result);
        Self::validate_storage(config, &mut result);
        Self::validate_gemini(config, &mut result);
        Self::validate_maps(config, &mut result);

        result
    }

    fn validate_server(config: &Config, result: &mut ValidationResult) {
        if config.server.port == 0 {
            result.add_error(ValidationError::new("server.port", "Port cannot be 0"));
        }

        if config.server.host.is_empty() {
            result.add_error(ValidationError::new("server.host", "Host cannot be empty"));
        }

        for origin in &config.server.allowed_origins {
            if !is_http_url(origin) {
                result.add_error(ValidationError::new(
                    "server.allowed_origins",
                    format!("'{}' is not an http(s) origin; wildcards are not allowed", origin),
                ));
            }
        }
    }

    fn validate_storage(config: &Config, result: &mut ValidationResult) {
        let backend = config.storage.backend.as_str();
        if !STORAGE_BACKENDS.contains(&backend) {
            result.add_error(ValidationError::new(
                "storage.backend",
                format!(
                    "Unknown storage backend '{}', valid values: {:?}",
                    backend, STORAGE_BACKENDS
                ),
            ));
        }

        if backend == "memory" {
            result.add_warning(ValidationWarning::new(
                "storage.backend",
                "Memory backend keeps saved locations and API keys only until exit",
            ));
        }

        if backend == "memory" && config.storage.path.is_some() {
            result.add_warning(ValidationWarning::new(
                "storage.path",
                "storage.path is ignored by the memory backend",
            ));
        }
    }

    fn validate_gemini(config: &Config, result: &mut ValidationResult) {
        if config.gemini.model.trim().is_empty() {
            result.add_error(ValidationError::new("gemini.model", "Model cannot be empty"));
        }

        if !is_http_url(&config.gemini.base_url) {
            result.add_error(ValidationError::new(
                "gemini.base_url",
                "base_url must start with http:// or https://",
            ));
        }
    }

    fn validate_maps(config: &Config, result: &mut ValidationResult) {
        if !is_http_url(&config.maps.base_url) {
            result.add_error(ValidationError::new(
                "maps.base_url",
                "base_url must start with http:// or https://",
            ));
        }

        if !(-90.0..=90.0).contains(&config.maps.center_lat) {
            result.add_error(ValidationError::new(
                "maps.center_lat",
                "Latitude must be between -90 and 90",
            ));
        }

        if !(-180.0..=180.0).contains(&config.maps.center_lng) {
            result.add_error(ValidationError::new(
                "maps.center_lng",
                "Longitude must be between -180 and 180",
            ));
        }

        if config.maps.zoom > 21 {
            result.add_warning(ValidationWarning::new(
                "maps.zoom",
                "Zoom above 21 is clamped by most map providers",
            ));
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
