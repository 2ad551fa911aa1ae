//! Configuration errors.

use thiserror::Error;

/// Failure to produce a usable [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An explicitly loaded file does not exist.
    #[error("Config file not found: {0}")]
    NotFound(String),

    /// A value parsed but failed validation. `field` is the dotted path,
    /// e.g. `server.port`.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// A `${VAR}` reference names an unset variable.
    #[error("Environment variable {0} is referenced in the config but not set")]
    EnvVarNotSet(String),

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_path() {
        let err = ConfigError::NotFound("config/geo.toml".to_string());
        assert_eq!(err.to_string(), "Config file not found: config/geo.toml");
    }

    #[test]
    fn test_invalid_value_from_validator() {
        let err = ConfigError::InvalidValue {
            field: "maps.center_lat".to_string(),
            message: "Latitude must be between -90 and 90".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for maps.center_lat: Latitude must be between -90 and 90"
        );
    }

    #[test]
    fn test_env_var_not_set_names_variable() {
        let err = ConfigError::EnvVarNotSet("GEOEXPLORER_GEMINI_MODEL".to_string());
        assert!(err.to_string().starts_with("Environment variable GEOEXPLORER_GEMINI_MODEL"));
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
        let err = ConfigError::from(io_err);
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().contains("permission denied"));
    }
}
