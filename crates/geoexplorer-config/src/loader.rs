//! Configuration loader.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ConfigError;
use crate::schema::Config;

static ENV_VAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("valid env var pattern"));

/// Configuration loader with environment variable substitution.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a TOML file.
    ///
    /// A missing file is [`ConfigError::NotFound`]; use
    /// [`ConfigLoader::load_or_default`] to fall back to defaults instead.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Self::load_str(&content)
    }

    /// Load configuration from a string.
    pub fn load_str(content: &str) -> Result<Config, ConfigError> {
        let expanded = Self::expand_env_vars(content)?;
        let config: Config = toml::from_str(&expanded)?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Expand environment variables in the format `${VAR}`. Full-line `#`
    /// comments are copied through untouched.
    fn expand_env_vars(content: &str) -> Result<String, ConfigError> {
        let mut result = String::with_capacity(content.len());

        for line in content.split_inclusive('\n') {
            if line.trim_start().starts_with('#') {
                result.push_str(line);
                continue;
            }

            let mut expanded = line.to_string();
            for cap in ENV_VAR.captures_iter(line) {
                let var_name = &cap[1];
                let var_value = std::env::var(var_name)
                    .map_err(|_| ConfigError::EnvVarNotSet(var_name.to_string()))?;
                expanded = expanded.replace(&cap[0], &var_value);
            }
            result.push_str(&expanded);
        }

        Ok(result)
    }

    /// Expand shell-style paths (e.g., `~/.geoexplorer`).
    pub fn expand_path(path: &str) -> String {
        shellexpand::tilde(path).to_string()
    }

    /// Base directory for GeoExplorer state.
    pub fn data_dir() -> PathBuf {
        dirs::home_dir()
            .map(|h| h.join(".geoexplorer"))
            .unwrap_or_else(|| PathBuf::from(".geoexplorer"))
    }

    /// Resolved sqlite database path for `config`.
    pub fn storage_path(config: &Config) -> PathBuf {
        match config.storage.path {
            Some(ref path) => PathBuf::from(Self::expand_path(path)),
            None => Self::data_dir().join("storage.db"),
        }
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
