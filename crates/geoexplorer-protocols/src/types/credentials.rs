//! API credentials record.

use serde::{Deserialize, Serialize};

/// Credentials persisted under `apiKeys`.
///
/// Older records written with the provider-specific field names are still
/// readable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "mappingKey", alias = "googleMapsApiKey", default)]
    pub mapping_key: String,

    #[serde(rename = "textGenKey", alias = "geminiApiKey", default)]
    pub text_gen_key: String,
}

impl Credentials {
    pub fn new(mapping_key: impl Into<String>, text_gen_key: impl Into<String>) -> Self {
        Self {
            mapping_key: mapping_key.into(),
            text_gen_key: text_gen_key.into(),
        }
    }

    /// The mapping-provider key, if set.
    pub fn mapping_key(&self) -> Option<&str> {
        non_empty(&self.mapping_key)
    }

    /// The text-generation key, if set.
    pub fn text_gen_key(&self) -> Option<&str> {
        non_empty(&self.text_gen_key)
    }

    pub fn is_complete(&self) -> bool {
        self.mapping_key().is_some() && self.text_gen_key().is_some()
    }

    /// Display form with every key reduced to its last four characters.
    pub fn masked(&self) -> MaskedCredentials {
        MaskedCredentials {
            mapping_key: self.mapping_key().map(mask_key),
            text_gen_key: self.text_gen_key().map(mask_key),
            complete: self.is_complete(),
        }
    }
}

/// Credentials safe to show outside the process. Unset keys are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaskedCredentials {
    pub mapping_key: Option<String>,
    pub text_gen_key: Option<String>,
    pub complete: bool,
}

/// Hide all but the last four characters of `key`. Keys of four characters
/// or fewer are hidden entirely.
pub fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("****{}", tail)
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
