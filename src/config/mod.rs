#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::ConfigError;
use crate::utils::validation::{validate_api_key, validate_non_empty_string, validate_url, Validate};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-lite";

/// Settings for the generative-language endpoint.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AssistantConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// `<endpoint>/<model>:generateContent`, without the key parameter.
    pub fn request_url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

impl Validate for AssistantConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        validate_url("gemini.endpoint", &self.endpoint)?;
        validate_non_empty_string("gemini.model", &self.model)?;
        validate_api_key(self.api_key.as_deref())?;
        Ok(())
    }
}
