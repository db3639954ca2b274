use crate::utils::error::ConfigError;
use url::Url;

/// Key values shipped in sample configs that must never reach the remote service.
pub const PLACEHOLDER_API_KEYS: &[&str] = &["YOUR_GEMINI_API_KEY_HERE", "YOUR_GEMINI_API_KEY"];

pub trait Validate {
    fn validate(&self) -> Result<(), ConfigError>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<(), ConfigError> {
    if url_str.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfigError::InvalidValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects keys that are absent, blank, or left at a known placeholder.
pub fn validate_api_key(key: Option<&str>) -> Result<&str, ConfigError> {
    let key = key.map(str::trim).unwrap_or_default();
    if key.is_empty() {
        return Err(ConfigError::MissingApiKey);
    }
    // "${GEMINI_API_KEY}" left behind when the variable was not exported
    let unresolved = key.starts_with("${") && key.ends_with('}');
    if unresolved || PLACEHOLDER_API_KEYS.contains(&key) {
        return Err(ConfigError::PlaceholderApiKey);
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("gemini.endpoint", "https://example.com").is_ok());
        assert!(validate_url("gemini.endpoint", "http://127.0.0.1:8080/v1").is_ok());
        assert!(validate_url("gemini.endpoint", "").is_err());
        assert!(validate_url("gemini.endpoint", "invalid-url").is_err());
        assert!(validate_url("gemini.endpoint", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("gemini.model", "gemini-pro").is_ok());
        assert!(validate_non_empty_string("gemini.model", "   ").is_err());
    }

    #[test]
    fn test_validate_api_key() {
        assert_eq!(validate_api_key(Some(" abc123 ")).unwrap(), "abc123");
        assert!(matches!(
            validate_api_key(None),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            validate_api_key(Some("")),
            Err(ConfigError::MissingApiKey)
        ));
        assert!(matches!(
            validate_api_key(Some("YOUR_GEMINI_API_KEY_HERE")),
            Err(ConfigError::PlaceholderApiKey)
        ));
        assert!(matches!(
            validate_api_key(Some("YOUR_GEMINI_API_KEY")),
            Err(ConfigError::PlaceholderApiKey)
        ));
        assert!(matches!(
            validate_api_key(Some("${GEMINI_API_KEY}")),
            Err(ConfigError::PlaceholderApiKey)
        ));
    }
}
