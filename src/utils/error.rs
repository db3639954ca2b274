use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Gemini API key is not set")]
    MissingApiKey,

    #[error("Gemini API key is still the placeholder value")]
    PlaceholderApiKey,

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parsing error: {message}")]
    Parse { message: String },

    #[error("Config file could not be read: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of a single call to the generative-language endpoint.
#[derive(Error, Debug)]
pub enum RemoteCallError {
    #[error("Remote service not configured: {0}")]
    Config(#[from] ConfigError),

    #[error("Request to remote service failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Remote service returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format from remote service: {0}")]
    MalformedEnvelope(String),
}

#[derive(Error, Debug)]
#[error("Unable to get response from AI assistant")]
pub struct AssistantError {
    #[source]
    pub source: RemoteCallError,
}

impl From<RemoteCallError> for AssistantError {
    fn from(source: RemoteCallError) -> Self {
        Self { source }
    }
}

#[derive(Error, Debug)]
pub enum TabStreamError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Remote(#[from] RemoteCallError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl TabStreamError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            TabStreamError::Config(ConfigError::MissingApiKey)
            | TabStreamError::Config(ConfigError::PlaceholderApiKey) => {
                "No Gemini API key configured".to_string()
            }
            TabStreamError::Config(e) => format!("Configuration problem: {}", e),
            TabStreamError::Remote(_) | TabStreamError::Assistant(_) => {
                "Could not get a response".to_string()
            }
            TabStreamError::IoError(e) => format!("File access failed: {}", e),
            TabStreamError::SerializationError(_) => "Could not encode the result".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            TabStreamError::Config(ConfigError::MissingApiKey)
            | TabStreamError::Config(ConfigError::PlaceholderApiKey) => {
                "Set GEMINI_API_KEY or add api_key under [gemini] in the config file"
            }
            TabStreamError::Config(_) => "Check the config file and command line flags",
            TabStreamError::Remote(_) | TabStreamError::Assistant(_) => {
                "Check your network connection and API key, then try again"
            }
            TabStreamError::IoError(_) => "Check that the path exists and is readable",
            TabStreamError::SerializationError(_) => "Retry without --json",
        }
    }
}

pub type Result<T> = std::result::Result<T, TabStreamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_assistant_error_keeps_remote_cause() {
        let err = AssistantError::from(RemoteCallError::Status {
            status: 503,
            message: "Service Unavailable".to_string(),
        });

        assert_eq!(err.to_string(), "Unable to get response from AI assistant");
        let cause = err.source().unwrap().to_string();
        assert!(cause.contains("503"));
    }

    #[test]
    fn test_user_message_for_answer_failure() {
        let err: TabStreamError = AssistantError::from(RemoteCallError::MalformedEnvelope(
            "missing candidates".to_string(),
        ))
        .into();

        assert_eq!(err.user_friendly_message(), "Could not get a response");
    }

    #[test]
    fn test_placeholder_key_message() {
        let err: TabStreamError = ConfigError::PlaceholderApiKey.into();
        assert_eq!(err.user_friendly_message(), "No Gemini API key configured");
        assert!(err.recovery_suggestion().contains("GEMINI_API_KEY"));
    }
}
