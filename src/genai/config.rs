//! Generation client configuration parsed from environment variables.

use super::types::GenAiError;

pub const DEFAULT_API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-2.5-flash-image";
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenAiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenAiConfig {
    pub api_key: String,
    pub image_model: String,
    pub chat_model: String,
    pub timeouts: GenAiTimeouts,
}

impl GenAiConfig {
    /// Build typed generation config from environment variables.
    ///
    /// Optional:
    /// - `GENAI_API_KEY_ENV`: names the env var containing the key
    ///   (default `GEMINI_API_KEY`) — that variable itself is required
    /// - `GENAI_IMAGE_MODEL`: default `gemini-2.5-flash-image`
    /// - `GENAI_CHAT_MODEL`: default `gemini-3-flash-preview`
    /// - `GENAI_REQUEST_TIMEOUT_SECS`: default 120
    /// - `GENAI_CONNECT_TIMEOUT_SECS`: default 10
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::MissingApiKey`] when the key variable is unset.
    pub fn from_env() -> Result<Self, GenAiError> {
        let key_var = std::env::var("GENAI_API_KEY_ENV").unwrap_or_else(|_| DEFAULT_API_KEY_VAR.to_string());
        let api_key = std::env::var(&key_var).map_err(|_| GenAiError::MissingApiKey { var: key_var.clone() })?;

        let image_model = std::env::var("GENAI_IMAGE_MODEL").unwrap_or_else(|_| DEFAULT_IMAGE_MODEL.to_string());
        let chat_model = std::env::var("GENAI_CHAT_MODEL").unwrap_or_else(|_| DEFAULT_CHAT_MODEL.to_string());
        let timeouts = GenAiTimeouts {
            request_secs: env_parse_u64("GENAI_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("GENAI_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };

        Ok(Self { api_key, image_model, chat_model, timeouts })
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
