//! Generation types — aspect ratios, inline image payloads, and errors.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by generation client operations.
#[derive(Debug, thiserror::Error)]
pub enum GenAiError {
    /// The required API key environment variable is not set.
    #[error("missing API key: env var {var} not set")]
    MissingApiKey { var: String },

    /// The HTTP request to the generation provider failed.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// The provider returned a non-success HTTP status.
    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    /// The provider response body could not be deserialized.
    #[error("API response parse failed: {0}")]
    ApiParse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// ASPECT RATIO
// =============================================================================

/// Aspect ratio requested for image generation.
///
/// `FourThree` is never requested directly by callers; it exists because
/// device-spec inference may select it and the value is passed through to
/// the image call unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    /// 1:1 — icon packs.
    Square,
    /// 16:9 — landscape wallpapers.
    Wide,
    /// 9:16 — portrait wallpapers (the default for phone screens).
    Tall,
    /// 4:3 — tablets, as inferred from a device model.
    FourThree,
}

impl AspectRatio {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Square => "1:1",
            Self::Wide => "16:9",
            Self::Tall => "9:16",
            Self::FourThree => "4:3",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// IMAGE DATA
// =============================================================================

/// An inline-encoded bitmap returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub mime_type: String,
    pub base64: String,
}

impl ImageData {
    /// Render as a `data:` URL suitable for direct display.
    #[must_use]
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64)
    }
}

// =============================================================================
// GENAI TRAIT
// =============================================================================

/// Provider-neutral async trait for generation calls. Enables mocking in
/// tests.
#[async_trait::async_trait]
pub trait GenAi: Send + Sync {
    /// Generate a conversational reply under the given system instruction.
    ///
    /// # Errors
    ///
    /// Returns a [`GenAiError`] if the request fails or the response is
    /// malformed. An empty reply is `Ok` — the caller decides the fallback.
    async fn generate_text(&self, system: &str, message: &str) -> Result<String, GenAiError>;

    /// Generate an image for the prompt at the requested aspect ratio.
    ///
    /// # Errors
    ///
    /// Returns a [`GenAiError`] on transport or parse failure. `Ok(None)`
    /// means the model answered without an image part.
    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<ImageData>, GenAiError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
