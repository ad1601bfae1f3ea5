//! GenAI — Gemini adapter for the studio's generation features.
//!
//! DESIGN
//! ======
//! One remote dependency, one endpoint shape: every call is a
//! `generateContent` POST, differing only in model and payload. The
//! [`GenAi`] trait is the seam the rest of the crate (and tests) program
//! against; [`GeminiClient`] is the only production implementation.

pub mod config;
pub mod gemini;
pub mod types;

pub use gemini::GeminiClient;
pub use types::{AspectRatio, GenAi, GenAiError, ImageData};

/// Build the Gemini-backed client from environment variables.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client fails.
pub fn from_env() -> Result<GeminiClient, GenAiError> {
    let config = config::GenAiConfig::from_env()?;
    GeminiClient::new(config)
}
