//! Generation facade — remote calls normalized to inert values.
//!
//! DESIGN
//! ======
//! The single boundary where generation failures degrade: image calls
//! produce `None`, chat calls produce fallback text. Callers never branch
//! on an error kind — the shell renders absence, not failures. One attempt
//! per call, no retry.

use tracing::warn;

use crate::genai::{AspectRatio, ImageData};
use crate::state::AppState;

/// Persona instruction sent with every conversational call.
pub const WALLY_SYSTEM_INSTRUCTION: &str = "You are 'Wally AI', a helpful creative assistant for a design \
     studio app. You help users generate wallpapers, icons, and fonts. Keep your responses concise and creative.";

/// Reply shown when the model answers with no text.
pub const CHAT_EMPTY_FALLBACK: &str = "I'm sorry, I couldn't process that.";

/// Reply shown when the remote call fails outright.
pub const CHAT_ERROR_FALLBACK: &str = "Error connecting to AI service.";

/// Generate an image for the prompt. Any failure — unconfigured client,
/// transport error, or an answer with no image part — is logged and
/// collapses to `None`.
pub async fn generate_image(state: &AppState, prompt: &str, aspect_ratio: AspectRatio) -> Option<ImageData> {
    let Some(genai) = &state.genai else {
        warn!("image generation skipped: client not configured");
        return None;
    };

    match genai.generate_image(prompt, aspect_ratio).await {
        Ok(Some(image)) => Some(image),
        Ok(None) => {
            warn!(%aspect_ratio, "image generation returned no image part");
            None
        }
        Err(e) => {
            warn!(error = %e, "image generation failed");
            None
        }
    }
}

/// Ask Wally for a conversational reply. Failures collapse to fixed
/// fallback strings — never an error.
pub async fn chat_with_wally(state: &AppState, message: &str) -> String {
    let Some(genai) = &state.genai else {
        warn!("chat skipped: client not configured");
        return CHAT_ERROR_FALLBACK.to_string();
    };

    match genai.generate_text(WALLY_SYSTEM_INSTRUCTION, message).await {
        Ok(text) if text.trim().is_empty() => CHAT_EMPTY_FALLBACK.to_string(),
        Ok(text) => text,
        Err(e) => {
            warn!(error = %e, "chat request failed");
            CHAT_ERROR_FALLBACK.to_string()
        }
    }
}

#[cfg(test)]
#[path = "generation_test.rs"]
mod tests;
