use super::*;
use crate::genai::{GenAi, GenAiError};
use crate::state::test_helpers::{MockGenAi, dummy_image, test_app_state, test_app_state_with_genai};
use std::sync::Arc;

/// Client whose every call fails at the transport layer.
struct FailingGenAi;

#[async_trait::async_trait]
impl GenAi for FailingGenAi {
    async fn generate_text(&self, _system: &str, _message: &str) -> Result<String, GenAiError> {
        Err(GenAiError::ApiRequest("connection reset".into()))
    }

    async fn generate_image(
        &self,
        _prompt: &str,
        _aspect_ratio: AspectRatio,
    ) -> Result<Option<ImageData>, GenAiError> {
        Err(GenAiError::ApiResponse { status: 500, body: "boom".into() })
    }
}

// =========================================================================
// generate_image
// =========================================================================

#[tokio::test]
async fn image_success_passes_through() {
    let state = test_app_state_with_genai(Arc::new(MockGenAi::happy()));
    let image = generate_image(&state, "a neon cityscape", AspectRatio::Tall).await;
    assert_eq!(image, Some(dummy_image()));
}

#[tokio::test]
async fn image_without_inline_part_is_none() {
    let state = test_app_state_with_genai(Arc::new(MockGenAi::new(vec![None], Vec::new())));
    assert!(generate_image(&state, "anything", AspectRatio::Square).await.is_none());
}

#[tokio::test]
async fn image_remote_failure_is_none() {
    let state = test_app_state_with_genai(Arc::new(FailingGenAi));
    assert!(generate_image(&state, "anything", AspectRatio::Wide).await.is_none());
}

#[tokio::test]
async fn image_unconfigured_client_is_none() {
    let state = test_app_state();
    assert!(generate_image(&state, "anything", AspectRatio::Tall).await.is_none());
}

// =========================================================================
// chat_with_wally
// =========================================================================

#[tokio::test]
async fn chat_reply_passes_through() {
    let state = test_app_state_with_genai(Arc::new(MockGenAi::new(Vec::new(), vec!["Try a pastel palette.".into()])));
    assert_eq!(chat_with_wally(&state, "ideas?").await, "Try a pastel palette.");
}

#[tokio::test]
async fn chat_empty_reply_uses_apology() {
    let state = test_app_state_with_genai(Arc::new(MockGenAi::new(Vec::new(), vec!["   ".into()])));
    assert_eq!(chat_with_wally(&state, "ideas?").await, CHAT_EMPTY_FALLBACK);
}

#[tokio::test]
async fn chat_remote_failure_uses_error_fallback() {
    let state = test_app_state_with_genai(Arc::new(FailingGenAi));
    assert_eq!(chat_with_wally(&state, "ideas?").await, CHAT_ERROR_FALLBACK);
}

#[tokio::test]
async fn chat_unconfigured_client_uses_error_fallback() {
    let state = test_app_state();
    assert_eq!(chat_with_wally(&state, "ideas?").await, CHAT_ERROR_FALLBACK);
}

#[test]
fn persona_mentions_wally() {
    assert!(WALLY_SYSTEM_INSTRUCTION.contains("Wally AI"));
    assert!(WALLY_SYSTEM_INSTRUCTION.contains("wallpapers"));
}
