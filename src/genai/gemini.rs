//! Gemini `generateContent` API client.
//!
//! Thin HTTP wrapper for `models/<model>:generateContent`, one endpoint for
//! both text and image generation. Pure parsing in `parse_text_response` /
//! `parse_image_response` for testability.

use std::time::Duration;

use super::config::GenAiConfig;
use super::types::{AspectRatio, GenAi, GenAiError, ImageData};

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// =============================================================================
// CLIENT
// =============================================================================

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    image_model: String,
    chat_model: String,
}

impl GeminiClient {
    /// Build a client from typed config.
    ///
    /// # Errors
    ///
    /// Returns [`GenAiError::HttpClientBuild`] if the HTTP client fails.
    pub fn new(config: GenAiConfig) -> Result<Self, GenAiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| GenAiError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            api_key: config.api_key,
            image_model: config.image_model,
            chat_model: config.chat_model,
        })
    }

    /// Return the configured chat model name.
    #[must_use]
    pub fn chat_model(&self) -> &str {
        &self.chat_model
    }

    async fn generate_content(&self, model: &str, body: &ApiRequest<'_>) -> Result<String, GenAiError> {
        let url = format!("{API_BASE}/models/{model}:generateContent");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| GenAiError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| GenAiError::ApiRequest(e.to_string()))?;

        if status != 200 {
            return Err(GenAiError::ApiResponse { status, body: text });
        }

        Ok(text)
    }
}

#[async_trait::async_trait]
impl GenAi for GeminiClient {
    async fn generate_text(&self, system: &str, message: &str) -> Result<String, GenAiError> {
        let body = ApiRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: message }] }],
            system_instruction: Some(RequestContent { parts: vec![RequestPart { text: system }] }),
            generation_config: None,
        };
        let json = self.generate_content(&self.chat_model, &body).await?;
        parse_text_response(&json)
    }

    async fn generate_image(
        &self,
        prompt: &str,
        aspect_ratio: AspectRatio,
    ) -> Result<Option<ImageData>, GenAiError> {
        let body = ApiRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                image_config: ImageConfig { aspect_ratio: aspect_ratio.as_str() },
            }),
        };
        let json = self.generate_content(&self.image_model, &body).await?;
        parse_image_response(&json)
    }
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ApiRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<RequestContent<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig<'a>>,
}

#[derive(serde::Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(serde::Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    image_config: ImageConfig<'a>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ImageConfig<'a> {
    aspect_ratio: &'a str,
}

#[derive(serde::Deserialize)]
struct ApiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponsePart {
    text: Option<String>,
    inline_data: Option<InlineData>,
}

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct InlineData {
    mime_type: String,
    data: String,
}

// =============================================================================
// PARSING
// =============================================================================

/// Concatenate the text parts of the first candidate. An answer with no
/// text parts yields an empty string.
fn parse_text_response(json: &str) -> Result<String, GenAiError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| GenAiError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

/// Extract the first inline-data part of the first candidate. The image
/// part is not guaranteed to be first — interleaved text parts are skipped.
fn parse_image_response(json: &str) -> Result<Option<ImageData>, GenAiError> {
    let api: ApiResponse = serde_json::from_str(json).map_err(|e| GenAiError::ApiParse(e.to_string()))?;

    let image = api
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|content| {
            content
                .parts
                .into_iter()
                .find_map(|p| p.inline_data)
        })
        .map(|inline| ImageData { mime_type: inline.mime_type, base64: inline.data });

    Ok(image)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
