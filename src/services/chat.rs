//! Chat session — sequential message log with generation routing.
//!
//! DESIGN
//! ======
//! Per-message state machine: `Idle -> Sending -> {ChatReply |
//! ImageGenerating -> ImageComplete}`. On the generation branch a loading
//! placeholder is appended immediately and mutated in place once the
//! result arrives — the message list never reorders. One generation in
//! flight per session, enforced by the `is_generating` flag; there is no
//! cancellation path once a call is issued.

use time::OffsetDateTime;
use tracing::info;

use crate::genai::{AspectRatio, ImageData};
use crate::services::generation;
use crate::services::intent::{Intent, IntentClassifier};
use crate::state::AppState;

/// Seed message every new session opens with.
pub const GREETING: &str = "What shall we create today? Describe any wallpaper or icon style.";

/// Placeholder text while an image is being generated.
pub const GENERATING_TEXT: &str = "Generating your vision...";

/// Final text of a generation message, with or without an image attached.
pub const GENERATION_COMPLETE_TEXT: &str = "Generation complete!";

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStatus {
    Loading,
    Complete,
}

/// One entry in the append-only message log.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    /// Unique within the session, monotonically increasing.
    pub id: u64,
    pub role: ChatRole,
    pub text: String,
    pub image: Option<ImageData>,
    pub timestamp: OffsetDateTime,
    pub status: MessageStatus,
}

/// What a submit call did, for the shell to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input or a generation already in flight; nothing changed.
    Rejected,
    /// A conversational reply was appended.
    Replied,
    /// An image was generated and the preview updated.
    Generated,
    /// The generation branch ran but produced no image.
    GenerationFailed,
}

// =============================================================================
// SESSION
// =============================================================================

pub struct ChatSession {
    messages: Vec<ChatMessage>,
    next_id: u64,
    is_generating: bool,
    preview: Option<ImageData>,
}

impl ChatSession {
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self { messages: Vec::new(), next_id: 1, is_generating: false, preview: None };
        session.push(ChatRole::Ai, GREETING.to_string(), MessageStatus::Complete);
        session
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.is_generating
    }

    /// Most recent successfully generated image, if any.
    #[must_use]
    pub fn preview(&self) -> Option<&ImageData> {
        self.preview.as_ref()
    }

    fn push(&mut self, role: ChatRole, text: String, status: MessageStatus) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            role,
            text,
            image: None,
            timestamp: OffsetDateTime::now_utc(),
            status,
        });
        id
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SUBMIT
// =============================================================================

/// Drive one user submission through the session.
pub async fn submit(
    state: &AppState,
    session: &mut ChatSession,
    classifier: &dyn IntentClassifier,
    input: &str,
) -> SubmitOutcome {
    if input.trim().is_empty() || session.is_generating {
        return SubmitOutcome::Rejected;
    }

    session.push(ChatRole::User, input.to_string(), MessageStatus::Complete);
    session.is_generating = true;

    let outcome = match classifier.classify(input) {
        Intent::GenerateImage => {
            let loading_id = session.push(ChatRole::Ai, GENERATING_TEXT.to_string(), MessageStatus::Loading);
            let result = generation::generate_image(state, input, AspectRatio::Tall).await;

            let generated = result.is_some();
            if let Some(message) = session.messages.iter_mut().find(|m| m.id == loading_id) {
                message.status = MessageStatus::Complete;
                message.text = GENERATION_COMPLETE_TEXT.to_string();
                message.image = result.clone();
            }
            if let Some(image) = result {
                session.preview = Some(image);
            }

            if generated { SubmitOutcome::Generated } else { SubmitOutcome::GenerationFailed }
        }
        Intent::Chat => {
            let reply = generation::chat_with_wally(state, input).await;
            session.push(ChatRole::Ai, reply, MessageStatus::Complete);
            SubmitOutcome::Replied
        }
    };

    session.is_generating = false;
    info!(messages = session.messages.len(), ?outcome, "chat: submit handled");
    outcome
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
