//! Error types for AI generation and clipboard export

use thiserror::Error;

/// Failure of a mood-to-gradient generation.
///
/// Whatever the variant, the caller's current configuration is left as it
/// was; a generation result is applied all at once or not at all.
#[derive(Debug, Error)]
pub enum AiGenerationError {
    #[error("no response from AI")]
    EmptyResponse,

    #[error("AI response is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("AI response does not match the gradient schema: {0}")]
    InvalidPayload(String),

    #[error("AI service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("AI request failed: {0}")]
    Transport(String),

    #[error("no API key configured (set {0})")]
    MissingApiKey(String),

    #[error("a generation request is already in flight")]
    Busy,
}

impl AiGenerationError {
    pub(crate) fn payload(msg: impl Into<String>) -> Self {
        AiGenerationError::InvalidPayload(msg.into())
    }
}

/// Failure handing text to a clipboard backend
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write clipboard: {0}")]
    Write(String),
}
