use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure of the text-generation collaborator.
///
/// Never surfaces to advisor callers: [`crate::InventoryAdvisor`] converts every
/// variant into a fixed fallback message.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("invalid generation input: {0}")]
    InvalidInput(String),

    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    #[error("generation timed out")]
    Timeout,

    #[error("generation returned no text")]
    EmptyResponse,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("inference failed: {0}")]
    InferenceFailed(String),
}

impl From<reqwest::Error> for AiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AiError::Timeout
        } else if err.is_decode() {
            AiError::InferenceFailed(format!("malformed response: {err}"))
        } else {
            AiError::Transport(err.to_string())
        }
    }
}

/// Where the text of an [`Advice`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Generated,
    Fallback,
}

/// Free-text insight handed back to the presentation layer.
///
/// This is *not* inventory state. It is display text that may be stale relative
/// to the products it was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    pub source: AdviceSource,
}

impl Advice {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Generated,
        }
    }

    pub fn fallback(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            source: AdviceSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == AdviceSource::Fallback
    }
}
