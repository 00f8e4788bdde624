use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::result::AiError;

/// Opaque text-generation capability (an LLM behind some transport).
///
/// Implementations make no promise about latency, determinism or correctness.
/// The analytics core never depends on a live implementation; tests inject
/// [`ScriptedGenerator`].
#[async_trait]
pub trait TextGenerator: Send + Sync + 'static {
    /// Produce free text from a data `context` and an instruction `prompt`.
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AiError>;
}

/// One recorded call to a [`ScriptedGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub context: String,
    pub prompt: String,
}

/// Deterministic in-memory generator for tests/dev.
///
/// Replies are consumed in order; once the script is exhausted every call fails
/// with [`AiError::Unavailable`].
#[derive(Debug, Default)]
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, String>>>,
    calls: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Ok(text.into()));
        self
    }

    pub fn fail(self, reason: impl Into<String>) -> Self {
        self.push(Err(reason.into()));
        self
    }

    pub fn calls(&self) -> Vec<GenerationRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn push(&self, reply: Result<String, String>) {
        if let Ok(mut replies) = self.replies.lock() {
            replies.push_back(reply);
        }
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, context: &str, prompt: &str) -> Result<String, AiError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(GenerationRequest {
                context: context.to_string(),
                prompt: prompt.to_string(),
            });
        }

        let next = self
            .replies
            .lock()
            .map_err(|_| AiError::Unavailable("script lock poisoned".to_string()))?
            .pop_front();

        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(reason)) => Err(AiError::InferenceFailed(reason)),
            None => Err(AiError::Unavailable("script exhausted".to_string())),
        }
    }
}
