//! `stocklens-ai`
//!
//! **Responsibility:** natural-language insight boundary.
//!
//! - It reads product records but never mutates them.
//! - The language model is an injected [`TextGenerator`] capability.
//! - Every generation failure becomes a fixed fallback message.

pub mod advisor;
pub mod chat;
pub mod config;
pub mod gemini;
pub mod generator;
pub mod prompt;
pub mod result;
pub mod summary;

pub use advisor::InventoryAdvisor;
pub use chat::{ChatMessage, Conversation, RequestTicket, Sender};
pub use config::AdvisorConfig;
pub use gemini::GeminiClient;
pub use generator::{GenerationRequest, ScriptedGenerator, TextGenerator};
pub use result::{Advice, AdviceSource, AiError};
pub use summary::{DigestStatus, InventoryDigest, MAX_DIGEST_PRODUCTS, ProductSummary};
