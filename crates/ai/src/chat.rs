//! Advisor chat log.
//!
//! Generation calls may overlap: the user can ask again before the previous
//! answer arrives. Only the answer to the most recent question is kept
//! (last-response-wins); stale answers are dropped without cancelling anything.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::result::Advice;

pub const WELCOME_MESSAGE: &str = "Hello! I'm your Inventory Intelligence Agent. I have access to your full SKU catalog, stock levels, and valuation data. How can I help you optimize your inventory today?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sender {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "ai")]
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Handle for an outstanding question; pass it back to [`Conversation::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_message: u64,
    latest_ticket: Option<RequestTicket>,
    pending: bool,
}

impl Conversation {
    /// Start a conversation with the assistant's welcome message.
    pub fn new(at: DateTime<Utc>) -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_message: 0,
            latest_ticket: None,
            pending: false,
        };
        conversation.messages.push(ChatMessage {
            id: "welcome".to_string(),
            sender: Sender::Assistant,
            text: WELCOME_MESSAGE.to_string(),
            timestamp: at,
        });
        conversation
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the latest question is still waiting for an answer.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user question. Blank input is ignored.
    pub fn submit(&mut self, text: &str, at: DateTime<Utc>) -> Option<RequestTicket> {
        if text.trim().is_empty() {
            return None;
        }
        let ticket = RequestTicket(self.next_message);
        self.push(Sender::User, text.to_string(), at);
        self.latest_ticket = Some(ticket);
        self.pending = true;
        Some(ticket)
    }

    /// Record the answer for `ticket`. Returns `false` (and records nothing) when a
    /// newer question has been submitted since.
    pub fn complete(&mut self, ticket: RequestTicket, advice: &Advice, at: DateTime<Utc>) -> bool {
        if self.latest_ticket != Some(ticket) || !self.pending {
            debug!(ticket = ticket.0, "discarding superseded advisor response");
            return false;
        }
        self.push(Sender::Assistant, advice.text.clone(), at);
        self.pending = false;
        true
    }

    fn push(&mut self, sender: Sender, text: String, at: DateTime<Utc>) {
        let id = format!("m-{}", self.next_message);
        self.next_message += 1;
        self.messages.push(ChatMessage {
            id,
            sender,
            text,
            timestamp: at,
        });
    }
}
