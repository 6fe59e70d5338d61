//! Support chat widget state.
//!
//! The transcript is append-only for the lifetime of the page; nothing in
//! this module can remove or reorder messages.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::util::validation::trim_form_text;

pub const GREETING: &str = "Hello! I'm here to help with your signup. What would you like to know?";

pub const CANNED_REPLIES: [&str; 5] = [
    "I can help with that! What specific issue are you facing?",
    "For signup issues, please check that all fields are filled correctly.",
    "You can contact support at help@connect.com for immediate assistance.",
    "Make sure your password is at least 6 characters long.",
    "Thank you for your message! How else can I help you?",
];

/// Pick one canned reply uniformly at random.
pub fn pick_canned_reply<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    CANNED_REPLIES.choose(rng).copied().unwrap_or(CANNED_REPLIES[0])
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Render key only.
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
}

impl ChatMessage {
    #[must_use]
    pub fn user(text: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), text: text.into(), is_bot: false }
    }

    #[must_use]
    pub fn bot(text: impl Into<String>) -> Self {
        Self { id: Uuid::new_v4(), text: text.into(), is_bot: true }
    }
}

/// Chat panel visibility, the pending draft, and the transcript.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    pub is_open: bool,
    pub draft: String,
    transcript: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { is_open: false, draft: String::new(), transcript: vec![ChatMessage::bot(GREETING)] }
    }
}

impl ChatState {
    pub fn toggle_open(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    #[must_use]
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Move a non-blank draft into the transcript as a user message.
    ///
    /// The draft is appended untrimmed and then cleared. Returns `None` and
    /// leaves the draft in place when it is empty or whitespace-only.
    pub fn take_draft(&mut self) -> Option<&ChatMessage> {
        if trim_form_text(&self.draft).is_empty() {
            return None;
        }
        let text = std::mem::take(&mut self.draft);
        self.transcript.push(ChatMessage::user(text));
        self.transcript.last()
    }

    pub fn push_bot_reply(&mut self, text: impl Into<String>) {
        self.transcript.push(ChatMessage::bot(text));
    }
}
