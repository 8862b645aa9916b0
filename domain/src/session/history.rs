//! Per-participant conversation history

use super::entities::{Message, Role};
use serde::{Deserialize, Serialize};

/// One participant's private, append-only view of a debate.
///
/// Seeded with an optional system message and the question. Afterwards the
/// owner's replies are appended as `assistant` turns and the opponent's
/// replies as `user` turns, so the two histories of a debate diverge after
/// the first round. Entries are never removed or rewritten.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversationHistory {
    messages: Vec<Message>,
}

impl ConversationHistory {
    /// Seed a history with an optional system prompt and the opening question.
    pub fn seeded(system_prompt: Option<&str>, question: &str) -> Self {
        let mut messages = Vec::with_capacity(2);
        if let Some(prompt) = system_prompt {
            messages.push(Message::system(prompt));
        }
        messages.push(Message::user(question));
        Self { messages }
    }

    /// Record a reply produced by the owner of this history.
    pub fn push_own_reply(&mut self, content: impl Into<String>) {
        self.messages.push(Message::assistant(content));
    }

    /// Record a reply produced by the opponent, relabelled as incoming.
    pub fn push_opponent_reply(&mut self, content: impl Into<String>) {
        self.messages.push(Message::user(content));
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of entries with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.messages.iter().filter(|m| m.role == role).count()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }
}
