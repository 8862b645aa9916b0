//! Conversation domain.
//!
//! - [`entities::Message`]: a single role-tagged message
//! - [`history::ConversationHistory`]: one participant's private view
//! - [`stream::StreamEvent`]: incremental output of a streaming call

pub mod entities;
pub mod history;
pub mod stream;
