//! Domain layer for llm-debate
//!
//! This crate contains the core types of a two-participant debate.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! - **Participant**: a model identity plus an optional system prompt,
//!   seated either first ("LLM 1") or second ("LLM 2")
//! - **History**: each participant's private, append-only view of the
//!   conversation. The other participant's replies arrive as `user` turns.
//! - **Transcript**: the rendered, append-only markdown shown to the reader
//! - **Validation**: sanitization of free-text input before any network call

pub mod core;
pub mod debate;
pub mod session;
pub mod validation;

// Re-export commonly used types
pub use core::{error::ValidationError, model::ModelId};
pub use debate::{
    participant::{Participant, Seat},
    phase::DebatePhase,
    run::DebateRun,
    transcript::Transcript,
};
pub use session::{
    entities::{Message, Role},
    history::ConversationHistory,
    stream::StreamEvent,
};
pub use validation::{
    MAX_QUESTION_LENGTH, MAX_SYSTEM_PROMPT_LENGTH, validate_and_sanitize, validate_optional,
};
