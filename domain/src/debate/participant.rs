//! Debate participants

use crate::core::model::ModelId;
use serde::{Deserialize, Serialize};

/// Speaking position in a debate. `First` always opens each round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Display label used in headers and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Seat::First => "LLM 1",
            Seat::Second => "LLM 2",
        }
    }

    /// Field name used when validating this seat's system prompt.
    pub fn system_prompt_field(&self) -> &'static str {
        match self {
            Seat::First => "LLM 1 System Prompt",
            Seat::Second => "LLM 2 System Prompt",
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated debate participant (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub seat: Seat,
    pub model: ModelId,
    pub system_prompt: Option<String>,
}

impl Participant {
    pub fn new(seat: Seat, model: ModelId, system_prompt: Option<String>) -> Self {
        Self {
            seat,
            model,
            system_prompt,
        }
    }

    pub fn label(&self) -> &'static str {
        self.seat.label()
    }
}
