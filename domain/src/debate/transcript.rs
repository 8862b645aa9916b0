//! Rendered debate transcript.
//!
//! The transcript is markdown, appended block by block and never rewound.
//! Free functions in this module render the individual blocks.

use super::participant::Participant;
use serde::{Deserialize, Serialize};

/// Horizontal rule between the preamble and each completed round.
pub const SEPARATOR: &str = "───────────────────────────────────────────────";

/// Final marker appended when every round has finished.
pub const COMPLETION_MARKER: &str = "\n**Debate Complete** ✓";

/// Append-only transcript buffer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    text: String,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_str(&mut self, block: &str) {
        self.text.push_str(block);
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The transcript followed by a reply that is still streaming.
    pub fn snapshot_with(&self, pending: &str) -> String {
        let mut snapshot = String::with_capacity(self.text.len() + pending.len());
        snapshot.push_str(&self.text);
        snapshot.push_str(pending);
        snapshot
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl std::fmt::Display for Transcript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Opening block: topic, round count, both models and any system prompts.
pub fn preamble(question: &str, rounds: u32, first: &Participant, second: &Participant) -> String {
    let mut block = format!(
        "**Debate Started**\n\n\
         **Topic:** {question}\n\
         **Rounds:** {rounds}\n\
         **{}:** {}\n\
         **{}:** {}\n\n",
        first.label(),
        first.model,
        second.label(),
        second.model,
    );
    for participant in [first, second] {
        if let Some(prompt) = &participant.system_prompt {
            block.push_str(&format!(
                "**{} System Prompt:** {prompt}\n\n",
                participant.label()
            ));
        }
    }
    block.push_str(SEPARATOR);
    block.push_str("\n\n");
    block
}

pub fn round_header(round: u32, rounds: u32) -> String {
    format!("### Round {round} of {rounds}\n\n")
}

pub fn turn_header(participant: &Participant) -> String {
    format!("**{}** ({}):\n\n", participant.label(), participant.model)
}

/// Closing text after a finished reply; the second seat also closes the round.
pub fn reply_footer(closes_round: bool) -> String {
    if closes_round {
        format!("\n\n{SEPARATOR}\n\n")
    } else {
        "\n\n".to_string()
    }
}

/// Markdown notice for a user-facing error.
pub fn error_notice(message: &str) -> String {
    format!("**Error:** {message}")
}

/// Inline fragment that replaces a failed turn's remaining output.
pub fn stream_error_fragment(message: &str) -> String {
    format!("\n\n{}", error_notice(message))
}
