//! Debate sequencer lifecycle

use serde::{Deserialize, Serialize};

/// State of a debate run.
///
/// `Idle → Validating → Announcing → RoundInProgress × rounds → Complete`,
/// with `Error` reachable from `Validating`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum DebatePhase {
    Idle,
    Validating,
    Announcing,
    RoundInProgress { round: u32, rounds: u32 },
    Complete,
    Error,
}

impl DebatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebatePhase::Idle => "idle",
            DebatePhase::Validating => "validating",
            DebatePhase::Announcing => "announcing",
            DebatePhase::RoundInProgress { .. } => "round_in_progress",
            DebatePhase::Complete => "complete",
            DebatePhase::Error => "error",
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DebatePhase::RoundInProgress { round, rounds } => {
                write!(f, "round {round}/{rounds}")
            }
            other => f.write_str(other.as_str()),
        }
    }
}
