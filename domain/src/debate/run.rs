//! Outcome of a single debate invocation

use super::phase::DebatePhase;
use super::transcript::Transcript;
use crate::session::history::ConversationHistory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a debate run leaves behind.
///
/// Nothing here outlives the process; the run is returned to the caller and
/// dropped once it has been printed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateRun {
    pub phase: DebatePhase,
    pub transcript: Transcript,
    /// History seen by the first seat.
    pub first_history: ConversationHistory,
    /// History seen by the second seat.
    pub second_history: ConversationHistory,
    pub rounds_completed: u32,
    /// Rendered validation error, if the run never started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
}

impl DebateRun {
    pub fn new() -> Self {
        Self {
            phase: DebatePhase::Idle,
            transcript: Transcript::new(),
            first_history: ConversationHistory::default(),
            second_history: ConversationHistory::default(),
            rounds_completed: 0,
            error: None,
            started_at: Utc::now(),
            finished_at: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.phase == DebatePhase::Complete
    }

    /// Mark the run finished in the given terminal phase.
    pub fn finish(&mut self, phase: DebatePhase) {
        self.phase = phase;
        self.finished_at = Some(Utc::now());
    }
}

impl Default for DebateRun {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_run_is_idle() {
        let run = DebateRun::new();
        assert_eq!(run.phase, DebatePhase::Idle);
        assert!(run.transcript.is_empty());
        assert!(run.finished_at.is_none());
    }

    #[test]
    fn test_finish_sets_timestamp() {
        let mut run = DebateRun::new();
        run.finish(DebatePhase::Complete);
        assert!(run.is_complete());
        assert!(run.finished_at.unwrap() >= run.started_at);
    }

    #[test]
    fn test_error_omitted_from_json_when_absent() {
        let json = serde_json::to_value(DebateRun::new()).unwrap();
        assert!(json.get("error").is_none());
        assert_eq!(json["phase"]["phase"], "idle");
    }
}
