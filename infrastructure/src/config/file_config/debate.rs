//! Debate configuration from TOML (`[debate]` and `[sampling]` sections)

use serde::{Deserialize, Serialize};

/// Highest round count offered on the command line.
pub const MAX_ROUNDS: u32 = 8;

/// Raw debate pacing configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Rounds used when `--rounds` is not given (1..=8)
    pub rounds: u32,
    /// Pause between the two turns of a round, in milliseconds
    pub turn_pause_ms: u64,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            rounds: debate_application::DEFAULT_ROUNDS,
            turn_pause_ms: 300,
        }
    }
}

/// Raw sampling configuration, applied to both seats
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSamplingConfig {
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for FileSamplingConfig {
    fn default() -> Self {
        Self {
            temperature: 0.75,
            max_tokens: 1024,
        }
    }
}
