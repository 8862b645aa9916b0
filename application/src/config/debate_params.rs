//! Debate parameters: sampling and pacing.
//!
//! [`DebateParams`] groups the static parameters applied to every turn of a
//! [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase) run.

use std::time::Duration;

/// Round count used when the caller does not choose one.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Per-turn parameters shared by both participants.
#[derive(Debug, Clone, PartialEq)]
pub struct DebateParams {
    /// Sampling temperature sent with every chat call.
    pub temperature: f32,
    /// Output token cap sent with every chat call.
    pub max_tokens: u32,
    /// Pause between the first and second turn of a round.
    pub turn_pause: Duration,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            temperature: 0.75,
            max_tokens: 1024,
            turn_pause: Duration::from_millis(300),
        }
    }
}

impl DebateParams {
    // ==================== Builder Methods ====================

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_turn_pause(mut self, pause: Duration) -> Self {
        self.turn_pause = pause;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = DebateParams::default();
        assert_eq!(params.temperature, 0.75);
        assert_eq!(params.max_tokens, 1024);
        assert_eq!(params.turn_pause, Duration::from_millis(300));
    }

    #[test]
    fn test_builder() {
        let params = DebateParams::default()
            .with_temperature(0.2)
            .with_max_tokens(256)
            .with_turn_pause(Duration::ZERO);
        assert_eq!(params.temperature, 0.2);
        assert_eq!(params.max_tokens, 256);
        assert!(params.turn_pause.is_zero());
    }
}
