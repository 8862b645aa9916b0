//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.

mod debate;
mod output;
mod participants;

pub use debate::{FileDebateConfig, FileSamplingConfig, MAX_ROUNDS};
pub use output::FileOutputConfig;
pub use participants::{FileEndpointConfig, FileParticipantsConfig};

use debate_application::DebateParams;
use debate_domain::ModelId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub message: String,
}

impl ConfigIssue {
    fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Round count and pacing
    pub debate: FileDebateConfig,
    /// Sampling parameters sent with every call
    pub sampling: FileSamplingConfig,
    /// Endpoint settings for each seat
    pub participants: FileParticipantsConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Parameters for the debate use case.
    pub fn debate_params(&self) -> DebateParams {
        DebateParams::default()
            .with_temperature(self.sampling.temperature)
            .with_max_tokens(self.sampling.max_tokens)
            .with_turn_pause(Duration::from_millis(self.debate.turn_pause_ms))
    }

    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if !(1..=MAX_ROUNDS).contains(&self.debate.rounds) {
            issues.push(ConfigIssue::warning(format!(
                "debate.rounds: {} is outside 1..={}",
                self.debate.rounds, MAX_ROUNDS
            )));
        }

        if self.sampling.max_tokens == 0 {
            issues.push(ConfigIssue::error("sampling.max_tokens must be positive"));
        }

        if !(0.0..=2.0).contains(&self.sampling.temperature) {
            issues.push(ConfigIssue::warning(format!(
                "sampling.temperature: {} is outside 0.0..=2.0",
                self.sampling.temperature
            )));
        }

        for (seat, endpoint) in [
            ("first", &self.participants.first),
            ("second", &self.participants.second),
        ] {
            if endpoint.base_url.trim().is_empty() {
                issues.push(ConfigIssue::error(format!(
                    "participants.{seat}.base_url cannot be empty"
                )));
            }
            if endpoint.api_key.is_none() && endpoint.api_key_env.trim().is_empty() {
                issues.push(ConfigIssue::error(format!(
                    "participants.{seat}: set api_key_env or api_key"
                )));
            }
            if ModelId::try_new(&endpoint.model).is_none() {
                issues.push(ConfigIssue::warning(format!(
                    "participants.{seat}.model: '{}' is not a valid model name",
                    endpoint.model
                )));
            }
        }

        issues
    }
}
