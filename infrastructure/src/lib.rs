//! Infrastructure layer for llm-debate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, plus configuration and credential loading.

pub mod config;
pub mod credentials;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, FileConfig, FileDebateConfig, FileEndpointConfig,
    FileOutputConfig, FileParticipantsConfig, FileSamplingConfig, Severity,
};
pub use credentials::{ApiKey, CredentialError, Credentials};
pub use providers::openai_compat::OpenAiCompatibleGateway;
