//! Participant endpoint configuration from TOML (`[participants]` section)

use serde::{Deserialize, Deserializer, Serialize};

/// One OpenAI-compatible chat endpoint.
///
/// Keys missing from a seat's table fall back to that seat's own default
/// endpoint, never to the other seat's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEndpointConfig {
    /// Base URL up to and including the API version, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Environment variable holding the API key.
    pub api_key_env: String,
    /// Direct API key (prefer `api_key_env`).
    pub api_key: Option<String>,
    /// Model used when none is given on the command line.
    pub model: String,
}

impl FileEndpointConfig {
    /// Groq's OpenAI-compatible endpoint, the default first seat.
    pub fn groq() -> Self {
        Self {
            base_url: "https://api.groq.com/openai/v1".to_string(),
            api_key_env: "GROQ_API_KEY".to_string(),
            api_key: None,
            model: "llama-3.3-70b-versatile".to_string(),
        }
    }

    /// OpenAI's endpoint, the default second seat.
    pub fn openai() -> Self {
        Self {
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Keys actually present in a `[participants.*]` table
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct EndpointOverrides {
    base_url: Option<String>,
    api_key_env: Option<String>,
    api_key: Option<String>,
    model: Option<String>,
}

impl EndpointOverrides {
    fn apply(self, mut endpoint: FileEndpointConfig) -> FileEndpointConfig {
        if let Some(base_url) = self.base_url {
            endpoint.base_url = base_url;
        }
        if let Some(api_key_env) = self.api_key_env {
            endpoint.api_key_env = api_key_env;
        }
        if self.api_key.is_some() {
            endpoint.api_key = self.api_key;
        }
        if let Some(model) = self.model {
            endpoint.model = model;
        }
        endpoint
    }
}

fn first_seat<'de, D: Deserializer<'de>>(deserializer: D) -> Result<FileEndpointConfig, D::Error> {
    EndpointOverrides::deserialize(deserializer).map(|o| o.apply(FileEndpointConfig::groq()))
}

fn second_seat<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<FileEndpointConfig, D::Error> {
    EndpointOverrides::deserialize(deserializer).map(|o| o.apply(FileEndpointConfig::openai()))
}

/// Endpoints for both seats.
///
/// # Example
///
/// ```toml
/// [participants.first]
/// base_url = "https://api.groq.com/openai/v1"
/// api_key_env = "GROQ_API_KEY"
/// model = "llama-3.3-70b-versatile"
///
/// [participants.second]
/// base_url = "https://api.openai.com/v1"
/// api_key_env = "OPENAI_API_KEY"
/// model = "gpt-4o-mini"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParticipantsConfig {
    #[serde(default = "FileEndpointConfig::groq", deserialize_with = "first_seat")]
    pub first: FileEndpointConfig,
    #[serde(default = "FileEndpointConfig::openai", deserialize_with = "second_seat")]
    pub second: FileEndpointConfig,
}

impl Default for FileParticipantsConfig {
    fn default() -> Self {
        Self {
            first: FileEndpointConfig::groq(),
            second: FileEndpointConfig::openai(),
        }
    }
}
