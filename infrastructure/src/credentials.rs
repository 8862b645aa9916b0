//! API credentials for both seats
//!
//! Keys are resolved exactly once at process start and handed to the
//! gateways by value. Nothing reads the environment after that.

use crate::config::{FileEndpointConfig, FileParticipantsConfig};
use thiserror::Error;

/// Errors that can occur while resolving credentials
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Missing API key(s): {}", .missing.join(", "))]
    Missing { missing: Vec<String> },
}

/// A bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Keys for the first and second seat.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub first: ApiKey,
    pub second: ApiKey,
}

impl Credentials {
    /// Resolve both keys from config, falling back to the process environment.
    pub fn from_env(participants: &FileParticipantsConfig) -> Result<Self, CredentialError> {
        Self::resolve(participants, |name| std::env::var(name).ok())
    }

    /// Resolve both keys with a custom variable lookup.
    ///
    /// A direct `api_key` wins over `api_key_env`. Blank values count as
    /// missing. Every missing key is reported, not just the first.
    pub fn resolve(
        participants: &FileParticipantsConfig,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, CredentialError> {
        let first = Self::key_for(&participants.first, &lookup);
        let second = Self::key_for(&participants.second, &lookup);

        match (first, second) {
            (Some(first), Some(second)) => Ok(Self { first, second }),
            (first, second) => {
                let mut missing = Vec::new();
                if first.is_none() {
                    missing.push(Self::describe(&participants.first));
                }
                if second.is_none() {
                    missing.push(Self::describe(&participants.second));
                }
                Err(CredentialError::Missing { missing })
            }
        }
    }

    fn key_for(
        endpoint: &FileEndpointConfig,
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Option<ApiKey> {
        endpoint
            .api_key
            .clone()
            .or_else(|| lookup(&endpoint.api_key_env))
            .filter(|key| !key.trim().is_empty())
            .map(ApiKey::new)
    }

    fn describe(endpoint: &FileEndpointConfig) -> String {
        if endpoint.api_key_env.is_empty() {
            format!("api_key for {}", endpoint.base_url)
        } else {
            endpoint.api_key_env.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> + use<> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_resolves_both_from_env() {
        let participants = FileParticipantsConfig::default();
        let creds = Credentials::resolve(
            &participants,
            env(&[("GROQ_API_KEY", "gsk-1"), ("OPENAI_API_KEY", "sk-2")]),
        )
        .unwrap();
        assert_eq!(creds.first.expose(), "gsk-1");
        assert_eq!(creds.second.expose(), "sk-2");
    }

    #[test]
    fn test_missing_one_key_is_fatal() {
        let participants = FileParticipantsConfig::default();
        let err = Credentials::resolve(&participants, env(&[("GROQ_API_KEY", "gsk-1")]))
            .unwrap_err();
        assert_eq!(
            err,
            CredentialError::Missing {
                missing: vec!["OPENAI_API_KEY".to_string()]
            }
        );
    }

    #[test]
    fn test_reports_every_missing_key() {
        let participants = FileParticipantsConfig::default();
        let err = Credentials::resolve(&participants, env(&[("OPENAI_API_KEY", "  ")]))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing API key(s): GROQ_API_KEY, OPENAI_API_KEY"
        );
    }

    #[test]
    fn test_direct_key_wins() {
        let mut participants = FileParticipantsConfig::default();
        participants.first.api_key = Some("direct".to_string());
        let creds = Credentials::resolve(
            &participants,
            env(&[("GROQ_API_KEY", "from-env"), ("OPENAI_API_KEY", "sk")]),
        )
        .unwrap();
        assert_eq!(creds.first.expose(), "direct");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let key = ApiKey::new("sk-secret");
        assert_eq!(format!("{:?}", key), "ApiKey(***)");
    }
}
