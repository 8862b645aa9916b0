//! Model identifier value object

use serde::{Deserialize, Serialize};

/// A model identifier accepted by a chat-completion endpoint (Value Object)
///
/// Restricted to alphanumerics plus `-`, `_` and `.` so that it can be
/// echoed into the transcript and request bodies verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModelId(String);

impl ModelId {
    /// Try to create a model identifier, returning None if invalid.
    ///
    /// Surrounding whitespace is trimmed first.
    pub fn try_new(value: impl AsRef<str>) -> Option<Self> {
        let value = value.as_ref().trim();
        if Self::is_valid(value) {
            Some(Self(value.to_string()))
        } else {
            None
        }
    }

    /// Check a raw identifier without allocating.
    pub fn is_valid(value: &str) -> bool {
        !value.is_empty()
            && value
                .chars()
                .all(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '.'))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ModelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ModelId {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_new(&value).ok_or_else(|| format!("invalid model identifier: {value:?}"))
    }
}

impl From<ModelId> for String {
    fn from(model: ModelId) -> Self {
        model.0
    }
}
