//! Domain error types

use thiserror::Error;

/// Reasons a debate input is rejected before any network activity.
///
/// `Display` yields the plain message; use [`ValidationError::render`] for
/// the markdown form shown in the transcript.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required.")]
    Required { field: String },

    #[error("{field} is too long (max {max} characters).")]
    TooLong { field: String, max: usize },

    #[error("{field} contains suspicious content. Please rephrase.")]
    Suspicious { field: String },

    #[error("{field} contains too many special characters.")]
    TooManySpecialCharacters { field: String },

    #[error("Invalid {label} model name.")]
    InvalidModelName { label: String },

    #[error("Rounds must be a positive integer.")]
    InvalidRounds,
}

impl ValidationError {
    /// Render as the user-facing markdown notice.
    pub fn render(&self) -> String {
        crate::debate::transcript::error_notice(&self.to_string())
    }
}
