//! Streaming events for chat-completion calls.
//!
//! [`StreamEvent`] represents individual events in a streaming response,
//! enabling real-time display of model output as it's generated.

/// An event in a streaming chat-completion response.
///
/// Used to bridge infrastructure-level streaming (server-sent event chunks)
/// to the application layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text chunk from the model.
    Delta(String),
    /// The complete response text (signals stream end).
    Completed(String),
    /// An error that occurred during streaming (signals stream end).
    Error(String),
}
