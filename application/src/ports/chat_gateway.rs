//! Chat gateway port
//!
//! Defines the interface for streaming chat completions from a provider.

use async_trait::async_trait;
use debate_domain::{Message, ModelId, StreamEvent};
use thiserror::Error;
use tokio::sync::mpsc;

/// Errors that can occur during chat gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A single chat-completion request.
///
/// Carries the whole history every time; endpoints are stateless.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub model: ModelId,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl ChatRequest {
    pub fn new(model: ModelId, messages: Vec<Message>) -> Self {
        Self {
            model,
            messages,
            temperature: 0.75,
            max_tokens: 1024,
        }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Gateway for streaming chat completions
///
/// This port defines how the application layer talks to a chat endpoint.
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Start a streaming completion for the given request.
    ///
    /// Errors returned here happen before any output was produced; errors
    /// after that point arrive as [`StreamEvent::Error`] on the handle.
    async fn stream_chat(&self, request: &ChatRequest) -> Result<StreamHandle, GatewayError>;
}

/// Handle for receiving streaming events from a chat call.
///
/// Wraps the `mpsc::Receiver<StreamEvent>` an adapter feeds from its reader
/// task. The stream ends after `Completed` or `Error`, or when the sender is
/// dropped.
pub struct StreamHandle {
    pub receiver: mpsc::Receiver<StreamEvent>,
}

impl StreamHandle {
    pub fn new(receiver: mpsc::Receiver<StreamEvent>) -> Self {
        Self { receiver }
    }
}
