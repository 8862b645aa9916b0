//! Application layer for llm-debate
//!
//! This crate contains the debate use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ROUNDS, DebateParams};
pub use ports::{
    chat_gateway::{ChatGateway, ChatRequest, GatewayError, StreamHandle},
    observer::{ChannelObserver, DebateObserver, DebateUpdate, NoProgress},
};
pub use use_cases::run_debate::{DebateHandle, RunDebateInput, RunDebateUseCase};
pub use use_cases::token_stream::token_stream;
