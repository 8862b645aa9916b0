//! Chat endpoint adapters
//!
//! - [`openai_compat::OpenAiCompatibleGateway`]: any `/chat/completions`
//!   endpoint that streams server-sent events (OpenAI, Groq, Ollama, ...)
//! - [`sse`]: incremental parser for the event stream

pub mod openai_compat;
pub mod sse;
