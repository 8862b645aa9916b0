//! Presentation layer for llm-debate
//!
//! This crate contains the CLI definition, the streaming transcript
//! renderer, result formatters and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::transcript::TranscriptRenderer;
pub use progress::reporter::{RoundProgress, SimpleProgress};
