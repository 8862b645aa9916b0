//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for a debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Stream the Markdown transcript as it is written
    Transcript,
    /// Print the finished run as JSON
    Json,
}

/// CLI arguments for llm-debate
#[derive(Parser, Debug)]
#[command(name = "llm-debate")]
#[command(author, version, about = "Two LLMs debate a topic, taking turns")]
#[command(long_about = r#"
llm-debate has two chat models argue a topic over a fixed number of rounds.

Each round the first model replies, then the second answers it. Both replies
stream to the terminal as they are generated. Each model only ever sees the
topic, its own system prompt, and the other side's replies.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./debate.toml       Project-level config (or ./.debate.toml)
3. ~/.config/llm-debate/config.toml   Global config
Environment variables prefixed with DEBATE_ override all files,
e.g. DEBATE_DEBATE__ROUNDS=5.

Example:
  llm-debate "Is a hot dog a sandwich?"
  llm-debate -r 2 --system-1 "You are a chef." --system-2 "You are a lawyer." "Is cereal soup?"
  llm-debate --model-1 llama-3.1-8b-instant -o json "Tabs or spaces?"
"#)]
pub struct Cli {
    /// The topic to debate
    pub topic: Option<String>,

    /// System prompt for the first model
    #[arg(long = "system-1", value_name = "TEXT")]
    pub system_1: Option<String>,

    /// System prompt for the second model
    #[arg(long = "system-2", value_name = "TEXT")]
    pub system_2: Option<String>,

    /// Model for the first seat (overrides config)
    #[arg(long = "model-1", value_name = "MODEL")]
    pub model_1: Option<String>,

    /// Model for the second seat (overrides config)
    #[arg(long = "model-2", value_name = "MODEL")]
    pub model_2: Option<String>,

    /// Number of rounds (overrides config)
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..=8))]
    pub rounds: Option<u32>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "transcript")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Also write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
