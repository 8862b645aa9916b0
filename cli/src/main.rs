//! CLI entrypoint for llm-debate
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use debate_application::{DebateHandle, RunDebateInput, RunDebateUseCase};
use debate_domain::{DebatePhase, DebateRun};
use debate_infrastructure::{
    ConfigLoader, Credentials, FileConfig, OpenAiCompatibleGateway, Severity,
};
use debate_presentation::{
    Cli, ConsoleFormatter, OutputFormat, RoundProgress, SimpleProgress, TranscriptRenderer,
};
use std::fs::OpenOptions;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Exit status when the debate input is rejected
const EXIT_INVALID_INPUT: u8 = 2;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    info!("Starting llm-debate");

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    // Keys are read once, here, and never again
    let credentials = Credentials::from_env(&config.participants)?;

    // === Dependency Injection ===
    let first = OpenAiCompatibleGateway::new(&config.participants.first.base_url, credentials.first);
    let second =
        OpenAiCompatibleGateway::new(&config.participants.second.base_url, credentials.second);
    let use_case = Arc::new(
        RunDebateUseCase::new(Arc::new(first), Arc::new(second))
            .with_params(config.debate_params()),
    );

    let rounds = cli.rounds.unwrap_or(config.debate.rounds);
    let input = RunDebateInput::new(
        cli.topic.clone().unwrap_or_default(),
        cli.model_1
            .clone()
            .unwrap_or_else(|| config.participants.first.model.clone()),
        cli.model_2
            .clone()
            .unwrap_or_else(|| config.participants.second.model.clone()),
    )
    .with_system_prompts(
        cli.system_1.clone().unwrap_or_default(),
        cli.system_2.clone().unwrap_or_default(),
    )
    .with_rounds(rounds);

    let show_progress = !cli.quiet && config.output.show_progress;
    let handle = use_case.spawn(input);

    let run = match cli.output {
        OutputFormat::Transcript => stream_transcript(handle, show_progress).await?,
        OutputFormat::Json => {
            let run = wait_with_progress(handle, show_progress.then(|| RoundProgress::new(rounds)))
                .await?;
            println!("{}", ConsoleFormatter::format_json(&run));
            run
        }
    };

    if run.phase == DebatePhase::Error {
        return Ok(ExitCode::from(EXIT_INVALID_INPUT));
    }

    if !cli.quiet && cli.output == OutputFormat::Transcript {
        eprintln!("{}", ConsoleFormatter::format_summary(&run));
    }

    Ok(ExitCode::SUCCESS)
}

/// Initialize logging based on verbosity level.
///
/// Logs go to stderr so stdout carries only the transcript. With
/// `--log-file` they are also appended to that file.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

/// Load and check configuration, honoring `--config` and `--no-config`.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let mut errors = Vec::new();
    for issue in config.validate() {
        match issue.severity {
            Severity::Warning => {
                warn!("{}", issue.message);
                eprintln!("{}", ConsoleFormatter::format_warning(&issue.message));
            }
            Severity::Error => errors.push(issue.message),
        }
    }
    if !errors.is_empty() {
        bail!("Invalid configuration: {}", errors.join("; "));
    }

    Ok(config)
}

/// Print the transcript as it streams, with optional per-round lines.
async fn stream_transcript(mut handle: DebateHandle, show_progress: bool) -> Result<DebateRun> {
    let renderer = TranscriptRenderer::stdout();
    let progress = show_progress.then_some(SimpleProgress);

    while let Some(update) = handle.recv().await {
        update.deliver(&renderer);
        if let Some(progress) = &progress {
            update.deliver(progress);
        }
    }

    renderer.finish().context("Failed to write transcript")?;
    Ok(handle.finish().await?)
}

/// Wait for the run to end, driving the progress bar if there is one.
async fn wait_with_progress(
    mut handle: DebateHandle,
    progress: Option<RoundProgress>,
) -> Result<DebateRun> {
    while let Some(update) = handle.recv().await {
        if let Some(progress) = &progress {
            update.deliver(progress);
        }
    }
    Ok(handle.finish().await?)
}
