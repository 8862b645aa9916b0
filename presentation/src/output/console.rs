//! Console formatting for finished debates

use colored::Colorize;
use debate_domain::{DebatePhase, DebateRun};

/// Formats debate results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Apply the `[output] color` setting for the whole process.
    ///
    /// Enabled leaves colored's own terminal and `NO_COLOR` detection alone.
    pub fn set_color(enabled: bool) {
        if let Some(forced) = Self::color_override(enabled) {
            colored::control::set_override(forced);
        }
    }

    fn color_override(enabled: bool) -> Option<bool> {
        (!enabled).then_some(false)
    }

    /// Format the whole run as pretty JSON
    pub fn format_json(run: &DebateRun) -> String {
        serde_json::to_string_pretty(run).unwrap_or_else(|_| "{}".to_string())
    }

    /// One-line summary printed after the transcript
    pub fn format_summary(run: &DebateRun) -> String {
        let elapsed = run
            .finished_at
            .map(|end| (end - run.started_at).num_milliseconds() as f64 / 1000.0)
            .unwrap_or_default();

        match run.phase {
            DebatePhase::Complete => format!(
                "{} {} {} in {:.1}s",
                "v".green(),
                run.rounds_completed,
                if run.rounds_completed == 1 { "round" } else { "rounds" },
                elapsed
            )
            .dimmed()
            .to_string(),
            phase => format!("{} debate ended in phase: {}", "x".red(), phase),
        }
    }

    /// Format a fatal error for stderr
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    /// Format a configuration warning for stderr
    pub fn format_warning(message: &str) -> String {
        format!("{} {}", "Warning:".yellow().bold(), message)
    }
}
