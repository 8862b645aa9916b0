//! Progress reporting for debate runs

use colored::Colorize;
use debate_application::DebateObserver;
use debate_domain::DebatePhase;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Round-by-round progress bar, drawn on stderr
pub struct RoundProgress {
    bar: ProgressBar,
}

impl RoundProgress {
    pub fn new(rounds: u32) -> Self {
        let bar = ProgressBar::with_draw_target(Some(u64::from(rounds)), ProgressDrawTarget::stderr());
        bar.set_style(Self::round_style());
        bar.set_prefix("Debate");
        bar.set_message("Starting...");
        Self { bar }
    }

    /// A bar that never draws, for tests and non-interactive runs.
    pub fn hidden(rounds: u32) -> Self {
        let progress = Self::new(rounds);
        progress.bar.set_draw_target(ProgressDrawTarget::hidden());
        progress
    }

    fn round_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    pub fn is_finished(&self) -> bool {
        self.bar.is_finished()
    }
}

impl DebateObserver for RoundProgress {
    fn on_phase(&self, phase: &DebatePhase) {
        match phase {
            DebatePhase::RoundInProgress { round, rounds } => {
                self.bar.set_message(format!("Round {} of {}", round, rounds));
            }
            DebatePhase::Complete => {
                self.bar
                    .finish_with_message(format!("{}", "Debate complete!".green()));
            }
            DebatePhase::Error => {
                self.bar.abandon_with_message(format!("{}", "Debate rejected".red()));
            }
            _ => {}
        }
    }

    fn on_snapshot(&self, _snapshot: &str) {
        self.bar.tick();
    }

    fn on_round_complete(&self, round: u32, _rounds: u32) {
        self.bar.set_position(u64::from(round));
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Prints one line to stderr per finished round. Round boundaries always
/// fall on a blank line of the transcript, so the two never interleave
/// mid-line.
pub struct SimpleProgress;

impl SimpleProgress {
    fn round_line(round: u32, rounds: u32) -> String {
        format!("{} Round {}/{} complete", "->".cyan(), round, rounds)
    }
}

impl DebateObserver for SimpleProgress {
    fn on_snapshot(&self, _snapshot: &str) {}

    fn on_round_complete(&self, round: u32, rounds: u32) {
        eprintln!("{}", Self::round_line(round, rounds));
    }
}
