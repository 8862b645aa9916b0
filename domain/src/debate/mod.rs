//! Debate domain.
//!
//! - [`participant::Participant`]: who speaks, and in which seat
//! - [`phase::DebatePhase`]: sequencer lifecycle states
//! - [`transcript::Transcript`]: append-only rendered output
//! - [`run::DebateRun`]: everything a finished run leaves behind

pub mod participant;
pub mod phase;
pub mod run;
pub mod transcript;
