//! Application-level configuration.
//!
//! - [`DebateParams`]: sampling and pacing of a debate run

pub mod debate_params;

pub use debate_params::{DEFAULT_ROUNDS, DebateParams};
