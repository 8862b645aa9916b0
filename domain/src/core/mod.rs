//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: a validated model identifier
//! - [`error::ValidationError`]: rejected user input

pub mod error;
pub mod model;
