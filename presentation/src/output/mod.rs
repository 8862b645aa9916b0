//! Terminal output

pub mod console;
pub mod transcript;
