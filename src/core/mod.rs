//! Core functionality
//!
//! Data model and transport for the completions API.

pub mod providers;
pub mod types;
