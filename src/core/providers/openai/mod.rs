//! OpenAI Provider
//!
//! Client for the OpenAI text completions API.

pub mod client;
pub mod completions;
pub mod config;
pub mod error;
pub mod routes;

// Re-exports for easy access
pub use client::Client;
pub use config::ClientConfig;
pub use error::{OpenAIError, Result};
