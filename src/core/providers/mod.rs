//! API providers

pub mod openai;

pub use openai::{Client, ClientConfig, OpenAIError};
