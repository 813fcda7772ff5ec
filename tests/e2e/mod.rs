//! End-to-end tests for openai-completions
//!
//! These tests verify complete user flows and require real API keys.
//! Run with: cargo test -- --ignored
//!
//! Required environment variables:
//! - OPENAI_API_KEY: For OpenAI tests
