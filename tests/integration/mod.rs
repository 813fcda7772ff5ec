//! Integration tests for openai-completions
//!
//! These tests exercise the public API against a local mock server.

pub mod config_validation_tests;
pub mod types_tests;
