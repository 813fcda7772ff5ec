//! Completion request type
//!
//! Fields the API treats as "unset" when zero use the bare type and are left
//! off the wire at their zero value. `temperature`, `top_p` and `logprobs`
//! give 0 a meaning of its own, so they are `Option`s and an explicit
//! `Some(0)` is always sent.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::model::ModelId;
use crate::core::providers::openai::error::{OpenAIError, Result};

/// Most stop sequences the API accepts
pub const MAX_STOP_SEQUENCES: usize = 4;
/// Highest `logprobs` value the API accepts
pub const MAX_LOGPROBS: u8 = 5;
/// Presence / frequency penalty range
pub const PENALTY_RANGE: std::ops::RangeInclusive<f32> = -2.0..=2.0;

fn is_zero_u32(value: &u32) -> bool {
    *value == 0
}

fn is_zero_f32(value: &f32) -> bool {
    *value == 0.0
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Request body for the completions endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest<M> {
    /// ID of the model to use
    pub model: M,

    /// Prompt to generate a completion for. Server default: `<|endoftext|>`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,

    /// Text that comes after the inserted completion
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,

    /// Maximum number of tokens to generate. Server default: 16.
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub max_tokens: u32,

    /// Sampling temperature; prefer tuning this or `top_p`, not both.
    /// Server default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling probability mass. Server default: 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// How many completions to generate. Server default: 1.
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub n: u32,

    /// Ask for incremental delivery. Only forwarded; the client always reads
    /// the complete body.
    #[serde(default, skip_serializing_if = "is_false")]
    pub stream: bool,

    /// Number of most likely alternative tokens to report per position (0-5)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logprobs: Option<u8>,

    /// Echo the prompt back in addition to the completion
    #[serde(default, skip_serializing_if = "is_false")]
    pub echo: bool,

    /// Up to 4 sequences where generation stops
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,

    /// Between -2.0 and 2.0. Server default: 0.
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub presence_penalty: f32,

    /// Between -2.0 and 2.0. Server default: 0.
    #[serde(default, skip_serializing_if = "is_zero_f32")]
    pub frequency_penalty: f32,

    /// Candidates generated server-side; must exceed `n` when both are set.
    /// Server default: 1.
    #[serde(default, skip_serializing_if = "is_zero_u32")]
    pub best_of: u32,

    /// Token ID to bias in [-100, 100]
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub logit_bias: HashMap<String, i32>,

    /// End-user identifier for abuse monitoring
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user: String,
}

impl<M: ModelId> CompletionRequest<M> {
    /// Create a request with every optional field unset
    pub fn new(model: M) -> Self {
        Self {
            model,
            prompt: String::new(),
            suffix: String::new(),
            max_tokens: 0,
            temperature: None,
            top_p: None,
            n: 0,
            stream: false,
            logprobs: None,
            echo: false,
            stop: Vec::new(),
            presence_penalty: 0.0,
            frequency_penalty: 0.0,
            best_of: 0,
            logit_bias: HashMap::new(),
            user: String::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn with_n(mut self, n: u32) -> Self {
        self.n = n;
        self
    }

    pub fn with_stream(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }

    pub fn with_logprobs(mut self, logprobs: u8) -> Self {
        self.logprobs = Some(logprobs);
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Append a stop sequence
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop.push(stop.into());
        self
    }

    pub fn with_presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = penalty;
        self
    }

    pub fn with_frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = penalty;
        self
    }

    pub fn with_best_of(mut self, best_of: u32) -> Self {
        self.best_of = best_of;
        self
    }

    /// Bias a single token ID
    pub fn with_logit_bias(mut self, token_id: impl Into<String>, bias: i32) -> Self {
        self.logit_bias.insert(token_id.into(), bias);
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = user.into();
        self
    }

    /// Check the documented parameter ranges locally.
    ///
    /// Optional: sending a request never calls this. Logit bias values are
    /// left to the server. A NaN or infinite `temperature`/`top_p` is
    /// rejected because JSON has no encoding for it and it would be sent as
    /// `null`.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("temperature", self.temperature), ("top_p", self.top_p)] {
            if let Some(value) = value {
                if !value.is_finite() {
                    return Err(OpenAIError::InvalidRequest(format!(
                        "{} must be a finite number, got {}",
                        name, value
                    )));
                }
            }
        }

        if self.stop.len() > MAX_STOP_SEQUENCES {
            return Err(OpenAIError::InvalidRequest(format!(
                "at most {} stop sequences are allowed, got {}",
                MAX_STOP_SEQUENCES,
                self.stop.len()
            )));
        }

        if let Some(logprobs) = self.logprobs {
            if logprobs > MAX_LOGPROBS {
                return Err(OpenAIError::InvalidRequest(format!(
                    "logprobs must be at most {}, got {}",
                    MAX_LOGPROBS, logprobs
                )));
            }
        }

        for (name, value) in [
            ("presence_penalty", self.presence_penalty),
            ("frequency_penalty", self.frequency_penalty),
        ] {
            if !PENALTY_RANGE.contains(&value) {
                return Err(OpenAIError::InvalidRequest(format!(
                    "{} must be between -2.0 and 2.0, got {}",
                    name, value
                )));
            }
        }

        if self.best_of != 0 && self.n != 0 && self.best_of <= self.n {
            return Err(OpenAIError::InvalidRequest(format!(
                "best_of ({}) must be greater than n ({})",
                self.best_of, self.n
            )));
        }

        Ok(())
    }
}
