//! Completion response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::logprobs::{FinishReason, LogprobResult};
use super::object::ObjectKind;
use super::usage::Usage;

/// Completion response
///
/// `M` is the same model identifier type the request was built with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionResponse<M> {
    /// Response ID
    pub id: String,

    /// Object type, `text_completion` for this endpoint
    pub object: ObjectKind,

    /// Creation time, seconds since the Unix epoch
    pub created: u64,

    /// Model used
    pub model: M,

    /// Choices in the order the server returned them
    pub choices: Vec<CompletionChoice>,

    /// Token accounting
    #[serde(default)]
    pub usage: Option<Usage>,
}

impl<M> CompletionResponse<M> {
    /// Creation time as a UTC timestamp, `None` if it does not fit
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.created)
            .ok()
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
    }

    /// Text of the first choice
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|choice| choice.text.as_str())
    }
}

/// One generated completion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionChoice {
    /// Generated text
    pub text: String,

    /// Position among the `n` requested completions
    pub index: u32,

    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<FinishReason>,

    /// Per-token log probabilities, present when `logprobs` was requested
    #[serde(default)]
    pub logprobs: Option<LogprobResult>,
}
