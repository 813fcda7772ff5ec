//! Log probability and finish reason types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::core::providers::openai::error::{OpenAIError, Result};

/// Finish reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    /// Natural stop or a stop sequence was hit
    Stop,
    /// `max_tokens` or the context length was reached
    Length,
    /// Content filter
    ContentFilter,
    /// Any tag this client does not know about
    #[serde(other)]
    Other,
}

/// Per-token log probabilities of a completion choice.
///
/// The four arrays are parallel and should all have one entry per token.
/// Input is kept exactly as received; use [`LogprobResult::len_check`] to
/// enforce the equal-length contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogprobResult {
    /// Token text
    pub tokens: Vec<String>,

    /// Log probability of each sampled token; the first echoed token has none
    pub token_logprobs: Vec<Option<f32>>,

    /// Most likely alternatives at each position, token to log probability
    pub top_logprobs: Vec<Option<HashMap<String, f32>>>,

    /// Character offset of each token into the full text
    pub text_offset: Vec<u32>,
}

impl LogprobResult {
    /// Number of tokens covered
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Fail if the parallel arrays differ in length
    pub fn len_check(&self) -> Result<()> {
        let n = self.tokens.len();
        if self.token_logprobs.len() == n
            && self.top_logprobs.len() == n
            && self.text_offset.len() == n
        {
            return Ok(());
        }

        Err(OpenAIError::LogprobLengthMismatch {
            tokens: n,
            token_logprobs: self.token_logprobs.len(),
            top_logprobs: self.top_logprobs.len(),
            text_offset: self.text_offset.len(),
        })
    }
}
