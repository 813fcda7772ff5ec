//! Response types
//!
//! Data structures parsed from the completions endpoint

mod completion;
mod logprobs;
mod object;
mod usage;

pub use completion::{CompletionChoice, CompletionResponse};
pub use logprobs::{FinishReason, LogprobResult};
pub use object::ObjectKind;
pub use usage::Usage;
