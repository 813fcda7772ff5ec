//! # openai-completions
//!
//! Typed client for the OpenAI text completions API.
//!
//! Requests are generic over the kind of model they target, so a request
//! built for a fine-tuned model can only ever be answered with a response
//! typed for a fine-tuned model.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use openai_completions::{Client, Completion, CompletionRequest, RequestContext};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::from_env()?;
//!
//!     let request = CompletionRequest::new(Completion::TextDavinci003)
//!         .with_prompt("Say hi")
//!         .with_max_tokens(5);
//!
//!     let response = client
//!         .create_completion(&RequestContext::new(), &request)
//!         .await?;
//!     println!("{}", response.first_text().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! ## Fine-tuned models
//!
//! ```rust,no_run
//! use openai_completions::{Client, CompletionRequest, FineTunedModel, RequestContext};
//!
//! # async fn run(client: Client) -> openai_completions::Result<()> {
//! let request = CompletionRequest::new(FineTunedModel::new("curie:ft-acme-2023-01-01"))
//!     .with_prompt("Classify: great product ->")
//!     .with_max_tokens(1)
//!     .with_temperature(0.0);
//!
//! let response = client
//!     .create_fine_tuned_completion(&RequestContext::new(), &request)
//!     .await?;
//! assert_eq!(response.model.as_str(), "curie:ft-acme-2023-01-01");
//! # Ok(())
//! # }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod core;
pub mod utils;

// Re-export main types
pub use crate::core::providers::openai::{Client, ClientConfig, OpenAIError, Result};
pub use crate::core::types::{
    Completion, CompletionChoice, CompletionRequest, CompletionResponse, FineTunedModel,
    FinishReason, LogprobResult, ModelId, ModelVariant, ObjectKind, RequestContext, Usage,
};
pub use tokio_util::sync::CancellationToken;
pub use utils::init_tracing;

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
