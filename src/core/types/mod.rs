//! Core type definition module
//!
//! Request, response, model identifier and call context types

pub mod context;
pub mod model;
pub mod requests;
pub mod responses;

// Re-export all public types
pub use context::RequestContext;
pub use model::{Completion, FineTunedModel, ModelId, ModelVariant};
pub use requests::CompletionRequest;
pub use responses::*;
