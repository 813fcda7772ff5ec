//! OpenAI Text Completions Module
//!
//! Typed wrappers around `POST /completions`.

use tracing::debug;

use super::client::Client;
use super::error::{OpenAIError, Result};
use super::routes;
use crate::core::types::context::RequestContext;
use crate::core::types::model::{Completion, FineTunedModel, ModelId};
use crate::core::types::requests::CompletionRequest;
use crate::core::types::responses::CompletionResponse;

impl Client {
    /// Creates a completion for the provided prompt and parameters.
    pub async fn create_completion(
        &self,
        ctx: &RequestContext,
        request: &CompletionRequest<Completion>,
    ) -> Result<CompletionResponse<Completion>> {
        self.completion(ctx, request).await
    }

    /// Creates a completion for the provided prompt and parameters, using a
    /// fine-tuned model.
    pub async fn create_fine_tuned_completion(
        &self,
        ctx: &RequestContext,
        request: &CompletionRequest<FineTunedModel>,
    ) -> Result<CompletionResponse<FineTunedModel>> {
        self.completion(ctx, request).await
    }

    /// Send a completion request for either kind of model.
    ///
    /// The `stream` flag is forwarded as-is; the full body is always awaited.
    pub async fn completion<M: ModelId>(
        &self,
        ctx: &RequestContext,
        request: &CompletionRequest<M>,
    ) -> Result<CompletionResponse<M>> {
        debug!(
            request_id = %ctx.request_id,
            model = %request.model,
            model_variant = %M::VARIANT,
            "creating completion"
        );

        let body = self.post(ctx, routes::COMPLETIONS, request).await?;
        let response: CompletionResponse<M> =
            serde_json::from_slice(&body).map_err(OpenAIError::Deserialize)?;

        debug!(
            request_id = %ctx.request_id,
            completion_id = %response.id,
            choices = response.choices.len(),
            "completion parsed"
        );

        Ok(response)
    }
}
