//! Send one completion request using `OPENAI_*` environment variables.
//!
//! Run with: cargo run --example completion -- "Your prompt"

use openai_completions::{Client, Completion, CompletionRequest, RequestContext, init_tracing};
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let prompt = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "Say this is a test".to_string());

    let client = Client::from_env()?;
    let request = CompletionRequest::new(Completion::Gpt35TurboInstruct)
        .with_prompt(prompt)
        .with_max_tokens(32)
        .with_temperature(0.0);

    let ctx = RequestContext::new().with_timeout(Duration::from_secs(30));
    let response = client.create_completion(&ctx, &request).await?;

    info!(
        id = %response.id,
        model = %response.model,
        choices = response.choices.len(),
        "completion received"
    );
    for choice in &response.choices {
        println!("[{}] {}", choice.index, choice.text.trim());
    }
    if let Some(usage) = response.usage {
        println!("tokens: {} prompt + {} completion", usage.prompt_tokens, usage.completion_tokens);
    }

    Ok(())
}
