//! OpenAI Client Implementation
//!
//! Owns the HTTP client, authentication headers and route composition. The
//! typed endpoint wrappers build on [`Client::post`].

use bytes::Bytes;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

use super::config::ClientConfig;
use super::error::{OpenAIError, Result};
use crate::core::types::context::RequestContext;

/// API client.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

impl Client {
    /// Create new client
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .default_headers(Self::default_headers(&config)?)
            .build()
            .map_err(|e| {
                OpenAIError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        debug!(api_base = %config.api_base, "client created");

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Create client with API key only
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::with_api_key(api_key))
    }

    /// Create client from `OPENAI_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    /// Get configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Headers sent with every request
    fn default_headers(config: &ClientConfig) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(2 + config.headers.len());

        if let Some(api_key) = &config.api_key {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
                OpenAIError::Configuration("API key is not a valid header value".to_string())
            })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        if let Some(org) = &config.organization {
            let value = HeaderValue::from_str(org).map_err(|_| {
                OpenAIError::Configuration("organization is not a valid header value".to_string())
            })?;
            headers.insert(HeaderName::from_static("openai-organization"), value);
        }

        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                OpenAIError::Configuration(format!("invalid header name '{}'", key))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                OpenAIError::Configuration(format!("invalid value for header '{}'", key))
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// Per-call headers carried by the context
    fn context_headers(ctx: &RequestContext) -> Result<HeaderMap> {
        let mut headers = HeaderMap::with_capacity(ctx.headers.len());

        for (key, value) in &ctx.headers {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|_| {
                OpenAIError::InvalidRequest(format!("invalid header name '{}'", key))
            })?;
            let value = HeaderValue::from_str(value).map_err(|_| {
                OpenAIError::InvalidRequest(format!("invalid value for header '{}'", key))
            })?;
            headers.insert(name, value);
        }

        Ok(headers)
    }

    /// One POST attempt; no retries
    async fn send(
        &self,
        ctx: &RequestContext,
        route: &str,
        url: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<Bytes> {
        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .headers(headers)
            .body(body)
            .send()
            .await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error = OpenAIError::from_response(status.as_u16(), &bytes);
            warn!(
                request_id = %ctx.request_id,
                route,
                status = status.as_u16(),
                error = %error,
                "API returned an error status"
            );
            return Err(error);
        }

        Ok(bytes)
    }

    /// POST a JSON body to `route` and return the raw response body.
    ///
    /// Non-success statuses become [`OpenAIError::Api`]. Malformed per-call
    /// headers are rejected as [`OpenAIError::InvalidRequest`] before anything
    /// is sent. The call is abandoned as soon as `ctx` is cancelled or its
    /// deadline passes.
    pub async fn post<B>(&self, ctx: &RequestContext, route: &str, body: &B) -> Result<Bytes>
    where
        B: Serialize + ?Sized,
    {
        let started = Instant::now();
        let headers = Self::context_headers(ctx)?;
        let body = serde_json::to_vec(body).map_err(OpenAIError::Serialize)?;
        let url = self.config.route_url(route);

        debug!(
            request_id = %ctx.request_id,
            route,
            body_len = body.len(),
            "sending request"
        );

        let bytes = ctx.run(self.send(ctx, route, &url, headers, body)).await?;

        debug!(
            request_id = %ctx.request_id,
            route,
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_len = bytes.len(),
            "received response"
        );

        Ok(bytes)
    }
}
