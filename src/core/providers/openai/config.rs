//! OpenAI Client Configuration

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use super::error::{OpenAIError, Result};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent as a bearer token
    pub api_key: Option<String>,

    /// Organization ID (optional)
    pub organization: Option<String>,

    /// Base URL every route is appended to
    pub api_base: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            organization: None,
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS, // completions can be slow for long outputs
            headers: HashMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create configuration with only an API key set
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Create configuration from environment variables, loading `.env` first
    /// if one exists.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let mut config = Self::default();

        // API Key
        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            config.api_key = Some(api_key);
        }

        // Organization
        if let Ok(org) = std::env::var("OPENAI_ORG_ID") {
            config.organization = Some(org);
        }

        // Base URL
        if let Ok(base_url) = std::env::var("OPENAI_API_BASE") {
            config.api_base = base_url;
        }

        // Timeout
        if let Ok(timeout_str) = std::env::var("OPENAI_TIMEOUT") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.timeout = timeout;
            }
        }

        config
    }

    /// Load configuration from a YAML file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
            OpenAIError::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&contents)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(contents: &str) -> Result<Self> {
        serde_yaml::from_str(contents)
            .map_err(|e| OpenAIError::Configuration(format!("invalid config: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.api_key.as_deref() {
            None => {
                return Err(OpenAIError::Configuration(
                    "API key is required".to_string(),
                ));
            }
            Some(key) if key.trim().is_empty() => {
                return Err(OpenAIError::Configuration(
                    "API key cannot be empty".to_string(),
                ));
            }
            Some(_) => {}
        }

        if let Some(ref org) = self.organization {
            if org.is_empty() {
                return Err(OpenAIError::Configuration(
                    "Organization ID cannot be empty".to_string(),
                ));
            }
        }

        let url = url::Url::parse(&self.api_base).map_err(|e| {
            OpenAIError::Configuration(format!("invalid api_base '{}': {}", self.api_base, e))
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(OpenAIError::Configuration(format!(
                "api_base must use http or https, got '{}'",
                url.scheme()
            )));
        }

        if self.timeout == 0 {
            return Err(OpenAIError::Configuration(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Full URL for a route relative to the API base
    pub fn route_url(&self, route: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            route.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
