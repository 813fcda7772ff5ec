//! Common test utilities for openai-completions

pub mod assertions;

use openai_completions::{Client, ClientConfig};
use wiremock::MockServer;

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}

/// Client pointed at a mock server, with a test API key
pub fn mock_client(server: &MockServer) -> Client {
    let mut config = ClientConfig::with_api_key("sk-test");
    config.api_base = format!("{}/v1", server.uri());
    Client::new(config).expect("mock client config is valid")
}
