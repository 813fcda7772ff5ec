//! Client configuration tests

#[cfg(test)]
mod tests {
    use openai_completions::{Client, ClientConfig, OpenAIError};
    use std::io::Write;
    use std::time::Duration;

    #[test]
    fn test_client_with_api_key() {
        let client = Client::with_api_key("sk-abc").unwrap();
        assert_eq!(client.config().api_key.as_deref(), Some("sk-abc"));
        assert_eq!(client.config().timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let mut config = ClientConfig::with_api_key("sk-abc");
        config.timeout = 0;
        assert!(matches!(
            Client::new(config),
            Err(OpenAIError::Configuration(_))
        ));

        let mut config = ClientConfig::with_api_key("sk-abc");
        config.api_base = "::nope::".to_string();
        assert!(matches!(
            Client::new(config),
            Err(OpenAIError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn test_client_from_yaml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key: sk-yaml\napi_base: http://localhost:1234/v1\ntimeout: 10").unwrap();

        let config = ClientConfig::from_file(file.path()).await.unwrap();
        let client = Client::new(config).unwrap();
        assert_eq!(
            client.config().route_url("completions"),
            "http://localhost:1234/v1/completions"
        );
        assert_eq!(client.config().timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let mut config = ClientConfig::with_api_key("sk-abc");
        config.organization = Some("org-1".to_string());
        config
            .headers
            .insert("X-Team".to_string(), "nlp".to_string());

        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(ClientConfig::from_yaml(&yaml).unwrap(), config);
    }
}
