//! Generation backend: chosen once at start-up and never re-evaluated.
//!
//! `Live` forwards instructions to the chat-completion provider, `Mock`
//! produces deterministic placeholder output. Both yield identical response
//! shapes so callers cannot tell them apart.

use tracing::{info, warn};

use crate::config::Config;
use crate::llm_client::{LlmClient, LlmError};

#[derive(Clone)]
pub enum GenerationBackend {
    Live(LlmClient),
    Mock,
}

impl GenerationBackend {
    /// Live when a provider key is configured, mock otherwise.
    pub fn from_config(config: &Config) -> Result<Self, LlmError> {
        match &config.openai_api_key {
            Some(key) => {
                let client = LlmClient::new(key.clone(), config)?;
                info!("Generation backend: live (model: {})", client.model());
                Ok(GenerationBackend::Live(client))
            }
            None => {
                warn!("OPENAI_API_KEY not set; generation backend: mock");
                Ok(GenerationBackend::Mock)
            }
        }
    }

    pub fn mode(&self) -> &'static str {
        match self {
            GenerationBackend::Live(_) => "live",
            GenerationBackend::Mock => "mock",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn config(api_key: Option<&str>) -> Config {
        Config {
            openai_api_key: api_key.map(str::to_string),
            openai_base_url: "http://127.0.0.1:9".to_string(),
            openai_model: "test-model".to_string(),
            llm_timeout: Duration::from_secs(1),
            llm_max_retries: 1,
            port: 0,
            rust_log: "info".to_string(),
        }
    }

    #[test]
    fn test_missing_key_selects_mock() {
        let backend = GenerationBackend::from_config(&config(None)).unwrap();
        assert_eq!(backend.mode(), "mock");
    }

    #[test]
    fn test_key_selects_live() {
        let backend = GenerationBackend::from_config(&config(Some("sk-test"))).unwrap();
        assert_eq!(backend.mode(), "live");
    }
}
