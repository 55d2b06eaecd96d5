//! LLM client: the single point of entry for all chat-completion calls.
//!
//! No other module talks to the provider directly; writing operations pass
//! their own decoding parameters and this client owns timeout and retry policy.
use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

pub mod prompts;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    fn is_retryable(&self) -> bool {
        match self {
            LlmError::Http(_) => true,
            LlmError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

/// Fixed decoding parameters for one kind of writing operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodingParams {
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub total_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn total_tokens(&self) -> u32 {
        self.usage.as_ref().map(|u| u.total_tokens).unwrap_or(0)
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Chat-completion client with a per-attempt timeout and bounded retries.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    max_retries: u32,
}

impl LlmClient {
    pub fn new(api_key: String, config: &Config) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder().timeout(config.llm_timeout).build()?,
            api_key,
            endpoint: format!(
                "{}/chat/completions",
                config.openai_base_url.trim_end_matches('/')
            ),
            model: config.openai_model.clone(),
            max_retries: config.llm_max_retries.max(1),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes a raw chat-completion call, returning the full response object.
    /// Retries transport errors, 429 and 5xx with exponential backoff.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        params: DecodingParams,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: params.temperature,
            max_tokens: params.max_tokens,
        };

        let mut attempt = 0;
        loop {
            match self.send_once(&request_body).await {
                Ok(response) => return Ok(response),
                Err(e) if e.is_retryable() && attempt + 1 < self.max_retries => {
                    // Exponential backoff: 1s, 2s, 4s
                    let delay = Duration::from_millis(1000 * (1u64 << attempt.min(6)));
                    warn!(
                        "LLM call attempt {} failed ({e}), retrying after {}ms...",
                        attempt + 1,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_once(&self, request_body: &ChatRequest<'_>) -> Result<LlmResponse, LlmError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ProviderError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // A malformed 200 body is a Parse error and is not retried
        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        debug!(
            "LLM call succeeded: total_tokens={}",
            llm_response.total_tokens()
        );

        Ok(llm_response)
    }

    /// Calls the LLM and returns its text output with the reported usage count.
    pub async fn call_text(
        &self,
        prompt: &str,
        system: &str,
        params: DecodingParams,
    ) -> Result<(String, u32), LlmError> {
        let response = self.call(prompt, system, params).await?;
        let text = response.text().ok_or(LlmError::EmptyContent)?;
        Ok((text.to_string(), response.total_tokens()))
    }

    /// Calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
        params: DecodingParams,
    ) -> Result<(T, u32), LlmError> {
        let (text, tokens) = self.call_text(prompt, system, params).await?;

        // Strip markdown code fences if the model wraps JSON in them
        let parsed = serde_json::from_str(strip_json_fences(&text))?;

        Ok((parsed, tokens))
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(stripped) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let stripped = stripped.trim_start();
    stripped
        .strip_suffix("```")
        .map(|s| s.trim())
        .unwrap_or(stripped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const PARAMS: DecodingParams = DecodingParams {
        temperature: 0.5,
        max_tokens: 100,
    };

    fn test_config(base_url: &str, max_retries: u32) -> Config {
        Config {
            openai_api_key: Some("test-key".to_string()),
            openai_base_url: base_url.to_string(),
            openai_model: "test-model".to_string(),
            llm_timeout: Duration::from_secs(5),
            llm_max_retries: max_retries,
            port: 0,
            rust_log: "debug".to_string(),
        }
    }

    fn completion(text: &str, total_tokens: u32) -> serde_json::Value {
        json!({
            "id": "chatcmpl-test",
            "object": "chat.completion",
            "choices": [{
                "index": 0,
                "message": { "role": "assistant", "content": text },
                "finish_reason": "stop"
            }],
            "usage": {
                "prompt_tokens": 10,
                "completion_tokens": total_tokens - 10,
                "total_tokens": total_tokens
            }
        })
    }

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_blank_choice_counts_as_empty() {
        let response: LlmResponse = serde_json::from_value(completion("   ", 12)).unwrap();
        assert_eq!(response.text(), None);
        assert_eq!(response.total_tokens(), 12);
    }

    #[test]
    fn test_missing_usage_reports_zero_tokens() {
        let response: LlmResponse = serde_json::from_value(json!({
            "choices": [{ "message": { "content": "hi" } }]
        }))
        .unwrap();
        assert_eq!(response.text(), Some("hi"));
        assert_eq!(response.total_tokens(), 0);
    }

    #[tokio::test]
    async fn test_call_text_returns_provider_output_and_usage() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Hello!", 42)))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 3)).unwrap();
        let (text, tokens) = client.call_text("hi", "be nice", PARAMS).await.unwrap();

        assert_eq!(text, "Hello!");
        assert_eq!(tokens, 42);
    }

    #[tokio::test]
    async fn test_server_errors_are_retried_until_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion("Recovered", 20)))
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 3)).unwrap();
        let (text, _) = client.call_text("hi", "sys", PARAMS).await.unwrap();

        assert_eq!(text, "Recovered");
    }

    #[tokio::test]
    async fn test_rate_limit_gives_up_after_max_retries() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_json(json!({
                "error": { "message": "Rate limit reached", "type": "requests" }
            })))
            .expect(2)
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 2)).unwrap();
        let err = client.call("hi", "sys", PARAMS).await.unwrap_err();

        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "Rate limit reached");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_auth_error_fails_fast_with_provider_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": { "message": "Incorrect API key provided", "type": "invalid_request_error" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 3)).unwrap();
        let err = client.call("hi", "sys", PARAMS).await.unwrap_err();

        assert!(err.to_string().contains("Incorrect API key provided"));
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_malformed_success_body_fails_fast_as_parse_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .expect(1)
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 3)).unwrap();
        let err = client.call("hi", "sys", PARAMS).await.unwrap_err();

        assert!(matches!(err, LlmError::Parse(_)), "unexpected error: {err:?}");
        assert!(!err.is_retryable());
    }

    #[tokio::test]
    async fn test_call_json_parses_fenced_output() {
        #[derive(Deserialize)]
        struct Answer {
            value: u32,
        }

        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(completion("```json\n{\"value\": 7}\n```", 30)),
            )
            .mount(&server)
            .await;

        let client = LlmClient::new("test-key".to_string(), &test_config(&server.uri(), 1)).unwrap();
        let (answer, tokens): (Answer, u32) = client.call_json("q", "sys", PARAMS).await.unwrap();

        assert_eq!(answer.value, 7);
        assert_eq!(tokens, 30);
    }
}
