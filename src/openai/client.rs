//! Chat-completion wire client.
//!
//! One HTTPS POST per resolution, bearer-authenticated, carrying a
//! two-message exchange. The port method is synchronous; internally it
//! drives an async reqwest call on a private runtime. No cancellation:
//! once issued, the call runs to completion, failure, or timeout.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    domain::credential::ApiKey,
    infra::{config::OpenAiConfig, error::AppError},
    usecases::contracts::{ApiError, CompletionBackend},
};

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug)]
pub struct OpenAiBackend {
    runtime: tokio::runtime::Runtime,
    http: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiBackend {
    pub fn new(config: OpenAiConfig) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .map_err(AppError::RuntimeInit)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(AppError::HttpClientInit)?;

        Ok(Self {
            runtime,
            http,
            config,
        })
    }

    async fn request(
        &self,
        key: &ApiKey,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ApiError> {
        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: system_instruction,
                },
                WireMessage {
                    role: "user",
                    content: user_text,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(key.expose())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "completion endpoint returned error status");
            return Err(classify_status(status.as_u16()));
        }

        let body = response.text().await.map_err(transport_error)?;
        extract_content(&body)
    }
}

impl CompletionBackend for OpenAiBackend {
    fn complete(
        &self,
        key: &ApiKey,
        system_instruction: &str,
        user_text: &str,
    ) -> Result<String, ApiError> {
        tracing::debug!(
            model = %self.config.model,
            user_chars = user_text.len(),
            "issuing completion request"
        );

        self.runtime
            .block_on(self.request(key, system_instruction, user_text))
    }
}

/// Maps a non-2xx HTTP status to its error classification.
fn classify_status(status: u16) -> ApiError {
    match status {
        401 => ApiError::Auth,
        429 => ApiError::RateLimited,
        status if status >= 500 => ApiError::ProviderUnavailable { status },
        status => ApiError::Api { status },
    }
}

fn transport_error(source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        message: source.to_string(),
    }
}

/// Pulls the first choice's message text out of a 2xx body. Anything else
/// about the shape is a malformed response.
fn extract_content(body: &str) -> Result<String, ApiError> {
    let parsed: ChatCompletionResponse =
        serde_json::from_str(body).map_err(|_| ApiError::MalformedResponse)?;

    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .ok_or(ApiError::MalformedResponse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classification_covers_the_taxonomy() {
        assert_eq!(classify_status(401), ApiError::Auth);
        assert_eq!(classify_status(429), ApiError::RateLimited);
        assert_eq!(classify_status(500), ApiError::ProviderUnavailable { status: 500 });
        assert_eq!(classify_status(503), ApiError::ProviderUnavailable { status: 503 });
        assert_eq!(classify_status(400), ApiError::Api { status: 400 });
        assert_eq!(classify_status(418), ApiError::Api { status: 418 });
    }

    #[test]
    fn extract_content_returns_first_choice_text() {
        let body = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "Try the Crisis Communications Team."}},
                {"message": {"role": "assistant", "content": "second choice is ignored"}}
            ]
        }"#;

        let content = extract_content(body).expect("body should parse");

        assert_eq!(content, "Try the Crisis Communications Team.");
    }

    #[test]
    fn empty_choices_list_is_malformed() {
        assert_eq!(extract_content(r#"{"choices": []}"#), Err(ApiError::MalformedResponse));
    }

    #[test]
    fn missing_choices_field_is_malformed() {
        assert_eq!(extract_content(r#"{"id": "cmpl-1"}"#), Err(ApiError::MalformedResponse));
    }

    #[test]
    fn choice_without_message_text_is_malformed() {
        assert_eq!(
            extract_content(r#"{"choices": [{"message": {"role": "assistant"}}]}"#),
            Err(ApiError::MalformedResponse)
        );
        assert_eq!(
            extract_content(r#"{"choices": [{"finish_reason": "stop"}]}"#),
            Err(ApiError::MalformedResponse)
        );
    }

    #[test]
    fn non_json_body_is_malformed() {
        assert_eq!(extract_content("<html>oops</html>"), Err(ApiError::MalformedResponse));
    }

    #[test]
    fn request_body_carries_the_two_message_exchange_and_bounds() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            messages: [
                WireMessage {
                    role: "system",
                    content: "instruction",
                },
                WireMessage {
                    role: "user",
                    content: "challenge",
                },
            ],
            max_tokens: 300,
            temperature: 0.7,
        };

        let value = serde_json::to_value(&request).expect("request should serialize");

        assert_eq!(value["model"], "gpt-3.5-turbo");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["messages"][1]["content"], "challenge");
        assert_eq!(value["max_tokens"], 300);
        let temperature = value["temperature"].as_f64().expect("temperature is a number");
        assert!((temperature - 0.7).abs() < 1e-6);
    }
}
