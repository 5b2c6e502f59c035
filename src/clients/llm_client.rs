//! LLM (`OpenAI`) API client module
//!
//! Encapsulates the single chat-completion call the relay makes.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use tracing::{error, info};
use url::Url;

use crate::api::parsing::upstream_error_message;
use crate::core::config::AppConfig;
use crate::errors::RelayError;
use crate::prompt::{SYSTEM_INSTRUCTION, build_roadmap_prompt};

/// LLM API client for generating roadmaps
#[derive(Clone)]
pub struct LlmClient {
    http: Client,
    api_key: Option<String>,
    api_url: Url,
    model_name: String,
    temperature: f64,
}

impl LlmClient {
    /// Builds the client and its connection pool once; clones share the pool.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, RelayError> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| RelayError::InternalFault(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model_name: config.model.clone(),
            temperature: config.temperature,
        })
    }

    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    #[must_use]
    pub fn build_prompt(&self, topic: &str) -> Vec<ChatCompletionMessage> {
        vec![
            ChatCompletionMessage {
                role: MessageRole::system,
                content: Content::Text(SYSTEM_INSTRUCTION.to_string()),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
            ChatCompletionMessage {
                role: MessageRole::user,
                content: Content::Text(build_roadmap_prompt(topic)),
                name: None,
                tool_calls: None,
                tool_call_id: None,
            },
        ]
    }

    /// JSON request body for the chat completions endpoint.
    #[must_use]
    pub fn request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        let messages: Vec<Value> = prompt
            .iter()
            .filter_map(|msg| {
                let role_str = match msg.role {
                    MessageRole::system => "system",
                    MessageRole::user => "user",
                    MessageRole::assistant => "assistant",
                    MessageRole::function => "function",
                    MessageRole::tool => "tool",
                };

                match &msg.content {
                    Content::Text(text) => Some(json!({
                        "role": role_str,
                        "content": text
                    })),
                    Content::ImageUrl(_) => None,
                }
            })
            .collect();

        json!({
            "model": self.model_name,
            "messages": messages,
            "temperature": self.temperature
        })
    }

    /// Sends one non-streaming completion request and returns the decoded reply.
    ///
    /// A 2xx reply whose body is not JSON comes back as a JSON string so callers see it
    /// as a response without choices.
    ///
    /// # Errors
    ///
    /// `ConfigurationMissing` when no key is configured (nothing is sent), and
    /// `UpstreamError` for transport failures, timeouts and non-2xx replies.
    pub async fn complete(&self, prompt: Vec<ChatCompletionMessage>) -> Result<Value, RelayError> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Err(RelayError::ConfigurationMissing);
        };

        #[cfg(feature = "debug-logs")]
        info!("Using ChatGPT prompt:\n{:?}", prompt);

        let request_body = self.request_body(&prompt);

        let response = self
            .http
            .post(self.api_url.clone())
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "OpenAI API request failed");
                RelayError::from(e)
            })?;

        let status = response.status();
        info!(
            status = status.as_u16(),
            status_text = status.canonical_reason().unwrap_or(""),
            headers = ?response.headers(),
            "Received response from OpenAI"
        );

        let body = response.text().await.map_err(|e| {
            error!(error = %e, "Failed to read OpenAI response body");
            RelayError::from(e)
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "OpenAI API error");
            let details = upstream_error_message(&body).unwrap_or_else(|| {
                format!("Request failed with status code {}", status.as_u16())
            });
            return Err(RelayError::UpstreamError(details));
        }

        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}
