use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::{DigestError, DigestResult};

/// One chat-completion call: a fixed system role plus the user prompt
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub max_tokens: u32,
    pub temperature: Option<f32>,
}

#[async_trait]
pub trait CompletionModel {
    /// Returns the trimmed completion text
    async fn complete(&self, request: &CompletionRequest) -> DigestResult<String>;
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    max_tokens: u32,
    n: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
}

#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
}

impl OpenAiClient {
    pub fn new(api_key: String, api_url: &str, model: String) -> anyhow::Result<Self> {
        use anyhow::Context;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            api_key,
            endpoint: format!("{}/chat/completions", api_url.trim_end_matches('/')),
            model,
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::new(
            config.openai_api_key.clone(),
            &config.openai_api_url,
            config.openai_model.clone(),
        )
    }

    pub fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl CompletionModel for OpenAiClient {
    async fn complete(&self, request: &CompletionRequest) -> DigestResult<String> {
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &request.system,
                },
                Message {
                    role: "user",
                    content: &request.prompt,
                },
            ],
            max_tokens: request.max_tokens,
            n: 1,
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| String::from("unknown error"));
            return Err(DigestError::LanguageModel {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let chat_response = response
            .json::<ChatResponse>()
            .await
            .map_err(|e| DigestError::Decode(format!("OpenAI completion: {}", e)))?;

        let text = chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(DigestError::EmptyCompletion);
        }

        tracing::debug!(model = %self.model, chars = text.len(), "Completion received");
        Ok(text)
    }
}
