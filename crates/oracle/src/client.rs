use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::TextOracle;
use crate::config::OracleConfig;
use crate::prompt::{Message, Prompt};

/// Chat client for an Ollama-compatible endpoint.
#[derive(Clone)]
pub struct ChatClient {
    config: OracleConfig,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [Message],
    stream: bool,
    options: ChatOptions,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

impl ChatClient {
    pub fn new(config: OracleConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    pub fn default() -> Self {
        Self::new(OracleConfig::default())
    }
}

impl TextOracle for ChatClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String> {
        let url = format!("{}/api/chat", self.config.base_url);

        let request = ChatRequest {
            model: &self.config.model,
            messages: &prompt.messages,
            stream: false,
            options: ChatOptions {
                temperature: self.config.temperature,
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to Ollama")?;

        if !response.status().is_success() {
            anyhow::bail!("Ollama request failed: {}", response.status());
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        Ok(chat_response.message.content.trim().to_string())
    }
}
