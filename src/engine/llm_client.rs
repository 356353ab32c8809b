use anyhow::Result;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::engine::oracle::{OracleError, OracleResult};
use crate::settings::{OracleSettings, Sampling};

#[derive(Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize)]
pub struct Choice {
    pub message: ChatMessageResponse,
}

#[derive(Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

/// Blocking client for an OpenAI-compatible chat-completions endpoint.
pub struct LlmClient {
    http: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(settings: &OracleSettings) -> Self {
        Self {
            http: Client::new(),
            endpoint: settings.endpoint.clone(),
            model: settings.model.clone(),
            api_key: settings.api_key(),
        }
    }

    /// One system + user exchange. Returns the trimmed reply text.
    pub fn complete(&self, system: &str, user: &str, sampling: Sampling) -> OracleResult<String> {
        let req = ChatCompletionRequest {
            model: self.model.clone(),
            temperature: sampling.temperature,
            max_tokens: sampling.max_tokens,
            messages: vec![
                ChatMessage {
                    role: "system".into(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".into(),
                    content: user.to_string(),
                },
            ],
        };

        let mut builder = self.http.post(&self.endpoint).json(&req);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let resp = builder.send()?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let resp = resp.json::<ChatCompletionResponse>()?;
        let content = resp
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .ok_or(OracleError::EmptyResponse)?;

        debug!("llm reply: {}", content);
        Ok(content)
    }

    /// Asks the server which models it serves.
    pub fn test_connection(&self) -> Result<String> {
        let mut builder = self.http.get(models_url(&self.endpoint));
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let resp: serde_json::Value = builder.send()?.error_for_status()?.json()?;

        Ok(format!(
            "Connected ({} models available)",
            resp["data"].as_array().map(|a| a.len()).unwrap_or(0)
        ))
    }
}

/// `.../v1/chat/completions` -> `.../v1/models`.
fn models_url(endpoint: &str) -> String {
    match endpoint.find("/v1/") {
        Some(pos) => format!("{}/v1/models", &endpoint[..pos]),
        None => format!("{}/v1/models", endpoint.trim_end_matches('/')),
    }
}
