//! Place-name extraction through an OpenAI-compatible chat completion endpoint.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{LlmSettings, Settings};
use crate::error::{Error, Result};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that extracts ONLY the city, town, \
or village name from a given location string. \
Do not include the state name, punctuation, or explanations. \
If you cannot determine a town/city/village, reply exactly: UNKNOWN";

/// Opaque text classifier: one location string in, one short label out.
pub trait PlaceClassifier {
    fn classify(&self, location: &str) -> Result<String>;
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Message {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Message {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

pub fn build_request(settings: &LlmSettings, location: &str) -> ChatRequest {
    ChatRequest {
        model: settings.model.clone(),
        messages: vec![
            Message::system(SYSTEM_PROMPT),
            Message::user(format!("Input location: \"{}\"", location)),
        ],
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}

/// Trimmed content of the first choice.
pub fn parse_response(body: &str) -> Result<String> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| Error::Llm(format!("bad response JSON: {}", e)))?;
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .ok_or_else(|| Error::Llm("response has no choices".into()))
}

pub struct OpenAiPlaceClassifier {
    client: Client,
    api_key: Option<String>,
    settings: LlmSettings,
}

impl OpenAiPlaceClassifier {
    /// `api_key` is usually `OPENAI_API_KEY`; without one every call fails and the caller
    /// substitutes the sentinel.
    pub fn new(settings: &Settings, api_key: Option<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;
        Ok(OpenAiPlaceClassifier {
            client,
            api_key,
            settings: settings.llm.clone(),
        })
    }

    pub fn from_env(settings: &Settings) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").ok().filter(|k| !k.is_empty());
        Self::new(settings, api_key)
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }
}

impl PlaceClassifier for OpenAiPlaceClassifier {
    fn classify(&self, location: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Llm("OPENAI_API_KEY not set".into()))?;

        let request = build_request(&self.settings, location);
        let response = self
            .client
            .post(format!("{}/chat/completions", self.settings.base_url.trim_end_matches('/')))
            .header(header::AUTHORIZATION, format!("Bearer {}", api_key))
            .json(&request)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        if !status.is_success() {
            return Err(Error::Llm(format!("API returned {}: {}", status, body)));
        }
        debug!(location = %location, "LLM answered");
        parse_response(&body)
    }
}

// ── Tests ──
