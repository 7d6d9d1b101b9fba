//! Anthropic Messages API Provider
//!
//! Sends one request per naming call and sanitizes the first text block of
//! the reply.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::debug;

use super::{NameProvider, ProviderConfig};
use crate::ai::credentials::Credentials;
use crate::ai::prompt::{SYSTEM_PROMPT, user_prompt};
use crate::constants::api::{ANTHROPIC_VERSION, MESSAGES_PATH};
use crate::constants::slug::MODEL_PLACEHOLDER;
use crate::slug::sanitize;
use crate::types::{BranchError, BranchSlug, GenerationRequest, Result};

/// Messages API provider
///
/// Holds the credential chosen at construction time. A provider without
/// credentials is valid to build; `generate` then fails before any request.
pub struct AnthropicProvider {
    credentials: Option<Credentials>,
    endpoint: String,
    model: String,
    max_tokens: u32,
    client: reqwest::Client,
}

impl std::fmt::Debug for AnthropicProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicProvider")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

impl AnthropicProvider {
    pub fn new(config: ProviderConfig, credentials: Option<Credentials>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| BranchError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            credentials,
            endpoint: format!("{}{}", config.api_base.trim_end_matches('/'), MESSAGES_PATH),
            model: config.model,
            max_tokens: config.max_tokens,
            client,
        })
    }

    /// Full URL requests are sent to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn build_request(&self, request: &GenerationRequest) -> MessagesRequest {
        MessagesRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            messages: vec![Message {
                role: "user".to_string(),
                content: user_prompt(request),
            }],
            system: SYSTEM_PROMPT.to_string(),
        }
    }
}

#[async_trait]
impl NameProvider for AnthropicProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<BranchSlug> {
        let credentials = self
            .credentials
            .as_ref()
            .ok_or(BranchError::MissingCredentials)?;

        let start_time = Instant::now();
        let body = self.build_request(request);

        debug!(
            "Sending naming request (model: {}, auth: {})",
            self.model,
            credentials.kind()
        );

        let response = credentials
            .authorize(self.client.post(&self.endpoint))
            .header(CONTENT_TYPE, "application/json")
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BranchError::upstream(status.as_u16(), text));
        }

        let text = response.text().await?;
        let parsed: MessagesResponse = serde_json::from_str(&text)?;

        debug!(
            "Received naming response in {}ms",
            start_time.elapsed().as_millis()
        );

        let first = parsed
            .content
            .unwrap_or_default()
            .into_iter()
            .next()
            .ok_or(BranchError::NoContent)?;
        let raw = first.text.unwrap_or_default();

        Ok(sanitize(raw.trim(), MODEL_PLACEHOLDER))
    }

    fn name(&self) -> &str {
        "anthropic"
    }

    fn model(&self) -> &str {
        &self.model
    }
}

// Request/Response types

#[derive(Debug, Serialize)]
struct MessagesRequest {
    model: String,
    max_tokens: u32,
    messages: Vec<Message>,
    system: String,
}

#[derive(Debug, Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    /// Missing and `null` both mean no content
    #[serde(default)]
    content: Option<Vec<ContentBlock>>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}
