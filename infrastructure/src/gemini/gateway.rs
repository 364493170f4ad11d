//! Gemini LLM Gateway implementation
//!
//! Calls `POST {api_base}/v1beta/models/{model}:generateContent` with the
//! prompt as a single user turn. No generation config, no system
//! instruction and no history are sent.

use super::error::{GeminiError, Result};
use super::types::{ApiErrorResponse, GenerateContentRequest, GenerateContentResponse};
use crate::config::DEFAULT_API_BASE;
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info};
use unitchat_application::{GatewayError, LlmGateway};
use unitchat_domain::{Model, Prompt};

const API_VERSION: &str = "v1beta";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// LLM Gateway implementation for the Generative Language API
///
/// The API key is stored as a [`SecretString`] and only exposed when the
/// request header is built.
#[derive(Debug)]
pub struct GeminiLlmGateway {
    client: reqwest::Client,
    api_key: SecretString,
    api_base: String,
}

impl GeminiLlmGateway {
    /// Create a gateway against the public endpoint
    pub fn new(api_key: SecretString) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("unitchat/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!("GeminiLlmGateway initialized");

        Ok(Self {
            client,
            api_key,
            api_base: DEFAULT_API_BASE.to_string(),
        })
    }

    /// Point the gateway at a different base URL (proxies, tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Full URL of the `generateContent` method for `model`
    pub fn endpoint(&self, model: &Model) -> String {
        format!(
            "{}/{}/{}:generateContent",
            self.api_base,
            API_VERSION,
            model.resource_name()
        )
    }

    async fn generate_content(&self, model: &Model, prompt: &Prompt) -> Result<String> {
        let url = self.endpoint(model);
        let body = GenerateContentRequest::from_text(prompt.content());

        debug!(model = %model, "Calling generateContent");

        let response = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(ApiErrorResponse::into_error(status.as_u16(), &error_body));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GeminiError::Parse(e.to_string()))?;

        parsed.text()
    }
}

#[async_trait]
impl LlmGateway for GeminiLlmGateway {
    async fn generate(
        &self,
        model: &Model,
        prompt: &Prompt,
    ) -> std::result::Result<String, GatewayError> {
        self.generate_content(model, prompt)
            .await
            .map_err(GatewayError::from)
    }
}
