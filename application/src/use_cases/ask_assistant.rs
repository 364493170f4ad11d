//! Ask Assistant use case.
//!
//! Sends one prompt to the text-generation service and turns the outcome into
//! an [`AssistantReply`]. Failures never escape as errors: they become
//! [`AssistantReply::Failed`] so the session keeps running.

use crate::config::BehaviorConfig;
use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::{NoProgress, ProgressNotifier};
use std::sync::Arc;
use tracing::{debug, info, warn};
use unitchat_domain::{AssistantReply, ConversionRequest, Model, Prompt, truncate};

/// Use case for single-turn assistant requests
///
/// Stateless: every call sends exactly one prompt, with no history.
pub struct AskAssistantUseCase {
    gateway: Arc<dyn LlmGateway>,
    behavior: BehaviorConfig,
}

impl Clone for AskAssistantUseCase {
    fn clone(&self) -> Self {
        Self {
            gateway: self.gateway.clone(),
            behavior: self.behavior.clone(),
        }
    }
}

impl AskAssistantUseCase {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn model(&self) -> &Model {
        &self.behavior.model
    }

    /// Ask without progress reporting
    pub async fn execute(&self, prompt: &Prompt) -> AssistantReply {
        self.execute_with_progress(prompt, &NoProgress).await
    }

    /// Ask, reporting the request lifecycle to `progress`
    pub async fn execute_with_progress(
        &self,
        prompt: &Prompt,
        progress: &dyn ProgressNotifier,
    ) -> AssistantReply {
        match self.request(prompt, progress).await {
            Ok(text) => AssistantReply::answer(text),
            Err(e) => {
                warn!("Assistant request failed: {}", e);
                AssistantReply::failed(e.to_string())
            }
        }
    }

    /// Ask the assistant to perform a conversion described in natural language
    pub async fn convert(
        &self,
        request: &ConversionRequest,
        progress: &dyn ProgressNotifier,
    ) -> AssistantReply {
        self.execute_with_progress(&request.to_prompt(), progress)
            .await
    }

    /// Raw request with the error kind preserved
    pub async fn request(
        &self,
        prompt: &Prompt,
        progress: &dyn ProgressNotifier,
    ) -> Result<String, GatewayError> {
        let model = &self.behavior.model;
        info!(
            "Asking {}: {}",
            model,
            truncate(prompt.content(), 100)
        );

        progress.on_request_start(model);

        let call = self.gateway.generate(model, prompt);
        let result = match self.behavior.timeout {
            Some(limit) => tokio::time::timeout(limit, call)
                .await
                .unwrap_or(Err(GatewayError::Timeout)),
            None => call.await,
        };

        progress.on_request_complete(model, result.is_ok());

        if let Ok(text) = &result {
            debug!("Assistant responded with {} bytes", text.len());
        }
        result
    }
}
