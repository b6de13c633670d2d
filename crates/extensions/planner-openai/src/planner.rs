//! Planner backed by an OpenAI-compatible chat completions endpoint.

use async_trait::async_trait;
use tracing::debug;

use browsepilot_protocols::error::PlannerError;
use browsepilot_protocols::planner::{Planner, PlannerDecision};
use browsepilot_protocols::tool::ToolDefinition;
use browsepilot_protocols::types::ConversationTurn;

use crate::api::{ApiRequest, ApiResponse};
use crate::converter::{convert_history, convert_tools, parse_decision};

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when neither the config nor `MODEL` names one.
pub const DEFAULT_MODEL: &str = "gpt-4o";

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "You are a browser automation agent. You work on finishing the given task using available tools.";

/// Environment variable consulted for the model name.
pub const MODEL_ENV: &str = "MODEL";

/// Settings for [`OpenAIPlanner`].
#[derive(Debug, Clone)]
pub struct OpenAIPlannerConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub temperature: Option<f32>,
    pub system_prompt: String,
}

impl OpenAIPlannerConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: resolve_model(None),
            temperature: None,
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }

    pub fn with_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Configured model, else `$MODEL`, else [`DEFAULT_MODEL`].
pub fn resolve_model(configured: Option<&str>) -> String {
    configured
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
        .or_else(|| std::env::var(MODEL_ENV).ok().filter(|m| !m.trim().is_empty()))
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Asks a chat model for one tool call per turn.
pub struct OpenAIPlanner {
    config: OpenAIPlannerConfig,
    client: reqwest::Client,
}

impl OpenAIPlanner {
    pub fn new(config: OpenAIPlannerConfig) -> Result<Self, PlannerError> {
        if config.api_key.trim().is_empty() {
            return Err(PlannerError::Configuration("api_key is empty".to_string()));
        }
        Ok(Self {
            config,
            client: reqwest::Client::new(),
        })
    }

    pub fn config(&self) -> &OpenAIPlannerConfig {
        &self.config
    }

    fn build_request(&self, task: &str, history: &[ConversationTurn], catalog: &[ToolDefinition]) -> ApiRequest {
        let tools = convert_tools(catalog);
        let parallel_tool_calls = (!tools.is_empty()).then_some(false);
        ApiRequest {
            model: self.config.model.clone(),
            messages: convert_history(&self.config.system_prompt, task, history),
            temperature: self.config.temperature,
            tools,
            parallel_tool_calls,
        }
    }

    async fn send_request(&self, api_request: &ApiRequest) -> Result<ApiResponse, PlannerError> {
        let response = self
            .client
            .post(&self.config.api_url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(api_request)
            .send()
            .await
            .map_err(|e| PlannerError::Network(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            return Err(PlannerError::ApiError { status, message: text });
        }

        response
            .json()
            .await
            .map_err(|e| PlannerError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl Planner for OpenAIPlanner {
    fn id(&self) -> &str {
        "openai"
    }

    async fn decide(
        &self,
        task: &str,
        history: &[ConversationTurn],
        catalog: &[ToolDefinition],
    ) -> Result<PlannerDecision, PlannerError> {
        let request = self.build_request(task, history, catalog);
        debug!(
            model = %request.model,
            messages = request.messages.len(),
            tools = request.tools.len(),
            "Requesting planner decision"
        );
        let response = self.send_request(&request).await?;
        parse_decision(response)
    }
}

#[cfg(test)]
#[path = "planner_tests.rs"]
mod tests;
