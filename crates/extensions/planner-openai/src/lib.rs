//! OpenAI-compatible planner for browsepilot.
//!
//! Sends the conversation and the tool catalog to a chat completions
//! endpoint with parallel tool calls disabled, and turns the reply into a
//! single tool call or a completion.

mod api;
mod converter;
mod planner;

pub use planner::{
    resolve_model, OpenAIPlanner, OpenAIPlannerConfig, DEFAULT_API_URL, DEFAULT_MODEL,
    DEFAULT_SYSTEM_PROMPT, MODEL_ENV,
};
