//! Conversion between conversation turns and chat completions messages.

use tracing::warn;

use browsepilot_protocols::error::PlannerError;
use browsepilot_protocols::planner::PlannerDecision;
use browsepilot_protocols::tool::ToolDefinition;
use browsepilot_protocols::types::{ConversationTurn, ToolCall, TurnRole};

use crate::api::{
    ApiMessage, ApiResponse, ApiTool, ApiToolCall, ContentPart, FunctionCall, FunctionDef, ImageUrl,
    MessageContent,
};

/// Build the message list: system prompt, then the history.
///
/// The task is added as a user message when the history has none. Tool
/// messages cannot carry images, so a tool turn's image follows it as a user
/// message with an image part.
pub fn convert_history(system_prompt: &str, task: &str, history: &[ConversationTurn]) -> Vec<ApiMessage> {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(ApiMessage::text("system", system_prompt));
    if !history.iter().any(|t| t.role == TurnRole::User) {
        messages.push(ApiMessage::text("user", task));
    }
    for turn in history {
        messages.push(convert_turn(turn));
        if let Some(image) = &turn.image {
            messages.push(image_message(turn, image.data_url()));
        }
    }
    messages
}

fn image_message(turn: &ConversationTurn, url: String) -> ApiMessage {
    let caption = match &turn.tool_call_id {
        Some(id) => format!("Image returned by tool call {}", id),
        None => "Image returned by a tool".to_string(),
    };
    ApiMessage {
        role: "user".to_string(),
        content: Some(MessageContent::Parts(vec![
            ContentPart::Text { text: caption },
            ContentPart::ImageUrl {
                image_url: ImageUrl { url, detail: None },
            },
        ])),
        tool_calls: None,
        tool_call_id: None,
    }
}

fn convert_turn(turn: &ConversationTurn) -> ApiMessage {
    match turn.role {
        TurnRole::User => ApiMessage::text("user", &turn.content),
        TurnRole::Assistant => match &turn.tool_call {
            Some(call) => ApiMessage {
                role: "assistant".to_string(),
                content: (!turn.content.is_empty())
                    .then(|| MessageContent::Text(turn.content.clone())),
                tool_calls: Some(vec![ApiToolCall {
                    id: call.id.clone(),
                    call_type: "function".to_string(),
                    function: FunctionCall {
                        name: call.name.clone(),
                        arguments: call.arguments.to_string(),
                    },
                }]),
                tool_call_id: None,
            },
            None => ApiMessage::text("assistant", &turn.content),
        },
        TurnRole::Tool => ApiMessage {
            role: "tool".to_string(),
            content: Some(MessageContent::Text(turn.content.clone())),
            tool_calls: None,
            tool_call_id: turn.tool_call_id.clone(),
        },
    }
}

/// Convert the catalog to function tools.
pub fn convert_tools(catalog: &[ToolDefinition]) -> Vec<ApiTool> {
    catalog
        .iter()
        .map(|tool| ApiTool {
            tool_type: "function".to_string(),
            function: FunctionDef {
                name: tool.name.clone(),
                description: tool.description.clone(),
                parameters: tool.parameters_schema.clone(),
            },
        })
        .collect()
}

/// Turn a response into a decision.
///
/// The first tool call wins; a response without tool calls completes the task.
pub fn parse_decision(response: ApiResponse) -> Result<PlannerDecision, PlannerError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| PlannerError::InvalidResponse("response has no choices".to_string()))?;
    let message = choice.message;
    let content = message.content.filter(|c| !c.trim().is_empty());

    let mut calls = message.tool_calls.into_iter();
    let Some(first) = calls.next() else {
        return Ok(PlannerDecision::complete(content.unwrap_or_default()));
    };
    let dropped = calls.count();
    if dropped > 0 {
        warn!(dropped, "Planner returned several tool calls; using the first");
    }

    let call = ToolCall::new(first.function.name, parse_arguments(&first.function.arguments))
        .with_id(first.id);
    Ok(PlannerDecision::ToolCall { call, message: content })
}

/// Decode the JSON-encoded argument string.
///
/// Undecodable input is passed through as a string so that schema
/// validation reports it back to the planner.
fn parse_arguments(raw: &str) -> serde_json::Value {
    if raw.trim().is_empty() {
        return serde_json::json!({});
    }
    serde_json::from_str(raw).unwrap_or_else(|_| serde_json::Value::String(raw.to_string()))
}
