//! Tool registry for managing available tools.

use std::sync::Arc;

use tracing::debug;

use browsepilot_protocols::error::{RegistryError, ToolError};
use browsepilot_protocols::registry::ToolRegistryAccess;
use browsepilot_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};
use browsepilot_protocols::types::ToolCall;

use super::base::{BaseRegistry, Registerable};

/// A tool together with its compiled parameter validator.
struct RegisteredTool {
    tool: Arc<dyn Tool>,
    validator: jsonschema::Validator,
}

impl Registerable for RegisteredTool {
    fn registry_id(&self) -> &str {
        self.tool.name()
    }
}

impl RegisteredTool {
    fn compile(tool: Arc<dyn Tool>) -> Result<Self, RegistryError> {
        let definition = tool.definition();
        let validator = jsonschema::validator_for(&definition.parameters_schema).map_err(|e| {
            RegistryError::InvalidSchema {
                name: definition.name.clone(),
                message: e.to_string(),
            }
        })?;
        Ok(Self { tool, validator })
    }

    fn validate(&self, arguments: &serde_json::Value) -> Result<(), ToolError> {
        let messages: Vec<String> = self
            .validator
            .iter_errors(arguments)
            .map(|e| e.to_string())
            .collect();
        if messages.is_empty() {
            Ok(())
        } else {
            Err(ToolError::ValidationFailed(messages.join("; ")))
        }
    }
}

/// Registry for managing tools.
///
/// Schemas are compiled once at registration; every invocation is validated
/// against them before the tool sees its arguments.
pub struct ToolRegistry {
    inner: BaseRegistry<RegisteredTool>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new() -> Self {
        Self {
            inner: BaseRegistry::new(),
        }
    }

    /// Register a tool.
    pub fn register(&self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        let entry = RegisteredTool::compile(tool)?;
        debug!(tool = entry.registry_id(), "Registering tool");
        self.inner.register(Arc::new(entry))
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.inner.get(name).map(|entry| entry.tool.clone())
    }

    /// The tool catalog, in registration order.
    pub fn list(&self) -> Vec<ToolDefinition> {
        self.inner
            .values()
            .iter()
            .map(|entry| entry.tool.definition().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Catalog in OpenAI function-calling format.
    pub fn to_openai_functions(&self) -> Vec<serde_json::Value> {
        self.list().iter().map(|d| d.to_openai_function()).collect()
    }

    /// Validate the call's arguments and dispatch it.
    ///
    /// Unknown names and schema mismatches are rejected here, so a tool's
    /// `execute` never runs on malformed input.
    pub async fn invoke(&self, call: &ToolCall, ctx: ToolContext) -> Result<ToolResult, ToolError> {
        let entry = self
            .inner
            .get(&call.name)
            .ok_or_else(|| ToolError::NotFound(call.name.clone()))?;

        entry.validate(&call.arguments)?;

        debug!(tool = %call.name, call_id = %call.id, turn = ctx.turn, "Dispatching tool");
        entry.tool.execute(call.arguments.clone(), ctx).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRegistryAccess for ToolRegistry {
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), RegistryError> {
        self.register(tool)
    }
}

#[cfg(test)]
#[path = "tool_tests.rs"]
mod tests;
