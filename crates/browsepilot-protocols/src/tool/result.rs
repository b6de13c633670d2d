//! Tool execution result types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::{ImageAttachment, Metadata};

/// Result of a successful tool execution.
///
/// Failures are reported through [`crate::ToolError`] instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Short human-readable text consumed by the planner.
    pub content: String,

    /// Structured output (optional).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_output: Option<serde_json::Value>,

    /// Additional metadata about the execution.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: Metadata,

    /// Image kept out of `content` so it never inflates the text history.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageAttachment>,
}

impl ToolResult {
    /// Create a successful result with text content.
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            structured_output: None,
            metadata: HashMap::new(),
            image: None,
        }
    }

    /// Create a successful result with structured output.
    pub fn success_json(content: impl Into<String>, output: serde_json::Value) -> Self {
        Self {
            content: content.into(),
            structured_output: Some(output),
            metadata: HashMap::new(),
            image: None,
        }
    }

    /// Add metadata to the result.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Attach an image.
    pub fn with_image(mut self, image: ImageAttachment) -> Self {
        self.image = Some(image);
        self
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
