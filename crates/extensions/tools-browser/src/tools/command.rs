//! Typed browser commands parsed from validated tool arguments.

use serde::Deserialize;
use serde_json::{Map, Value};

use browsepilot_protocols::error::ToolError;

/// One browser operation, tagged by tool name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum BrowserCommand {
    OpenBrowser,
    CloseBrowser,
    WaitSeconds { seconds: f64 },
    OpenUrl { url: String },
    TypeText { selector: String, text: String },
    ClickByText { text: String },
    TakeScreenshot,
    DiscoverFormElements,
}

impl BrowserCommand {
    /// Build the command for `tool` from its (already schema-checked) arguments.
    pub fn parse(tool: &str, params: Value) -> Result<Self, ToolError> {
        let mut object = match params {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(ToolError::InvalidParameters(format!(
                    "expected an object, got {}",
                    other
                )));
            }
        };
        object.insert("command".to_string(), Value::String(tool.to_string()));
        serde_json::from_value(Value::Object(object))
            .map_err(|e| ToolError::InvalidParameters(format!("{}: {}", tool, e)))
    }

    /// Whether the command needs an open page.
    pub fn requires_page(&self) -> bool {
        !matches!(self, BrowserCommand::OpenBrowser | BrowserCommand::CloseBrowser)
    }
}
