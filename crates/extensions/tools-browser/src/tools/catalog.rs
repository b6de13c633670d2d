//! Names, descriptions and parameter schemas of the browser tools.

use serde_json::json;

use browsepilot_protocols::tool::ToolDefinition;

use crate::config::BrowserTimeouts;

pub const OPEN_BROWSER: &str = "open_browser";
pub const CLOSE_BROWSER: &str = "close_browser";
pub const WAIT_SECONDS: &str = "wait_seconds";
pub const OPEN_URL: &str = "open_url";
pub const TYPE_TEXT: &str = "type_text";
pub const CLICK_BY_TEXT: &str = "click_by_text";
pub const TAKE_SCREENSHOT: &str = "take_screenshot";
pub const DISCOVER_FORM_ELEMENTS: &str = "discover_form_elements";

/// Every browser tool definition, in catalog order.
pub fn definitions(timeouts: &BrowserTimeouts) -> Vec<ToolDefinition> {
    vec![
        ToolDefinition::new(
            OPEN_BROWSER,
            "Open Browser",
            "Open a browser session with a fresh page. Call this before any other browser tool. \
             Calling it again replaces the current page.",
        ),
        ToolDefinition::new(
            OPEN_URL,
            "Open URL",
            "Navigate the current page to a URL and wait for it to load.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "minLength": 1, "description": "Absolute URL to open" }
            },
            "required": ["url"],
            "additionalProperties": false
        })),
        ToolDefinition::new(
            DISCOVER_FORM_ELEMENTS,
            "Discover Form Elements",
            "List the input, button, textarea and select elements inside forms on the current page \
             as a JSON array of {tag, type, label, selector}. At most 50 elements are returned.",
        ),
        ToolDefinition::new(
            TYPE_TEXT,
            "Type Text",
            "Type text into the element matched by a CSS selector (or text=<visible text>), \
             one key at a time.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "selector": { "type": "string", "minLength": 1, "description": "Selector of the target element" },
                "text": { "type": "string", "description": "Text to type" }
            },
            "required": ["selector", "text"],
            "additionalProperties": false
        })),
        ToolDefinition::new(
            CLICK_BY_TEXT,
            "Click By Text",
            "Wait for an element with the given visible text to appear, then click it.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "text": { "type": "string", "minLength": 1, "description": "Visible text of the element" }
            },
            "required": ["text"],
            "additionalProperties": false
        })),
        ToolDefinition::new(
            WAIT_SECONDS,
            "Wait Seconds",
            "Pause for a number of seconds, e.g. to let the page settle.",
        )
        .with_parameters_schema(json!({
            "type": "object",
            "properties": {
                "seconds": {
                    "type": "number",
                    "minimum": 0,
                    "maximum": timeouts.max_wait_seconds,
                    "description": "Seconds to wait"
                }
            },
            "required": ["seconds"],
            "additionalProperties": false
        })),
        ToolDefinition::new(
            TAKE_SCREENSHOT,
            "Take Screenshot",
            "Capture the current page as a base64-encoded PNG image.",
        ),
        ToolDefinition::new(
            CLOSE_BROWSER,
            "Close Browser",
            "Close the browser session and all of its pages.",
        ),
    ]
}
