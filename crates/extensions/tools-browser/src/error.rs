//! Browser error types.

use thiserror::Error;

use browsepilot_protocols::error::ToolError;

use crate::cdp::CdpError;

/// Remediation text attached to every precondition failure.
pub const NO_SESSION_MESSAGE: &str =
    "No browser session is open; open a browser session first (call open_browser)";

/// Browser session and driver errors.
#[derive(Debug, Error)]
pub enum BrowserError {
    #[error("{}", NO_SESSION_MESSAGE)]
    NoSession,

    #[error("Browser connection lost: {0}")]
    ConnectionLost(String),

    #[error("Chrome not found. Install Chrome/Chromium or set browser.executable")]
    ChromeNotFound,

    #[error("Failed to launch Chrome: {0}")]
    LaunchFailed(String),

    #[error("Navigation failed: {0}")]
    NavigationFailed(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("{operation} timed out after {millis} ms")]
    Timeout { operation: String, millis: u64 },

    #[error("Action failed: {0}")]
    ActionFailed(String),

    #[error("Screenshot failed: {0}")]
    ScreenshotFailed(String),
}

impl BrowserError {
    /// Whether the browser process or its connection is gone.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, BrowserError::ConnectionLost(_))
    }
}

impl From<CdpError> for BrowserError {
    fn from(e: CdpError) -> Self {
        match e {
            CdpError::ConnectionFailed(msg) | CdpError::WebSocket(msg) => {
                BrowserError::ConnectionLost(msg)
            }
            CdpError::SessionClosed => BrowserError::ConnectionLost("session closed".to_string()),
            CdpError::ChromeNotAvailable(msg) => BrowserError::LaunchFailed(msg),
            CdpError::NavigationFailed(msg) => BrowserError::NavigationFailed(msg),
            CdpError::ElementNotFound(msg) => BrowserError::ElementNotFound(msg),
            CdpError::Timeout { operation, millis } => BrowserError::Timeout { operation, millis },
            CdpError::JavaScript(msg) => BrowserError::ActionFailed(format!("JS error: {}", msg)),
            _ => BrowserError::ActionFailed(e.to_string()),
        }
    }
}

impl From<BrowserError> for ToolError {
    fn from(e: BrowserError) -> Self {
        match e {
            BrowserError::NoSession => ToolError::Precondition(NO_SESSION_MESSAGE.to_string()),
            BrowserError::ConnectionLost(_) => ToolError::Unrecoverable(e.to_string()),
            BrowserError::Timeout { operation, millis } => ToolError::Timeout { operation, millis },
            other => ToolError::Driver(other.to_string()),
        }
    }
}
