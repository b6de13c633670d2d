//! Executes [`BrowserCommand`]s against the browser session.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use tracing::{debug, warn};

use browsepilot_protocols::error::ToolError;
use browsepilot_protocols::tool::ToolResult;
use browsepilot_protocols::types::ImageAttachment;

use crate::config::{BrowserConfig, BrowserTimeouts};
use crate::discovery::ElementDiscoveryEngine;
use crate::screenshot::{decode_screenshot, persist_screenshot};
use crate::session::BrowserSessionManager;

use super::command::BrowserCommand;

/// Settings the tools read on every call.
#[derive(Debug, Clone, Default)]
pub struct ToolSettings {
    pub timeouts: BrowserTimeouts,
    pub screenshot_dir: Option<PathBuf>,
    /// Reject `file:` URLs in `open_url`.
    pub block_file_urls: bool,
}

impl From<&BrowserConfig> for ToolSettings {
    fn from(config: &BrowserConfig) -> Self {
        Self {
            timeouts: config.timeouts.clone(),
            screenshot_dir: config.screenshot_dir.clone(),
            block_file_urls: config.disable_file_access,
        }
    }
}

/// The single typed handler behind every browser tool.
pub struct BrowserHandler {
    manager: Arc<BrowserSessionManager>,
    discovery: ElementDiscoveryEngine,
    settings: ToolSettings,
}

impl BrowserHandler {
    pub fn new(manager: Arc<BrowserSessionManager>, settings: ToolSettings) -> Self {
        Self {
            manager,
            discovery: ElementDiscoveryEngine::new(),
            settings,
        }
    }

    pub fn manager(&self) -> &Arc<BrowserSessionManager> {
        &self.manager
    }

    pub fn settings(&self) -> &ToolSettings {
        &self.settings
    }

    pub async fn handle(&self, command: BrowserCommand) -> Result<ToolResult, ToolError> {
        match command {
            BrowserCommand::OpenBrowser => {
                let opened = self.manager.open_browser().await?;
                let content = if opened.replaced {
                    "Browser opened (previous page closed)"
                } else {
                    "Browser opened"
                };
                Ok(ToolResult::success(content)
                    .with_metadata("page_id", json!(opened.page_id))
                    .with_metadata("generation", json!(opened.generation))
                    .with_metadata("replaced", json!(opened.replaced)))
            }
            BrowserCommand::CloseBrowser => {
                let was_open = self.manager.close_browser().await?;
                Ok(ToolResult::success(if was_open {
                    "Browser closed"
                } else {
                    "Browser already closed"
                }))
            }
            BrowserCommand::WaitSeconds { seconds } => self.wait_seconds(seconds).await,
            BrowserCommand::OpenUrl { url } => self.open_url(&url).await,
            BrowserCommand::TypeText { selector, text } => {
                let page = self.manager.current_page().await?;
                page.type_into(&selector, &text, self.settings.timeouts.keystroke_delay)
                    .await?;
                debug!(page_id = page.id(), %selector, chars = text.chars().count(), "Typed text");
                Ok(ToolResult::success(format!("Typed text into {}", selector)))
            }
            BrowserCommand::ClickByText { text } => {
                let page = self.manager.current_page().await?;
                page.click_text(&text, self.settings.timeouts.click_wait)
                    .await?;
                debug!(page_id = page.id(), %text, "Clicked element by text");
                Ok(ToolResult::success(format!("Clicked element with text '{}'", text)))
            }
            BrowserCommand::TakeScreenshot => self.take_screenshot().await,
            BrowserCommand::DiscoverFormElements => {
                let page = self.manager.current_page().await?;
                let elements = self.discovery.discover(page.as_ref()).await?;
                let output = serde_json::to_value(&elements)
                    .map_err(|e| ToolError::ExecutionFailed(e.to_string()))?;
                Ok(ToolResult::success(output.to_string())
                    .with_metadata("count", json!(elements.len())))
            }
        }
    }

    async fn wait_seconds(&self, seconds: f64) -> Result<ToolResult, ToolError> {
        let max = self.settings.timeouts.max_wait_seconds as f64;
        if !seconds.is_finite() || !(0.0..=max).contains(&seconds) {
            return Err(ToolError::InvalidParameters(format!(
                "seconds must be between 0 and {}",
                max
            )));
        }
        let page = self.manager.current_page().await?;
        page.wait(Duration::from_secs_f64(seconds)).await?;
        Ok(ToolResult::success(format!("Waited {} seconds", seconds)))
    }

    async fn open_url(&self, url: &str) -> Result<ToolResult, ToolError> {
        if self.settings.block_file_urls {
            if let Ok(parsed) = url::Url::parse(url) {
                if parsed.scheme() == "file" {
                    return Err(ToolError::InvalidParameters(
                        "file: URLs are disabled for this browser".to_string(),
                    ));
                }
            }
        }
        let page = self.manager.current_page().await?;
        let resolved = page.navigate(url).await?;
        debug!(page_id = page.id(), %resolved, "Navigated");
        Ok(ToolResult::success(format!("Opened {}", resolved)).with_metadata("url", json!(resolved)))
    }

    async fn take_screenshot(&self) -> Result<ToolResult, ToolError> {
        let page = self.manager.current_page().await?;
        let data = page.screenshot().await?;
        let png = decode_screenshot(&data)?;
        debug!(page_id = page.id(), bytes = png.len(), "Captured screenshot");

        let mut result = ToolResult::success(format!(
            "Screenshot captured (base64 PNG, {} bytes)",
            png.len()
        ))
        .with_metadata("bytes", json!(png.len()));
        if let Some(dir) = &self.settings.screenshot_dir {
            match persist_screenshot(dir, &png).await {
                Ok(path) => {
                    result = result.with_metadata("path", json!(path.display().to_string()));
                }
                Err(e) => warn!("Failed to save screenshot: {}", e),
            }
        }
        Ok(result.with_image(ImageAttachment::png(data)))
    }
}
