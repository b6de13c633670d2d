//! CDP-backed page driver.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::debug;

use crate::cdp::{CdpClient, PageSession, Point};
use crate::config::BrowserTimeouts;
use crate::discovery::ElementAttributes;
use crate::driver::PageDriver;
use crate::error::BrowserError;

use super::scripts;

/// Prefix marking a visible-text selector.
const TEXT_SELECTOR_PREFIX: &str = "text=";

const CLICK_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A page reached through a flattened CDP session.
pub struct CdpPage {
    client: Arc<CdpClient>,
    session: PageSession,
    timeouts: BrowserTimeouts,
}

impl CdpPage {
    pub fn new(client: Arc<CdpClient>, session: PageSession, timeouts: BrowserTimeouts) -> Self {
        Self {
            client,
            session,
            timeouts,
        }
    }

    /// Focus the element a selector resolves to.
    async fn focus(&self, selector: &str) -> Result<(), BrowserError> {
        if let Some(text) = selector.strip_prefix(TEXT_SELECTOR_PREFIX) {
            let found: Option<Point> = self
                .session
                .evaluate_as(&scripts::locate_text(text, true))
                .await?;
            return found
                .map(|_| ())
                .ok_or_else(|| BrowserError::ElementNotFound(selector.to_string()));
        }

        let status: String = self.session.evaluate_as(&scripts::focus_css(selector)).await?;
        match status.as_str() {
            "ok" => Ok(()),
            "invalid" => Err(BrowserError::ElementNotFound(format!(
                "{} (not a valid selector)",
                selector
            ))),
            _ => Err(BrowserError::ElementNotFound(selector.to_string())),
        }
    }
}

#[async_trait]
impl PageDriver for CdpPage {
    fn id(&self) -> &str {
        self.session.target_id()
    }

    async fn navigate(&self, url: &str) -> Result<String, BrowserError> {
        let timeout = self.timeouts.navigation;
        match tokio::time::timeout(timeout, self.session.navigate(url, timeout)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(BrowserError::Timeout {
                operation: format!("Navigation to {}", url),
                millis: timeout.as_millis() as u64,
            }),
        }
    }

    async fn query_form_elements(&self, limit: usize) -> Result<Vec<ElementAttributes>, BrowserError> {
        let elements: Vec<ElementAttributes> = self
            .session
            .evaluate_as(&scripts::form_elements(limit))
            .await?;
        Ok(elements)
    }

    async fn type_into(&self, selector: &str, text: &str, delay: Duration) -> Result<(), BrowserError> {
        self.focus(selector).await?;

        for (i, ch) in text.chars().enumerate() {
            if i > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            self.session.type_char(ch).await?;
        }

        debug!("Typed {} characters into {}", text.chars().count(), selector);
        Ok(())
    }

    async fn click_text(&self, text: &str, timeout: Duration) -> Result<(), BrowserError> {
        let script = scripts::locate_text(text, false);
        let started = Instant::now();

        loop {
            let found: Option<Point> = self.session.evaluate_as(&script).await?;
            if let Some(point) = found {
                self.session.click(point).await?;
                return Ok(());
            }
            if started.elapsed() >= timeout {
                return Err(BrowserError::Timeout {
                    operation: format!("Waiting for visible text '{}'", text),
                    millis: timeout.as_millis() as u64,
                });
            }
            tokio::time::sleep(CLICK_POLL_INTERVAL).await;
        }
    }

    async fn screenshot(&self) -> Result<String, BrowserError> {
        let data = self.session.screenshot_png().await?;
        if data.is_empty() {
            return Err(BrowserError::ScreenshotFailed("empty image".to_string()));
        }
        Ok(data)
    }

    async fn wait(&self, duration: Duration) -> Result<(), BrowserError> {
        tokio::time::sleep(duration).await;
        if !self.client.is_connected() {
            return Err(BrowserError::ConnectionLost(
                "browser disconnected while waiting".to_string(),
            ));
        }
        Ok(())
    }

    async fn close(&self) -> Result<(), BrowserError> {
        self.client.close_page(self.session.target_id()).await?;
        Ok(())
    }
}
