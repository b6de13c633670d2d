//! Seams between the session manager and the browser engine.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::discovery::ElementAttributes;
use crate::error::BrowserError;

/// Owns the browser process.
#[async_trait]
pub trait BrowserBackend: Send + Sync {
    /// Open a fresh page, launching the browser first if needed.
    async fn new_page(&self) -> Result<Arc<dyn PageDriver>, BrowserError>;

    /// Terminate the browser process and every page. No-op when not running.
    async fn shutdown(&self) -> Result<(), BrowserError>;

    /// Whether a browser process is currently connected.
    async fn is_running(&self) -> bool;
}

/// One page inside the browser.
#[async_trait]
pub trait PageDriver: Send + Sync {
    /// Stable identifier, distinct for every page ever created.
    fn id(&self) -> &str;

    /// Navigate and return the resolved URL.
    async fn navigate(&self, url: &str) -> Result<String, BrowserError>;

    /// Attributes of up to `limit` controls nested in forms, in document order.
    async fn query_form_elements(&self, limit: usize) -> Result<Vec<ElementAttributes>, BrowserError>;

    /// Focus the element matched by `selector` and type `text` one character
    /// at a time with `delay` between characters.
    ///
    /// `selector` is CSS or `text=<visible text>`.
    async fn type_into(&self, selector: &str, text: &str, delay: Duration) -> Result<(), BrowserError>;

    /// Wait up to `timeout` for a visible element whose text matches, then click it.
    async fn click_text(&self, text: &str, timeout: Duration) -> Result<(), BrowserError>;

    /// Capture the viewport as base64 PNG.
    async fn screenshot(&self) -> Result<String, BrowserError>;

    /// Suspend for `duration` on the page's timer.
    async fn wait(&self, duration: Duration) -> Result<(), BrowserError>;

    /// Close the page.
    async fn close(&self) -> Result<(), BrowserError>;
}
