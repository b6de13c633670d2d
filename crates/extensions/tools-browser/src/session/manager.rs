//! The single owner of the browser page handle.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::driver::{BrowserBackend, PageDriver};
use crate::error::BrowserError;

/// Lifecycle state of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionState {
    Closed,
    Open,
}

/// Returned by [`BrowserSessionManager::open_browser`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpenedPage {
    pub page_id: String,
    /// Incremented on every successful open.
    pub generation: u64,
    /// Whether an earlier page was closed to make room.
    pub replaced: bool,
}

struct BrowserSession {
    page: Option<Arc<dyn PageDriver>>,
    generation: u64,
}

/// Owns the browser session: at most one tracked page at a time.
///
/// Every page-dependent operation goes through [`current_page`], which fails
/// with [`BrowserError::NoSession`] while the session is closed.
///
/// [`current_page`]: BrowserSessionManager::current_page
pub struct BrowserSessionManager {
    backend: Arc<dyn BrowserBackend>,
    session: Mutex<BrowserSession>,
}

impl BrowserSessionManager {
    pub fn new(backend: Arc<dyn BrowserBackend>) -> Self {
        Self {
            backend,
            session: Mutex::new(BrowserSession {
                page: None,
                generation: 0,
            }),
        }
    }

    /// Open a fresh page, closing the current one first if there is one.
    ///
    /// The browser process is launched on first use and reused afterwards.
    pub async fn open_browser(&self) -> Result<OpenedPage, BrowserError> {
        let mut session = self.session.lock().await;

        let replaced = match session.page.take() {
            Some(old) => {
                if let Err(e) = old.close().await {
                    warn!(page_id = old.id(), "Failed to close replaced page: {}", e);
                }
                true
            }
            None => false,
        };

        let page = self.backend.new_page().await?;
        session.generation += 1;
        let opened = OpenedPage {
            page_id: page.id().to_string(),
            generation: session.generation,
            replaced,
        };
        session.page = Some(page);

        info!(
            page_id = %opened.page_id,
            generation = opened.generation,
            replaced,
            "Browser session opened"
        );
        Ok(opened)
    }

    /// Close the page and the browser process.
    ///
    /// Returns `false` when the session was already closed. A browser left
    /// running without a page (an open that failed after launch) is still
    /// shut down.
    pub async fn close_browser(&self) -> Result<bool, BrowserError> {
        let mut session = self.session.lock().await;
        let was_open = session.page.is_some();

        if let Some(page) = session.page.take() {
            if let Err(e) = page.close().await {
                warn!(page_id = page.id(), "Failed to close page: {}", e);
            }
        }
        if self.backend.is_running().await {
            self.backend.shutdown().await?;
        } else {
            debug!("No browser process to shut down");
        }

        if was_open {
            info!("Browser session closed");
        }
        Ok(was_open)
    }

    /// The open page, or [`BrowserError::NoSession`].
    pub async fn current_page(&self) -> Result<Arc<dyn PageDriver>, BrowserError> {
        self.session
            .lock()
            .await
            .page
            .clone()
            .ok_or(BrowserError::NoSession)
    }

    pub async fn state(&self) -> SessionState {
        if self.session.lock().await.page.is_some() {
            SessionState::Open
        } else {
            SessionState::Closed
        }
    }

    /// ID of the open page, if any.
    pub async fn page_id(&self) -> Option<String> {
        self.session
            .lock()
            .await
            .page
            .as_ref()
            .map(|p| p.id().to_string())
    }
}
