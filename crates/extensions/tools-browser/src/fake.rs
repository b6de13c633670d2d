//! In-memory browser used by unit tests.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::discovery::ElementAttributes;
use crate::driver::{BrowserBackend, PageDriver};
use crate::error::BrowserError;

/// One observable browser-level effect.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Launch,
    NewPage(String),
    Navigate(String, String),
    Type(String, String, String),
    Click(String, String),
    Screenshot(String),
    Wait(String, Duration),
    ClosePage(String),
    Shutdown,
}

#[derive(Default)]
struct FakeState {
    running: bool,
    pages_created: u64,
    effects: Vec<Effect>,
    form_elements: Vec<ElementAttributes>,
    selectors: HashSet<String>,
    texts: HashSet<String>,
    crashed: bool,
    fail_next_page: bool,
}

/// Records every effect instead of driving a browser.
#[derive(Clone, Default)]
pub struct FakeBackend {
    state: Arc<Mutex<FakeState>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selectors(self, selectors: &[&str]) -> Self {
        self.state
            .lock()
            .selectors
            .extend(selectors.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_texts(self, texts: &[&str]) -> Self {
        self.state
            .lock()
            .texts
            .extend(texts.iter().map(|s| s.to_string()));
        self
    }

    pub fn with_form_elements(self, elements: Vec<ElementAttributes>) -> Self {
        self.state.lock().form_elements = elements;
        self
    }

    /// Launch normally but fail the next page creation.
    pub fn fail_next_page(&self) {
        self.state.lock().fail_next_page = true;
    }

    /// Make every later page operation fail as if Chrome died.
    pub fn crash(&self) {
        self.state.lock().crashed = true;
    }

    pub fn effects(&self) -> Vec<Effect> {
        self.state.lock().effects.clone()
    }

    fn record(&self, effect: Effect) {
        self.state.lock().effects.push(effect);
    }
}

#[async_trait]
impl BrowserBackend for FakeBackend {
    async fn new_page(&self) -> Result<Arc<dyn PageDriver>, BrowserError> {
        let id = {
            let mut state = self.state.lock();
            if !state.running {
                state.running = true;
                state.crashed = false;
                state.effects.push(Effect::Launch);
            }
            if std::mem::take(&mut state.fail_next_page) {
                return Err(BrowserError::ActionFailed("target creation failed".to_string()));
            }
            state.pages_created += 1;
            format!("page-{}", state.pages_created)
        };
        self.record(Effect::NewPage(id.clone()));
        Ok(Arc::new(FakePage {
            id,
            backend: self.clone(),
        }))
    }

    async fn shutdown(&self) -> Result<(), BrowserError> {
        let mut state = self.state.lock();
        if state.running {
            state.running = false;
            state.effects.push(Effect::Shutdown);
        }
        Ok(())
    }

    async fn is_running(&self) -> bool {
        self.state.lock().running
    }
}

struct FakePage {
    id: String,
    backend: FakeBackend,
}

impl FakePage {
    fn check_alive(&self) -> Result<(), BrowserError> {
        if self.backend.state.lock().crashed {
            Err(BrowserError::ConnectionLost("browser process exited".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PageDriver for FakePage {
    fn id(&self) -> &str {
        &self.id
    }

    async fn navigate(&self, url: &str) -> Result<String, BrowserError> {
        self.check_alive()?;
        if url.contains("crash") {
            self.backend.crash();
            return Err(BrowserError::ConnectionLost("renderer crashed".to_string()));
        }
        if url.contains("unreachable") {
            return Err(BrowserError::NavigationFailed(format!(
                "{}: net::ERR_NAME_NOT_RESOLVED",
                url
            )));
        }
        let resolved = match url::Url::parse(url) {
            Ok(parsed) => parsed.to_string(),
            Err(_) => url.to_string(),
        };
        self.backend
            .record(Effect::Navigate(self.id.clone(), resolved.clone()));
        Ok(resolved)
    }

    async fn query_form_elements(&self, limit: usize) -> Result<Vec<ElementAttributes>, BrowserError> {
        self.check_alive()?;
        let state = self.backend.state.lock();
        Ok(state.form_elements.iter().take(limit).cloned().collect())
    }

    async fn type_into(&self, selector: &str, text: &str, _delay: Duration) -> Result<(), BrowserError> {
        self.check_alive()?;
        if !self.backend.state.lock().selectors.contains(selector) {
            return Err(BrowserError::ElementNotFound(selector.to_string()));
        }
        self.backend.record(Effect::Type(
            self.id.clone(),
            selector.to_string(),
            text.to_string(),
        ));
        Ok(())
    }

    async fn click_text(&self, text: &str, timeout: Duration) -> Result<(), BrowserError> {
        self.check_alive()?;
        if !self.backend.state.lock().texts.contains(text) {
            return Err(BrowserError::Timeout {
                operation: format!("Waiting for visible text '{}'", text),
                millis: timeout.as_millis() as u64,
            });
        }
        self.backend
            .record(Effect::Click(self.id.clone(), text.to_string()));
        Ok(())
    }

    async fn screenshot(&self) -> Result<String, BrowserError> {
        self.check_alive()?;
        self.backend.record(Effect::Screenshot(self.id.clone()));
        // 1x1 transparent PNG
        Ok("iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=".to_string())
    }

    async fn wait(&self, duration: Duration) -> Result<(), BrowserError> {
        self.check_alive()?;
        self.backend.record(Effect::Wait(self.id.clone(), duration));
        Ok(())
    }

    async fn close(&self) -> Result<(), BrowserError> {
        self.backend.record(Effect::ClosePage(self.id.clone()));
        Ok(())
    }
}
