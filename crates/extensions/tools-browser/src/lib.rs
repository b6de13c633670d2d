//! Browser session, form element discovery and browser tools for browsepilot.
//!
//! Drives a locally launched Chrome over the Chrome DevTools Protocol (CDP).
//!
//! ## Architecture
//!
//! ```text
//! BrowserTool ──► BrowserHandler ──► BrowserSessionManager ──► PageDriver
//!                       │                                         ▲
//!                       └──► ElementDiscoveryEngine ──────────────┘
//!                                                    CdpPage (WebSocket/CDP) ──► Chrome
//! ```
//!
//! ## Lazy Launch
//!
//! Chrome is not started when the tools are registered. The first
//! `open_browser` launches it with a throwaway profile and hardened flags
//! (no extensions, no local file access, sandbox on).
//!
//! ## Tools
//!
//! - `open_browser` / `close_browser` - session lifecycle
//! - `open_url` - navigate the current page
//! - `discover_form_elements` - labels and selectors of form controls
//! - `type_text` - keystroke-paced typing into a selector
//! - `click_by_text` - click the element showing some text
//! - `wait_seconds` - pause on the page's timer
//! - `take_screenshot` - base64 PNG of the viewport
//!
//! Every tool except `open_browser` and `close_browser` fails with a
//! precondition error while no session is open.

mod backend;
pub mod cdp;
pub mod config;
pub mod discovery;
pub mod driver;
pub mod error;
mod screenshot;
pub mod session;
mod tools;

#[cfg(test)]
pub(crate) mod fake;

pub use backend::{CdpPage, ChromeBackend};
pub use cdp::{CdpClient, CdpError, PageSession};
pub use config::{BrowserConfig, BrowserTimeouts};
pub use discovery::{DiscoveredElement, ElementAttributes, ElementDiscoveryEngine, MAX_DISCOVERED_ELEMENTS};
pub use driver::{BrowserBackend, PageDriver};
pub use error::BrowserError;
pub use screenshot::{decode_screenshot, persist_screenshot, screenshot_file_name};
pub use session::{BrowserSessionManager, OpenedPage, SessionState};
pub use tools::*;
