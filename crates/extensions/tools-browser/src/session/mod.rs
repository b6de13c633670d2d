//! Browser session lifecycle.

mod manager;

pub use manager::{BrowserSessionManager, OpenedPage, SessionState};

#[cfg(test)]
#[path = "manager_tests.rs"]
mod tests;
