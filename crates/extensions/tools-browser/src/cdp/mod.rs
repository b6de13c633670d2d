//! Chrome DevTools Protocol (CDP) client.
//!
//! A small JSON-RPC client over the browser's debugging WebSocket. The
//! browser-level [`CdpClient`] manages targets; each [`PageSession`] is a
//! flattened session attached to one page.

mod client;
mod error;
mod protocol;
mod session;
mod transport;

pub use client::CdpClient;
pub use error::CdpError;
pub use protocol::*;
pub use session::PageSession;
