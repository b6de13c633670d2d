//! Chrome implementation of the driver traits.

mod chrome;
mod page;
mod scripts;

pub use chrome::ChromeBackend;
pub use page::CdpPage;
