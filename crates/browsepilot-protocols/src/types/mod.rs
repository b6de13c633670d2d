//! Common types shared by the browsepilot crates.

mod common;
mod image;
mod invocation;
mod turn;

pub use common::*;
pub use image::*;
pub use invocation::*;
pub use turn::*;
