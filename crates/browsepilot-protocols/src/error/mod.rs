//! Error types for the browsepilot protocol layer.

mod planner;
mod registry;
mod tool;

pub use planner::*;
pub use registry::*;
pub use tool::*;
