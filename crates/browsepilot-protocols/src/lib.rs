//! # browsepilot protocols
//!
//! Interface definitions shared by every browsepilot crate. Contains only
//! traits and plain data types - no browser or network code.
//!
//! ## Core Traits
//!
//! - [`Tool`] - A named, schema-described operation the planner can invoke
//! - [`Planner`] - Chooses the next tool call or declares the task complete
//! - [`ToolRegistryAccess`] - Lets tool crates register into a registry they do not own

pub mod error;
pub mod planner;
pub mod registry;
pub mod tool;
pub mod types;

pub use error::{FailureKind, PlannerError, RegistryError, ToolError};
pub use planner::{Planner, PlannerDecision};
pub use registry::ToolRegistryAccess;
pub use tool::{Tool, ToolContext, ToolDefinition, ToolResult};
pub use types::*;
