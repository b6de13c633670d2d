//! Registry access trait.

use std::sync::Arc;

use crate::error::RegistryError;
use crate::tool::Tool;

/// Trait for registering tools into a registry owned elsewhere.
pub trait ToolRegistryAccess: Send + Sync {
    /// Register a tool.
    fn register_tool(&self, tool: Arc<dyn Tool>) -> Result<(), RegistryError>;
}
