//! Browser tools.
//!
//! Every tool is a [`BrowserTool`]: a definition plus a shared
//! [`BrowserHandler`]. Arguments are schema-checked by the registry, parsed
//! into a [`BrowserCommand`] here and executed by the handler.

mod catalog;
mod command;
mod handler;

pub use catalog::*;
pub use command::BrowserCommand;
pub use handler::{BrowserHandler, ToolSettings};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use browsepilot_protocols::error::{RegistryError, ToolError};
use browsepilot_protocols::registry::ToolRegistryAccess;
use browsepilot_protocols::tool::{Tool, ToolContext, ToolDefinition, ToolResult};

use crate::backend::ChromeBackend;
use crate::config::BrowserConfig;
use crate::driver::BrowserBackend;
use crate::session::BrowserSessionManager;

/// One named browser operation.
pub struct BrowserTool {
    definition: ToolDefinition,
    handler: Arc<BrowserHandler>,
}

impl BrowserTool {
    pub fn new(definition: ToolDefinition, handler: Arc<BrowserHandler>) -> Self {
        Self {
            definition,
            handler,
        }
    }
}

#[async_trait]
impl Tool for BrowserTool {
    fn definition(&self) -> &ToolDefinition {
        &self.definition
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: ToolContext,
    ) -> Result<ToolResult, ToolError> {
        let command = BrowserCommand::parse(&self.definition.name, params)?;
        debug!(run_id = %ctx.run_id, turn = ctx.turn, ?command, "Executing browser command");
        self.handler.handle(command).await
    }
}

/// The full set of browser tools over one session.
pub struct BrowserToolset {
    handler: Arc<BrowserHandler>,
    tools: Vec<Arc<BrowserTool>>,
}

impl BrowserToolset {
    /// Tools driving a local Chrome launched from `config`.
    pub fn new(config: BrowserConfig) -> Self {
        let settings = ToolSettings::from(&config);
        Self::with_backend(Arc::new(ChromeBackend::new(config)), settings)
    }

    pub fn with_backend(backend: Arc<dyn BrowserBackend>, settings: ToolSettings) -> Self {
        let manager = Arc::new(BrowserSessionManager::new(backend));
        let handler = Arc::new(BrowserHandler::new(manager, settings));
        let tools = definitions(&handler.settings().timeouts)
            .into_iter()
            .map(|definition| Arc::new(BrowserTool::new(definition, handler.clone())))
            .collect();
        Self { handler, tools }
    }

    pub fn manager(&self) -> &Arc<BrowserSessionManager> {
        self.handler.manager()
    }

    pub fn tools(&self) -> &[Arc<BrowserTool>] {
        &self.tools
    }

    pub fn register(&self, registry: &dyn ToolRegistryAccess) -> Result<(), RegistryError> {
        for tool in &self.tools {
            registry.register_tool(tool.clone())?;
        }
        Ok(())
    }
}
