//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod browser;
mod planner;

pub use browser::*;
pub use planner::*;

/// Shared default helper used by submodules.
pub(crate) fn default_true() -> bool {
    true
}

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub browser: BrowserSection,

    #[serde(default)]
    pub orchestrator: OrchestratorSection,

    #[serde(default)]
    pub planner: PlannerSection,

    #[serde(default)]
    pub logging: LoggingSection,
}

/// Orchestration loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorSection {
    /// Planner decisions allowed per run.
    #[serde(default = "default_max_turns")]
    pub max_turns: u32,
}

impl Default for OrchestratorSection {
    fn default() -> Self {
        Self {
            max_turns: default_max_turns(),
        }
    }
}

fn default_max_turns() -> u32 {
    20
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    /// Directory for daily log files.
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,

    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,

    /// Default filter when `RUST_LOG` is unset.
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
            file_prefix: default_file_prefix(),
            level: default_level(),
        }
    }
}

fn default_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("browsepilot")
        .join("logs")
}

fn default_file_prefix() -> String {
    "browsepilot.log".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
