//! # browsepilot config
//!
//! TOML configuration for browsepilot: browser launch settings and
//! timeouts, the orchestration turn ceiling, the planner endpoint and
//! logging. `${VAR}` references are expanded from the environment before
//! parsing.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
