//! # browsepilot core
//!
//! The tool registry: a name-keyed catalog of schema-validated tools and the
//! single dispatch path the orchestration loop uses to invoke them.
//!
//! ## Components
//!
//! - [`ToolRegistry`] - Registration, catalog export, validation and dispatch
//! - [`BaseRegistry`] - Insertion-ordered concurrent map backing the registry

pub mod registry;

pub use registry::{BaseRegistry, Registerable, ToolRegistry};
