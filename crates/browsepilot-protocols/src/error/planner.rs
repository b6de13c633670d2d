//! Planner errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error ({status}): {message}")]
    ApiError { status: u16, message: String },

    #[error("Invalid planner response: {0}")]
    InvalidResponse(String),

    #[error("Planner misconfigured: {0}")]
    Configuration(String),

    #[error("Planner script exhausted after {0} decisions")]
    Exhausted(usize),
}
