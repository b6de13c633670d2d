//! Registry errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Already registered: {0}")]
    AlreadyRegistered(String),

    #[error("Invalid parameter schema for {name}: {message}")]
    InvalidSchema { name: String, message: String },
}
