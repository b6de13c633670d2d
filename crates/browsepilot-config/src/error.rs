//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `${VAR}` referenced in the file but absent from the environment.
    #[error("Environment variable not set: {0}")]
    EnvVarNotSet(String),

    /// Validation failed; the message lists every problem found.
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
