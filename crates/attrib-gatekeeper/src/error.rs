//! Gatekeeper error types

use thiserror::Error;

/// Errors that can occur while setting up a gatekeeper
#[derive(Error, Debug)]
pub enum GatekeeperError {
    /// Configuration value out of range
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
