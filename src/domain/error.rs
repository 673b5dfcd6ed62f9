//! Domain error types

use thiserror::Error;

/// Error when scanning an audio or prompts directory
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("Directory not found: {0}")]
    DirNotFound(String),

    #[error("Failed to read directory: {0}")]
    ReadError(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
