//! Error types
use std::env::VarError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BotError {
    /// Serialization/Deserialization Error
    #[error("Serialization Error: {0}")]
    Serialization(#[from] serde_json::Error),
    /// Validation Error
    #[error("Validation Error: {0}")]
    Validation(String),
    /// Configuration Error
    #[error("Config Error: {0}")]
    Config(String),
    /// Environment variable Error
    #[error("Environment Error: {0}")]
    Environment(#[from] VarError),
    /// File System Error
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
    /// Logging setup Error
    #[error("Logging Error: {0}")]
    Logging(String),
}

impl From<toml::de::Error> for BotError {
    fn from(err: toml::de::Error) -> Self {
        BotError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BotError>;
