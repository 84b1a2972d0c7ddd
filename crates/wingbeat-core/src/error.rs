//! Error types for Wingbeat

use thiserror::Error;

/// The main error type for Wingbeat operations
#[derive(Debug, Error)]
pub enum WingbeatError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("Runtime error: {0}")]
    RuntimeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for Wingbeat operations
pub type Result<T> = std::result::Result<T, WingbeatError>;

impl From<toml::de::Error> for WingbeatError {
    fn from(err: toml::de::Error) -> Self {
        WingbeatError::TomlParseError(err.to_string())
    }
}
