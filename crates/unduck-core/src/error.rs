//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] unduck_storage::StorageError),

    #[error("Bang table error: {0}")]
    Bangs(#[from] unduck_bangs::BangError),

    #[error("Unknown bang: {0}")]
    UnknownBang(String),

    #[error("Unsupported theme: {0}")]
    InvalidTheme(String),

    #[error("Invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CoreError {
    /// Whether the error was caused by bad caller input rather than the
    /// service itself.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, CoreError::UnknownBang(_) | CoreError::InvalidTheme(_))
    }
}

// Implement std::io::Error conversion for fs operations
impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Config(e.to_string())
    }
}
