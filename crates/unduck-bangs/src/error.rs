//! Bang table error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BangError {
    #[error("Failed to read bang table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid bang table: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Bang table is empty")]
    Empty,
}
