//! Unduck Storage Layer
//!
//! SQLite-backed key/value persistence for user preferences
//! (default bang, theme). Every write is a single statement.

mod database;
mod error;
mod migrations;

pub use database::Database;
pub use error::StorageError;

pub type Result<T> = std::result::Result<T, StorageError>;
