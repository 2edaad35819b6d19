//! Unduck Bang Table
//!
//! The static collection of bang definitions. A table is loaded once
//! (embedded asset or JSON file), indexed by lowercased token, and never
//! mutated afterwards, so it can be shared behind an `Arc` without locking.

mod error;
mod record;
mod table;

pub use error::BangError;
pub use record::{BangRecord, QUERY_PLACEHOLDER};
pub use table::BangTable;

pub type Result<T> = std::result::Result<T, BangError>;
