//! Unduck Core
//!
//! Central coordination layer: configuration, the shared bang table,
//! the preference store, and the redirect entry point used by the server.

mod config;
mod error;
mod opensearch;
mod preferences;
mod unduck;

pub use config::Config;
pub use error::CoreError;
pub use opensearch::{escape_markup, opensearch_descriptor};
pub use preferences::{Preferences, Theme, DEFAULT_BANG_KEY, THEME_KEY};
pub use unduck::Unduck;

// Re-export core components
pub use unduck_bangs::{BangError, BangRecord, BangTable};
pub use unduck_navigation::{
    explain_redirect, extract_bang, get_redirect_url, Abstain, ParsedQuery, FALLBACK_BANG,
};
pub use unduck_storage::{Database, StorageError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = fmt().with_env_filter(filter).with_target(true).try_init();
}
