//! Application state management
use unduck_core::Unduck;

/// State shared by all request handlers
#[derive(Clone)]
pub struct AppState {
    pub unduck: Unduck,
}

impl AppState {
    pub fn new(unduck: Unduck) -> Self {
        Self { unduck }
    }
}

#[cfg(test)]
impl AppState {
    /// In-memory database and the embedded bang table.
    pub fn for_tests() -> Self {
        let config = unduck_core::Config::new(std::path::PathBuf::from("/tmp/unduck-test"));
        let unduck = Unduck::with_parts(
            config,
            unduck_core::Database::open_in_memory().expect("in-memory database"),
            unduck_core::BangTable::embedded().expect("embedded bang table"),
        );
        Self::new(unduck)
    }
}
