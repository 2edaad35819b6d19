//! Main service state container

use std::sync::Arc;

use unduck_bangs::{BangRecord, BangTable};
use unduck_navigation::Abstain;
use unduck_storage::Database;

use crate::config::Config;
use crate::opensearch::opensearch_descriptor;
use crate::preferences::Preferences;
use crate::Result;

/// Main service instance
///
/// Owns the configuration, the preference database and the bang table.
/// The table is loaded once and shared read-only; clones are cheap and
/// share everything.
pub struct Unduck {
    config: Config,
    bangs: Arc<BangTable>,
    preferences: Preferences,
}

impl Unduck {
    /// Open the database and load the bang table described by `config`.
    pub fn new(config: Config) -> Result<Self> {
        if let Some(parent) = config.database_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let db = Database::open(&config.database_path)?;

        let bangs = match config.bangs_path.as_deref() {
            Some(path) => BangTable::from_path(path)?,
            None => BangTable::embedded()?,
        };

        let unduck = Self::with_parts(config, db, bangs);
        tracing::info!(bangs = unduck.bangs.len(), "Unduck initialized");
        Ok(unduck)
    }

    /// Assemble from already-opened parts.
    pub fn with_parts(config: Config, db: Database, bangs: BangTable) -> Self {
        let bangs = Arc::new(bangs);
        let preferences = Preferences::new(db, Arc::clone(&bangs), config.fallback_bang.clone());

        Self {
            config,
            bangs,
            preferences,
        }
    }

    // === Redirects ===

    /// Resolve a raw `q` parameter, reading the default bang once.
    pub fn explain_redirect(&self, raw_query: Option<&str>) -> std::result::Result<String, Abstain> {
        let default_bang = self.current_default_bang();
        unduck_navigation::explain_redirect(raw_query, &default_bang, &self.bangs)
    }

    pub fn redirect_url(&self, raw_query: Option<&str>) -> Option<String> {
        self.explain_redirect(raw_query).ok()
    }

    fn current_default_bang(&self) -> String {
        self.preferences.default_bang().unwrap_or_else(|e| {
            tracing::warn!("Failed to read default bang, using fallback: {}", e);
            self.config.fallback_bang.clone()
        })
    }

    // === Bang table ===

    pub fn bangs(&self) -> &BangTable {
        &self.bangs
    }

    pub fn search_bangs(&self, term: &str, limit: usize) -> Vec<&BangRecord> {
        self.bangs.search(term, limit)
    }

    // === Preferences ===

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    // === Discovery ===

    /// Search URL to register in a browser, `%s` standing for the query.
    pub fn search_url_template(&self) -> String {
        format!("{}?q=%s", self.config.base_url())
    }

    pub fn opensearch_descriptor(&self) -> String {
        opensearch_descriptor(&self.config.public_url)
    }

    // === Config ===

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl Clone for Unduck {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            bangs: Arc::clone(&self.bangs),
            preferences: self.preferences.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn test_unduck() -> Unduck {
        let config = Config::new(PathBuf::from("/tmp/unduck-test"));
        Unduck::with_parts(
            config,
            Database::open_in_memory().unwrap(),
            BangTable::embedded().unwrap(),
        )
    }

    #[test]
    fn test_redirect_uses_saved_default() {
        let unduck = test_unduck();
        assert_eq!(
            unduck.redirect_url(Some("rust")).unwrap(),
            "https://www.google.com/search?q=rust"
        );

        unduck.preferences().set_default_bang("ddg").unwrap();
        assert_eq!(
            unduck.redirect_url(Some("rust")).unwrap(),
            "https://duckduckgo.com/?q=rust"
        );

        // Explicit bangs still win
        assert_eq!(
            unduck.redirect_url(Some("!gh")).unwrap(),
            "https://github.com"
        );
    }

    #[test]
    fn test_redirect_abstains() {
        let unduck = test_unduck();
        assert_eq!(unduck.explain_redirect(None), Err(Abstain::NoQuery));
        assert_eq!(unduck.redirect_url(Some("  ")), None);
    }

    #[test]
    fn test_clones_share_preferences() {
        let unduck = test_unduck();
        let other = unduck.clone();
        unduck.preferences().set_default_bang("w").unwrap();
        assert_eq!(other.preferences().default_bang().unwrap(), "w");
    }

    #[test]
    fn test_search_url_template() {
        let mut config = Config::new(PathBuf::from("/tmp/unduck-test"));
        config.public_url = "https://unduck.example/".to_string();
        let unduck = Unduck::with_parts(
            config,
            Database::open_in_memory().unwrap(),
            BangTable::embedded().unwrap(),
        );
        assert_eq!(unduck.search_url_template(), "https://unduck.example?q=%s");
        assert!(unduck
            .opensearch_descriptor()
            .contains("https://unduck.example?q={searchTerms}"));
    }

    #[test]
    fn test_new_with_custom_table() {
        let dir = tempfile::tempdir().unwrap();
        let bangs_path = dir.path().join("bangs.json");
        let mut file = std::fs::File::create(&bangs_path).unwrap();
        write!(
            file,
            r#"[{{"t":"only","s":"Only","d":"only.example","u":"https://only.example/?q={{{{{{s}}}}}}"}}]"#
        )
        .unwrap();

        let mut config = Config::new(dir.path().join("data"));
        config.bangs_path = Some(bangs_path);
        config.fallback_bang = "only".to_string();

        let unduck = Unduck::new(config).unwrap();
        assert_eq!(unduck.bangs().len(), 1);
        assert_eq!(
            unduck.redirect_url(Some("hello")).unwrap(),
            "https://only.example/?q=hello"
        );
        assert!(dir.path().join("data").join("unduck.db").exists());
    }
}
