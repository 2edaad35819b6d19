//! Persisted user preferences

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use unduck_bangs::BangTable;
use unduck_storage::Database;

use crate::error::CoreError;
use crate::Result;

pub const DEFAULT_BANG_KEY: &str = "default-bang";
pub const THEME_KEY: &str = "theme";

/// Display name shown when the saved default bang is not in the table.
const FALLBACK_ENGINE_NAME: &str = "Google";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(CoreError::InvalidTheme(s.to_string())),
        }
    }
}

/// User preference store backed by the `settings` table.
///
/// The resolver never writes here; it only reads the default bang once per
/// resolution.
pub struct Preferences {
    db: Database,
    bangs: Arc<BangTable>,
    fallback_bang: String,
}

impl Preferences {
    pub fn new(db: Database, bangs: Arc<BangTable>, fallback_bang: String) -> Self {
        Self {
            db,
            bangs,
            fallback_bang,
        }
    }

    /// Saved default bang, or the configured fallback.
    pub fn default_bang(&self) -> Result<String> {
        Ok(self
            .db
            .get_setting(DEFAULT_BANG_KEY)?
            .filter(|token| !token.trim().is_empty())
            .unwrap_or_else(|| self.fallback_bang.clone()))
    }

    /// Save a new default bang. The token must exist in the table; the
    /// table's own spelling is stored.
    pub fn set_default_bang(&self, token: &str) -> Result<String> {
        let token = token.trim().trim_start_matches('!');
        let record = self
            .bangs
            .get(token)
            .ok_or_else(|| CoreError::UnknownBang(token.to_string()))?;

        self.db.set_setting(DEFAULT_BANG_KEY, &record.token)?;
        tracing::info!(bang = %record.token, engine = %record.short_name, "Default bang changed");
        Ok(record.token.clone())
    }

    /// Forget the saved default bang.
    pub fn reset_default_bang(&self) -> Result<()> {
        self.db.remove_setting(DEFAULT_BANG_KEY)?;
        Ok(())
    }

    /// Short name of the default engine, for display.
    pub fn default_engine_name(&self) -> Result<String> {
        let token = self.default_bang()?;
        Ok(self
            .bangs
            .get(&token)
            .map(|record| record.short_name.clone())
            .unwrap_or_else(|| FALLBACK_ENGINE_NAME.to_string()))
    }

    pub fn theme(&self) -> Result<Theme> {
        match self.db.get_setting(THEME_KEY)? {
            Some(value) => Ok(value.parse().unwrap_or_else(|_| {
                tracing::warn!(value = %value, "Ignoring unknown stored theme");
                Theme::default()
            })),
            None => Ok(Theme::default()),
        }
    }

    pub fn set_theme(&self, theme: Theme) -> Result<()> {
        self.db.set_setting(THEME_KEY, theme.as_str())?;
        Ok(())
    }

    pub fn toggle_theme(&self) -> Result<Theme> {
        let theme = self.theme()?.toggled();
        self.set_theme(theme)?;
        Ok(theme)
    }
}

impl Clone for Preferences {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            bangs: Arc::clone(&self.bangs),
            fallback_bang: self.fallback_bang.clone(),
        }
    }
}
