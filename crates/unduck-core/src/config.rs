//! Service configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address to bind
    pub host: String,
    pub port: u16,
    /// Path to the preference database
    pub database_path: PathBuf,
    /// JSON bang table replacing the embedded one
    pub bangs_path: Option<PathBuf>,
    /// Externally visible base URL, used in the OpenSearch descriptor and
    /// the landing page
    pub public_url: String,
    /// Bang used when no default has been saved
    pub fallback_bang: String,
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: data_dir.join("unduck.db"),
            bangs_path: None,
            public_url: "http://localhost:8080".to_string(),
            fallback_bang: unduck_navigation::FALLBACK_BANG.to_string(),
        }
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("Unduck"))
            .unwrap_or_else(|| PathBuf::from(".unduck"))
    }

    /// Load a TOML config file. A missing file yields the defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let config = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            toml::from_str(&content)?
        } else {
            tracing::info!(path = %path.display(), "Config file not found, using defaults");
            Self::default()
        };

        config.validate()?;
        Ok(config)
    }

    /// Load from `UNDUCK_CONFIG` (or defaults), then apply `UNDUCK_HOST` and
    /// `UNDUCK_PORT`.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os("UNDUCK_CONFIG") {
            Some(path) => Self::load(PathBuf::from(path))?,
            None => Self::default(),
        };

        config.apply_overrides(
            std::env::var("UNDUCK_HOST").ok(),
            std::env::var("UNDUCK_PORT").ok(),
        )?;
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> Result<()> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.host = host.trim().to_string();
        }

        if let Some(port) = port {
            self.port = port
                .trim()
                .parse()
                .map_err(|_| CoreError::Config(format!("Invalid port: {port}")))?;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.public_url)
            .map_err(|e| CoreError::Config(format!("Invalid public_url {}: {e}", self.public_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "public_url must be http(s): {}",
                self.public_url
            )));
        }

        if self.fallback_bang.trim().is_empty() {
            return Err(CoreError::Config("fallback_bang cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Public URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.public_url.trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}
