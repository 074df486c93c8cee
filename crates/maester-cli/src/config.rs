//! Configuration loading for the maester CLI.
//!
//! The config file is optional TOML. Resolution order for its location:
//! explicit `--config` flag (or `MAESTER_CONFIG`, handled by clap's env
//! support), then `<platform config dir>/maester/config.toml`. A
//! missing file is not an error — built-in defaults cover everything.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use maester_core::{Error, Result};

/// Default contents written by `maester config init`.
pub const DEFAULT_CONFIG_FILE: &str = "\
# maester configuration

[api]
# Base URL of the Ice and Fire API, without a trailing slash.
base_url = \"https://anapioficeandfire.com/api\"
# Per-request timeout in seconds.
timeout_seconds = 30

[fetch]
# How many sworn-member requests may be in flight at once.
concurrency = 8
";

/// Top-level configuration for the maester CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct MaesterConfig {
    /// External API settings.
    pub api: ApiConfig,
    /// Fan-out settings.
    pub fetch: FetchConfig,
}

/// Settings for reaching the external API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Base URL of the API, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: maester_client::DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 30,
        }
    }
}

/// Settings for member-resolution fan-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FetchConfig {
    /// Bound on concurrent member-resolution requests.
    pub concurrency: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self { concurrency: 8 }
    }
}

impl MaesterConfig {
    /// Loads configuration from the resolved path.
    ///
    /// A path that resolves but does not exist yields the defaults; an
    /// existing file that fails to parse is an error.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let Some(path) = Self::resolve_config_path(config_path) else {
            return Ok(Self::default());
        };
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Loads and parses a specific config file.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Resolves the config file location: explicit path first, then the
    /// per-platform default.
    pub fn resolve_config_path(config_path: Option<&str>) -> Option<PathBuf> {
        match config_path {
            Some(p) => Some(PathBuf::from(p)),
            None => Self::default_config_path(),
        }
    }

    /// `<platform config dir>/maester/config.toml`, when determinable.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("maester").join("config.toml"))
    }

    /// Client options derived from this configuration.
    pub fn client_options(&self) -> maester_client::ClientOptions {
        maester_client::ClientOptions {
            base_url: self.api.base_url.clone(),
            timeout: std::time::Duration::from_secs(self.api.timeout_seconds),
            concurrency: self.fetch.concurrency,
        }
    }
}
