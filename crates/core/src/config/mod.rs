//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (MANTINE_DOCS_*)
//! 2. TOML config file (if MANTINE_DOCS_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::cache::{CacheConfig, StorageMode};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (MANTINE_DOCS_*), nested keys split on `__`
/// 2. TOML config file (if MANTINE_DOCS_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Documentation source version tag; cache entries from other versions are ignored.
    ///
    /// Set via MANTINE_DOCS_MANTINE_VERSION environment variable.
    #[serde(default = "default_mantine_version")]
    pub mantine_version: String,

    /// Documentation site root.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Remote search endpoint, queried with `?q=<query>`.
    #[serde(default = "default_search_url")]
    pub search_url: String,

    /// Page whose navigation lists every component.
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Cache TTL and storage mode.
    ///
    /// Set via MANTINE_DOCS_CACHE__TTL_MS and MANTINE_DOCS_CACHE__STORAGE.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Directory holding one file per cache key.
    ///
    /// Set via MANTINE_DOCS_CACHE_DIR environment variable.
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// User-Agent string for HTTP requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Navigation and search timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// CSS selector signalling that a rendered page is ready.
    #[serde(default = "default_ready_selector")]
    pub ready_selector: Option<String>,

    /// How long to wait for `ready_selector` before extracting anyway.
    #[serde(default = "default_ready_timeout_ms")]
    pub ready_timeout_ms: u64,

    /// Browser executable; auto-detected when unset.
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,
}

fn default_mantine_version() -> String {
    "7.17.0".into()
}

fn default_base_url() -> String {
    "https://mantine.dev".into()
}

fn default_search_url() -> String {
    "https://mantine.dev/api/search".into()
}

fn default_catalog_path() -> String {
    "/getting-started".into()
}

fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".mantine-docs-mcp")
        .join("cache")
}

fn default_user_agent() -> String {
    "mantine-docs-mcp/0.1".into()
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_ready_selector() -> Option<String> {
    Some("table".into())
}

fn default_ready_timeout_ms() -> u64 {
    10_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mantine_version: default_mantine_version(),
            base_url: default_base_url(),
            search_url: default_search_url(),
            catalog_path: default_catalog_path(),
            cache: CacheConfig::default(),
            cache_dir: default_cache_dir(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
            ready_selector: default_ready_selector(),
            ready_timeout_ms: default_ready_timeout_ms(),
            chrome_path: None,
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Readiness wait bound as Duration.
    pub fn ready_timeout(&self) -> Duration {
        Duration::from_millis(self.ready_timeout_ms)
    }

    /// Whether cache lookups can ever hit.
    pub fn caching_enabled(&self) -> bool {
        self.cache.is_enabled()
    }

    /// Whether cache entries are persisted to `cache_dir`.
    pub fn persists_cache(&self) -> bool {
        self.cache.storage == StorageMode::File
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `MANTINE_DOCS_`
    /// 2. TOML file from `MANTINE_DOCS_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("MANTINE_DOCS_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("MANTINE_DOCS_")
                .ignore(&["config_file"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }
}

/// Supplies the configuration in effect for a single call.
///
/// The documentation service asks for a fresh snapshot on every operation, so
/// a provider backed by mutable state lets version or cache settings change
/// without rebuilding the service.
pub trait ConfigProvider: Send + Sync {
    fn current(&self) -> AppConfig;
}

impl ConfigProvider for AppConfig {
    fn current(&self) -> AppConfig {
        self.clone()
    }
}

impl ConfigProvider for std::sync::RwLock<AppConfig> {
    fn current(&self) -> AppConfig {
        match self.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}
