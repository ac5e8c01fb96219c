//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use crate::config::AppConfig;
use thiserror::Error;
use url::Url;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },

    #[error("missing required configuration: {field} ({hint})")]
    Missing { field: String, hint: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if `mantine_version` is empty, and
    /// `ConfigError::Invalid` if:
    /// - `base_url` or `search_url` is not an absolute http(s) URL
    /// - `catalog_path` does not start with `/`
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `ready_timeout_ms` exceeds `timeout_ms`
    /// - `user_agent` is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mantine_version.trim().is_empty() {
            return Err(ConfigError::Missing {
                field: "mantine_version".into(),
                hint: "Set MANTINE_DOCS_MANTINE_VERSION environment variable".into(),
            });
        }

        validate_http_url("base_url", &self.base_url)?;
        validate_http_url("search_url", &self.search_url)?;

        if !self.catalog_path.starts_with('/') {
            return Err(ConfigError::Invalid { field: "catalog_path".into(), reason: "must start with '/'".into() });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }
        if self.ready_timeout_ms > self.timeout_ms {
            return Err(ConfigError::Invalid {
                field: "ready_timeout_ms".into(),
                reason: "must not exceed timeout_ms".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if !self.cache.is_enabled() {
            tracing::warn!("cache.ttl_ms is 0; every documentation request will re-render the page");
        }

        Ok(())
    }
}

fn validate_http_url(field: &str, value: &str) -> Result<(), ConfigError> {
    match Url::parse(value) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(()),
        Ok(url) => {
            Err(ConfigError::Invalid { field: field.into(), reason: format!("unsupported scheme: {}", url.scheme()) })
        }
        Err(e) => Err(ConfigError::Invalid { field: field.into(), reason: e.to_string() }),
    }
}
