//! clear_cache tool implementation.
//!
//! Drops cached documentation for one component or for every component.

use chrono::Utc;
use mantine_docs_client::{DocumentationService, canonical_name};
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Parameters for the clear_cache tool.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ClearCacheParams {
    /// Component to clear; every cached component when omitted.
    #[serde(default)]
    pub name: Option<String>,
}

/// Output from the clear_cache tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ClearCacheOutput {
    /// Cleared component name, or "all".
    pub cleared: String,
    pub cleared_at: String,
}

/// Implementation of the clear_cache tool.
pub async fn clear_impl(service: &DocumentationService, params: ClearCacheParams) -> Result<CallToolResult, McpError> {
    let name = params.name.as_deref().map(str::trim).filter(|n| !n.is_empty());

    service.clear_cache(name).await?;

    let output = ClearCacheOutput {
        cleared: name.map(canonical_name).unwrap_or_else(|| "all".to_string()),
        cleared_at: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
    };
    json_result(&output)
}
