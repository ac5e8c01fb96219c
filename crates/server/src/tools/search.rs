//! search_components tool implementation.

use mantine_docs_client::DocumentationService;
use mantine_docs_core::Error;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for search_components tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchComponentsParams {
    /// Free-text search query.
    pub query: String,
}

/// Output structure for search_components tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchComponentsOutput {
    pub query: String,
    /// Matching component names; empty when search is unavailable.
    pub results: Vec<String>,
}

/// Implementation of the search_components tool.
pub async fn search_impl(
    service: &DocumentationService, params: SearchComponentsParams,
) -> Result<CallToolResult, McpError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(Error::InvalidInput("query cannot be empty".into()).into());
    }

    let results = service.search_components(query).await;
    json_result(&SearchComponentsOutput { query: query.to_string(), results })
}
