//! list_components tool implementation.

use mantine_docs_client::DocumentationService;
use rmcp::{ErrorData as McpError, model::CallToolResult};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Output structure for list_components tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ListComponentsOutput {
    pub components: Vec<String>,
    pub count: usize,
}

/// Implementation of the list_components tool.
pub async fn list_impl(service: &DocumentationService) -> Result<CallToolResult, McpError> {
    let components = service.list_all_components().await;
    json_result(&ListComponentsOutput { count: components.len(), components })
}
