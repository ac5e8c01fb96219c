//! get_component_docs tool implementation.
//!
//! Returns a component's documentation as JSON or Markdown.

use mantine_docs_client::{DocumentationService, format_markdown};
use mantine_docs_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::json_result;

/// Input parameters for get_component_docs tool.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ComponentDocsParams {
    /// Component name, e.g. "Button" or "action-icon".
    pub name: String,

    /// Bypass the cache and fetch the page again.
    #[serde(default)]
    pub force_refresh: bool,

    /// Output format: json (default) or markdown.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "json".into()
}

/// Implementation of the get_component_docs tool.
pub async fn component_docs_impl(
    service: &DocumentationService, params: ComponentDocsParams,
) -> Result<CallToolResult, McpError> {
    if params.name.trim().is_empty() {
        return Err(Error::InvalidInput("name cannot be empty".into()).into());
    }

    let markdown = match params.format.as_str() {
        "json" => false,
        "markdown" => true,
        other => return Err(Error::InvalidInput(format!("unsupported format: {other}")).into()),
    };

    let doc = service.get_documentation(&params.name, params.force_refresh).await?;

    if markdown {
        Ok(CallToolResult::success(vec![Content::text(format_markdown(&doc))]))
    } else {
        json_result(&doc)
    }
}
