//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the documentation service.
use std::sync::Arc;

use crate::tools::{
    ClearCacheParams, ComponentDocsParams, SearchComponentsParams, cache::clear_impl,
    component_docs::component_docs_impl, list::list_impl, search::search_impl,
};

use mantine_docs_client::DocumentationService;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};

/// The main MCP server handler for mantine-docs.
#[derive(Clone)]
pub struct McpDocsServer {
    service: Arc<DocumentationService>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl McpDocsServer {
    /// Create a new server handler backed by `service`.
    pub fn new(service: Arc<DocumentationService>) -> Self {
        Self { service, tool_router: Self::tool_router() }
    }

    /// Fetch documentation for a single component.
    #[tool(
        description = "Get Mantine component documentation: description, props, examples, import statement and related components. Format is json (default) or markdown."
    )]
    async fn get_component_docs(&self, params: Parameters<ComponentDocsParams>) -> Result<CallToolResult, McpError> {
        component_docs_impl(&self.service, params.0).await
    }

    /// Search the documentation site for components.
    #[tool(description = "Search Mantine components by keyword. Returns matching component names.")]
    async fn search_components(&self, params: Parameters<SearchComponentsParams>) -> Result<CallToolResult, McpError> {
        search_impl(&self.service, params.0).await
    }

    /// List every documented component.
    #[tool(description = "List all Mantine components.")]
    async fn list_components(&self) -> Result<CallToolResult, McpError> {
        list_impl(&self.service).await
    }

    /// Clear cached documentation.
    #[tool(description = "Clear cached documentation for one component, or for all components when name is omitted.")]
    async fn clear_cache(&self, params: Parameters<ClearCacheParams>) -> Result<CallToolResult, McpError> {
        clear_impl(&self.service, params.0).await
    }
}

impl ServerHandler for McpDocsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "mantine-docs".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "Use list_components or search_components to find a component, then get_component_docs for its API."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
