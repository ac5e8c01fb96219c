//! mantine-docs server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use mantine_docs_client::{DocumentationService, HeadlessRenderer};
use mantine_docs_core::AppConfig;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;

    tracing::info!(
        version = %config.mantine_version,
        cache_dir = %config.cache_dir.display(),
        storage = ?config.cache.storage,
        "Starting mantine-docs server on stdio transport"
    );

    let mut renderer = HeadlessRenderer::new();
    if let Some(path) = &config.chrome_path {
        renderer = renderer.with_chrome_path(path);
    }

    let service = DocumentationService::new(Arc::new(config), Arc::new(renderer))?;
    let handler = handler::McpDocsServer::new(Arc::new(service));
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    server.waiting().await?;

    Ok(())
}
