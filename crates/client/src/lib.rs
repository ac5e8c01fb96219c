//! Client code for mantine-docs.
//!
//! This crate provides page rendering, component documentation extraction,
//! remote search, catalog listing and the cache-backed documentation service
//! used by the MCP server.

pub mod catalog;
pub mod component;
pub mod extract;
pub mod outcome;
pub mod render;
pub mod search;
pub mod service;

pub use catalog::{FALLBACK_COMPONENTS, list_components};
pub use component::{ComponentPage, canonical_name};
pub use extract::{Extractor, MantineExtractor, format_markdown};
pub use outcome::Outcome;
pub use render::{RenderError, RenderOptions, RenderedPage, Renderer};
pub use search::{SearchClient, SearchConfig, SearchError};
pub use service::DocumentationService;

#[cfg(feature = "render")]
pub use render::HeadlessRenderer;
