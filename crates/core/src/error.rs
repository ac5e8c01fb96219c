//! Unified error types for mantine-docs.
//!
//! Only documentation retrieval surfaces errors to callers; cache, listing and
//! search failures are recovered where they happen.

use rmcp::model::{ErrorCode, ErrorData as McpError};

/// Unified error types for the mantine-docs server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty component name).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid URL built from configuration or component name.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// The component page could not be rendered.
    #[error("FETCH_FAILED: {component}: {cause}")]
    FetchFailed { component: String, cause: String },
}

impl Error {
    /// Build a fetch failure for `component` from any displayable cause.
    pub fn fetch_failed(component: impl Into<String>, cause: impl std::fmt::Display) -> Self {
        Error::FetchFailed { component: component.into(), cause: cause.to_string() }
    }
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let code = match &err {
            Error::InvalidInput(_) => -32602,
            Error::InvalidUrl(_) => -32003,
            Error::FetchFailed { .. } => -32006,
        };

        McpError { code: ErrorCode(code), message: err.to_string().into(), data: None }
    }
}
