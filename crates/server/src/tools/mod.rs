//! MCP tool implementations.
//!
//! This module contains all tools exposed by the mantine-docs server.

pub mod cache;
pub mod component_docs;
pub mod list;
pub mod search;

pub use cache::ClearCacheParams;
pub use component_docs::ComponentDocsParams;
pub use search::SearchComponentsParams;

use mantine_docs_core::Error;
use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content},
};
use serde::Serialize;

/// Wrap a serializable tool output as pretty JSON text content.
pub(crate) fn json_result<T: Serialize>(output: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(output).map_err(|e| {
        tracing::warn!(error = %e, "failed to serialize tool output");
        Error::InvalidInput(format!("Failed to serialize output: {e}"))
    })?;

    Ok(CallToolResult::success(vec![Content::text(json)]))
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("cyclic value"))
        }
    }

    #[test]
    fn test_json_result_serializes_output() {
        let result = json_result(&serde_json::json!({"count": 2})).unwrap();
        assert_eq!(testing::text(&result), "{\n  \"count\": 2\n}");
    }

    #[test]
    fn test_json_result_reports_serialization_failure() {
        let err = json_result(&Unserializable).unwrap_err();
        assert_eq!(err.code.0, -32602);
        assert!(err.message.contains("cyclic value"));
    }
}
