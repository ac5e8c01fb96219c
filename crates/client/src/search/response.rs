//! Search endpoint response types and normalization.

use serde::Deserialize;
use std::collections::HashSet;

/// Result kind that identifies a component page.
pub const COMPONENT_KIND: &str = "component";

/// Raw response body: either a bare list or wrapped in `results`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SearchPayload {
    List(Vec<SearchHit>),
    Wrapped { results: Vec<SearchHit> },
}

/// Individual search result record.
///
/// Every field is optional so one sparse record does not fail the whole
/// response; incomplete records are dropped by `component_titles`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct SearchHit {
    #[serde(default, alias = "type")]
    pub kind: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl SearchPayload {
    pub fn into_hits(self) -> Vec<SearchHit> {
        match self {
            SearchPayload::List(hits) | SearchPayload::Wrapped { results: hits } => hits,
        }
    }
}

/// Titles of component results, deduplicated in result order.
pub fn component_titles(hits: Vec<SearchHit>) -> Vec<String> {
    let mut seen = HashSet::new();
    hits.into_iter()
        .filter(|hit| hit.kind.eq_ignore_ascii_case(COMPONENT_KIND))
        .filter_map(|hit| hit.title)
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty() && seen.insert(title.clone()))
        .collect()
}
