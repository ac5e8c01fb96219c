//! Normalized component documentation records.
//!
//! These are the values stored in the cache and returned to the tool layer.
//! Field names serialize in camelCase so persisted entries keep a stable,
//! self-describing shape.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Documentation for a single UI component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentDoc {
    /// Canonical-cased component name (e.g. `Button`).
    pub name: String,
    /// Plain-text summary from the page header.
    pub description: String,
    /// Property table rows, in page order.
    pub props: Vec<PropEntry>,
    /// Code examples, in page order.
    pub examples: Vec<ExampleEntry>,
    pub import_statement: String,
    pub package_name: String,
    /// Documentation source version this record was produced against.
    pub version: String,
    /// Source page address.
    pub url: String,
    /// Linked sibling components; never contains `name`, no duplicates.
    pub related_components: Vec<String>,
    pub last_fetched_at: DateTime<Utc>,
}

/// One row of a component's property table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropEntry {
    pub name: String,
    /// Free-text type signature.
    #[serde(rename = "type")]
    pub prop_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    pub description: String,
    pub required: bool,
}

/// A code example found on a component page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleEntry {
    /// Nearest preceding heading, or `Example N` (1-based).
    pub title: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ComponentDoc {
    /// Find a prop by name.
    pub fn prop(&self, name: &str) -> Option<&PropEntry> {
        self.props.iter().find(|p| p.name == name)
    }

    /// Names of the props marked as required.
    pub fn required_props(&self) -> impl Iterator<Item = &str> {
        self.props.iter().filter(|p| p.required).map(|p| p.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ComponentDoc {
        ComponentDoc {
            name: "Button".into(),
            description: "Render button or link with button styles".into(),
            props: vec![
                PropEntry {
                    name: "onClick".into(),
                    prop_type: "() => void".into(),
                    default_value: None,
                    description: "Click handler".into(),
                    required: false,
                },
                PropEntry {
                    name: "label".into(),
                    prop_type: "string".into(),
                    default_value: Some("'Submit'".into()),
                    description: "Button label".into(),
                    required: true,
                },
            ],
            examples: vec![ExampleEntry { title: "Usage".into(), code: "<Button />".into(), description: None }],
            import_statement: "import { Button } from '@mantine/core';".into(),
            package_name: "@mantine/core".into(),
            version: "7.17.0".into(),
            url: "https://mantine.dev/core/button".into(),
            related_components: vec!["ActionIcon".into()],
            last_fetched_at: Utc::now(),
        }
    }

    #[test]
    fn test_serializes_camel_case_fields() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("importStatement").is_some());
        assert!(json.get("packageName").is_some());
        assert!(json.get("relatedComponents").is_some());
        assert!(json.get("lastFetchedAt").is_some());
        assert_eq!(json["props"][0]["type"], "() => void");
        assert!(json["props"][0].get("defaultValue").is_none());
        assert_eq!(json["props"][1]["defaultValue"], "'Submit'");
    }

    #[test]
    fn test_prop_lookup() {
        let doc = sample();
        assert_eq!(doc.prop("onClick").unwrap().prop_type, "() => void");
        assert!(doc.prop("missing").is_none());
        assert_eq!(doc.required_props().collect::<Vec<_>>(), vec!["label"]);
    }
}
