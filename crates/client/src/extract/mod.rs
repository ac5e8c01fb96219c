//! Component documentation extraction from rendered HTML.
//!
//! Provides a stable extraction abstraction that can be swapped later.
//!
//! ### Heuristics
//! - Description: first paragraph after the page's `h1`.
//! - Props: rows of the properties table with at least four cells.
//! - Examples: every `<pre>` block, titled by the nearest section heading.
//! - Import: first `@mantine/*` import in the first example, else synthesized.
//! - Related components: same-site links to other `/core/<slug>` pages.
//!
//! Missing pieces yield empty values, never errors.

pub mod examples;
pub mod links;
pub mod normalize;
pub mod props;
mod selectors;

pub use examples::extract_examples;
pub use links::{component_links, related_components};
pub use normalize::format_markdown;
pub use props::extract_props;

use chrono::Utc;
use mantine_docs_core::{ComponentDoc, ExampleEntry};
use scraper::{ElementRef, Html};

use crate::component::ComponentPage;
use selectors::{PACKAGE_IMPORT, PACKAGE_REFERENCE, TITLE_OR_PARAGRAPH};

/// Package components are imported from when a page names no other.
pub const CORE_PACKAGE: &str = "@mantine/core";

/// Stable extractor trait for component documentation.
///
/// This allows swapping the extraction heuristics without changing the
/// cache or orchestration code.
pub trait Extractor: Send + Sync {
    /// Build a documentation record from a rendered component page.
    fn extract(&self, html: &str, page: &ComponentPage, version: &str) -> ComponentDoc;
}

/// Heuristic extractor for mantine.dev component pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct MantineExtractor;

impl MantineExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for MantineExtractor {
    fn extract(&self, html: &str, page: &ComponentPage, version: &str) -> ComponentDoc {
        let document = Html::parse_document(html);

        let examples = extract_examples(&document);
        let import_statement = import_statement(&examples, &page.name);
        let package_name = package_name(&import_statement);

        ComponentDoc {
            name: page.name.clone(),
            description: description(&document),
            props: extract_props(&document),
            examples,
            package_name,
            import_statement,
            version: version.to_string(),
            url: page.url.to_string(),
            related_components: related_components(&document, &page.url, &page.name),
            last_fetched_at: Utc::now(),
        }
    }
}

/// Trimmed text of the first paragraph after the first `h1`.
fn description(document: &Html) -> String {
    document
        .select(&TITLE_OR_PARAGRAPH)
        .skip_while(|el| el.value().name() != "h1")
        .find(|el| el.value().name() == "p")
        .map(text_of)
        .unwrap_or_default()
}

fn import_statement(examples: &[ExampleEntry], component: &str) -> String {
    examples
        .first()
        .and_then(|example| PACKAGE_IMPORT.find(&example.code))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| format!("import {{ {component} }} from '{CORE_PACKAGE}';"))
}

fn package_name(import_statement: &str) -> String {
    PACKAGE_REFERENCE
        .captures(import_statement)
        .map(|c| c[1].to_string())
        .unwrap_or_else(|| CORE_PACKAGE.to_string())
}

/// Element text with whitespace runs collapsed to single spaces.
pub(crate) fn text_of(element: ElementRef<'_>) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}
