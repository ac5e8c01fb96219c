//! Component catalog enumeration.
//!
//! Renders the catalog page and collects every `/core/<slug>` link from its
//! navigation. When the page cannot be rendered or yields no links, a fixed
//! catalog of common components is returned instead.

use mantine_docs_core::AppConfig;
use scraper::Html;
use url::Url;

use crate::Outcome;
use crate::component::canonical_name;
use crate::extract::component_links;
use crate::render::{RenderOptions, Renderer};

/// Common components returned when the live catalog is unavailable.
pub const FALLBACK_COMPONENTS: &[&str] = &[
    "Accordion",
    "ActionIcon",
    "Alert",
    "Anchor",
    "AppShell",
    "Autocomplete",
    "Avatar",
    "Badge",
    "Box",
    "Breadcrumbs",
    "Button",
    "Card",
    "Center",
    "Checkbox",
    "Chip",
    "CloseButton",
    "Code",
    "ColorInput",
    "Container",
    "Divider",
    "Drawer",
    "FileInput",
    "Flex",
    "Grid",
    "Group",
    "Image",
    "Indicator",
    "Input",
    "Loader",
    "Menu",
    "Modal",
    "MultiSelect",
    "NavLink",
    "NumberInput",
    "Pagination",
    "Paper",
    "PasswordInput",
    "Popover",
    "Progress",
    "Radio",
    "SegmentedControl",
    "Select",
    "SimpleGrid",
    "Skeleton",
    "Slider",
    "Stack",
    "Stepper",
    "Switch",
    "Table",
    "Tabs",
    "Text",
    "TextInput",
    "Textarea",
    "Title",
    "Tooltip",
];

/// Ready marker for the catalog page: its component navigation links.
pub const CATALOG_READY_SELECTOR: &str = "a[href^='/core/']";

/// Render options for the catalog page.
///
/// Navigation bounds come from `config`; the ready marker is the catalog's own,
/// since component pages' `ready_selector` need not appear in navigation.
pub fn catalog_render_options(config: &AppConfig) -> RenderOptions {
    RenderOptions { wait_for: Some(CATALOG_READY_SELECTOR.to_string()), ..RenderOptions::from_config(config) }
}

/// The fallback catalog as owned names.
pub fn fallback_components() -> Vec<String> {
    FALLBACK_COMPONENTS.iter().map(|name| (*name).to_string()).collect()
}

/// Enumerate components linked from the catalog page at `catalog_url`.
///
/// Never fails: navigation errors and empty navigation both produce
/// `Outcome::Fallback` with the built-in catalog.
pub async fn list_components(renderer: &dyn Renderer, catalog_url: &Url, opts: &RenderOptions) -> Outcome<Vec<String>> {
    let page = match renderer.render(catalog_url, opts).await {
        Ok(page) => page,
        Err(e) => {
            tracing::warn!(url = %catalog_url, error = %e, "component catalog unavailable, using fallback list");
            return Outcome::Fallback(fallback_components());
        }
    };

    let document = Html::parse_document(&page.html);
    let names: Vec<String> =
        component_links(&document, &page.final_url).iter().map(String::as_str).map(canonical_name).collect();

    if names.is_empty() {
        tracing::warn!(url = %catalog_url, "component catalog had no component links, using fallback list");
        return Outcome::Fallback(fallback_components());
    }

    tracing::debug!(url = %catalog_url, count = names.len(), "listed components");
    Outcome::Live(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::fake::FakeRenderer;

    const CATALOG_URL: &str = "https://mantine.dev/getting-started";

    const CATALOG_PAGE: &str = r#"
        <html><body>
            <nav>
                <a href="/getting-started">Getting started</a>
                <a href="/core/accordion">Accordion</a>
                <a href="/core/action-icon">ActionIcon</a>
                <a href="/hooks/use-disclosure">use-disclosure</a>
                <a href="/core/accordion">Accordion</a>
                <a href="https://github.com/mantinedev/mantine">GitHub</a>
            </nav>
        </body></html>
    "#;

    fn catalog_url() -> Url {
        Url::parse(CATALOG_URL).unwrap()
    }

    #[tokio::test]
    async fn test_list_components_from_navigation() {
        let renderer = FakeRenderer::default().with_page(CATALOG_URL, CATALOG_PAGE);
        let outcome = list_components(&renderer, &catalog_url(), &RenderOptions::default()).await;

        assert_eq!(outcome, Outcome::Live(vec!["Accordion".to_string(), "ActionIcon".to_string()]));
    }

    #[tokio::test]
    async fn test_list_components_navigation_failure_falls_back() {
        let renderer = FakeRenderer::default();
        let outcome = list_components(&renderer, &catalog_url(), &RenderOptions::default()).await;

        assert!(outcome.is_fallback());
        let names = outcome.into_inner();
        assert!(!names.is_empty());
        assert!(names.contains(&"Button".to_string()));
    }

    #[tokio::test]
    async fn test_list_components_empty_navigation_falls_back() {
        let renderer = FakeRenderer::default().with_page(CATALOG_URL, "<html><body><p>Loading</p></body></html>");
        let outcome = list_components(&renderer, &catalog_url(), &RenderOptions::default()).await;

        assert_eq!(outcome, Outcome::Fallback(fallback_components()));
    }

    #[test]
    fn test_catalog_render_options_use_navigation_marker() {
        let config = AppConfig { timeout_ms: 5_000, ready_timeout_ms: 2_000, ..Default::default() };
        let opts = catalog_render_options(&config);

        assert_eq!(opts.wait_for.as_deref(), Some(CATALOG_READY_SELECTOR));
        assert_ne!(opts.wait_for, config.ready_selector);
        assert_eq!(opts.timeout, config.timeout());
        assert_eq!(opts.ready_timeout, config.ready_timeout());
    }

    #[test]
    fn test_catalog_ready_selector_parses() {
        assert!(scraper::Selector::parse(CATALOG_READY_SELECTOR).is_ok());
    }

    #[test]
    fn test_fallback_catalog_is_canonical() {
        for name in FALLBACK_COMPONENTS {
            assert_eq!(canonical_name(name), *name);
        }
    }
}
