//! Component page link harvesting.

use scraper::Html;
use std::collections::HashSet;
use url::Url;

use super::selectors::{ANCHOR, COMPONENT_PATH};
use crate::component::canonical_name;

/// Extract the slugs of component pages linked from an HTML document.
///
/// Relative hrefs are resolved against `base_url`; only links on the same
/// host whose path is `/core/<slug>` count. Slugs are deduplicated, keeping
/// first-seen order.
pub fn component_links(document: &Html, base_url: &Url) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut slugs = Vec::new();

    for element in document.select(&ANCHOR) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let Ok(resolved) = base_url.join(href) else {
            continue;
        };

        if resolved.host_str() != base_url.host_str() {
            continue;
        }

        let Some(captures) = COMPONENT_PATH.captures(resolved.path()) else {
            continue;
        };

        let slug = captures[1].to_string();
        if seen.insert(slug.clone()) {
            slugs.push(slug);
        }
    }

    slugs
}

/// Canonical names of sibling components linked from a component page.
///
/// The page's own component is excluded, as are duplicates.
pub fn related_components(document: &Html, page_url: &Url, own_name: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    component_links(document, page_url)
        .into_iter()
        .map(|slug| canonical_name(&slug))
        .filter(|name| name != own_name && seen.insert(name.clone()))
        .collect()
}
