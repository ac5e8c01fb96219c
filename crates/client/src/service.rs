//! Documentation service: cache-first retrieval, search and listing.

use std::sync::Arc;

use mantine_docs_core::cache::compute_cache_key;
use mantine_docs_core::{AppConfig, CacheStore, ComponentDoc, ConfigProvider, Error};
use url::Url;

use crate::Outcome;
use crate::catalog::{catalog_render_options, fallback_components, list_components};
use crate::component::ComponentPage;
use crate::extract::{Extractor, MantineExtractor};
use crate::render::{RenderOptions, Renderer};
use crate::search::{SearchClient, SearchConfig, SearchError};

/// Serves component documentation through the two-tier cache.
///
/// Configuration is read from the provider at the start of every call, so
/// version and cache settings take effect without rebuilding the service.
/// The cache directory and search client are fixed at construction.
pub struct DocumentationService {
    config: Arc<dyn ConfigProvider>,
    renderer: Arc<dyn Renderer>,
    extractor: Arc<dyn Extractor>,
    search: SearchClient,
    cache: CacheStore<ComponentDoc>,
}

impl DocumentationService {
    /// Build a service using the heuristic extractor.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the HTTP client cannot be constructed.
    pub fn new(config: Arc<dyn ConfigProvider>, renderer: Arc<dyn Renderer>) -> Result<Self, SearchError> {
        let snapshot = config.current();
        let search = SearchClient::new(SearchConfig { timeout: snapshot.timeout(), user_agent: snapshot.user_agent })?;
        let cache = CacheStore::new(snapshot.cache_dir);

        Ok(Self { config, renderer, extractor: Arc::new(MantineExtractor::new()), search, cache })
    }

    /// Replace the extractor.
    pub fn with_extractor(mut self, extractor: Arc<dyn Extractor>) -> Self {
        self.extractor = extractor;
        self
    }

    /// Fetch documentation for `name`, from cache when possible.
    ///
    /// With `force_refresh` or caching disabled the page is always rendered.
    /// A fresh result replaces any cached entry for the same key.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` for an unusable name, `Error::InvalidUrl` for a
    /// bad base URL and `Error::FetchFailed` when the page cannot be
    /// rendered. Failures are never cached and stale data is never returned.
    pub async fn get_documentation(&self, name: &str, force_refresh: bool) -> Result<ComponentDoc, Error> {
        let config = self.config.current();
        let page = ComponentPage::new(&config.base_url, name)?;
        let key = compute_cache_key(&page.slug, &config.mantine_version);

        if !force_refresh
            && config.caching_enabled()
            && let Some(doc) = self.cache.get(&key, &config.cache, &config.mantine_version).await
        {
            tracing::debug!(key, component = %page.name, "serving cached documentation");
            return Ok(doc);
        }

        let doc = self.fetch(&page, &config).await?;

        if config.caching_enabled() {
            self.cache.set(&key, doc.clone(), &config.cache, &config.mantine_version).await;
        }

        Ok(doc)
    }

    async fn fetch(&self, page: &ComponentPage, config: &AppConfig) -> Result<ComponentDoc, Error> {
        tracing::info!(component = %page.name, url = %page.url, "fetching component documentation");

        let rendered = self
            .renderer
            .render(&page.url, &RenderOptions::from_config(config))
            .await
            .map_err(|e| {
                tracing::warn!(component = %page.name, url = %page.url, error = %e, "component page render failed");
                Error::fetch_failed(&page.name, e)
            })?;

        if !rendered.ready {
            tracing::debug!(component = %page.name, "extracting from page that never signalled ready");
        }

        Ok(self.extractor.extract(&rendered.html, page, &config.mantine_version))
    }

    /// Names of components matching `query`; empty on any failure.
    pub async fn search_components(&self, query: &str) -> Vec<String> {
        self.search_outcome(query).await.into_inner()
    }

    /// Like `search_components`, keeping whether the fallback path ran.
    pub async fn search_outcome(&self, query: &str) -> Outcome<Vec<String>> {
        let config = self.config.current();
        self.search.search(&config.search_url, query).await
    }

    /// Every component in the catalog; the built-in list on any failure.
    pub async fn list_all_components(&self) -> Vec<String> {
        self.list_outcome().await.into_inner()
    }

    /// Like `list_all_components`, keeping whether the fallback path ran.
    pub async fn list_outcome(&self) -> Outcome<Vec<String>> {
        let config = self.config.current();

        let catalog_url = match Url::parse(&config.base_url).and_then(|base| base.join(&config.catalog_path)) {
            Ok(url) => url,
            Err(e) => {
                tracing::warn!(base_url = %config.base_url, error = %e, "invalid catalog URL, using fallback list");
                return Outcome::Fallback(fallback_components());
            }
        };

        list_components(self.renderer.as_ref(), &catalog_url, &catalog_render_options(&config)).await
    }

    /// Drop cached documentation for one component (current version) or all.
    ///
    /// # Errors
    ///
    /// `Error::InvalidInput` if `name` is not a usable component name.
    pub async fn clear_cache(&self, name: Option<&str>) -> Result<(), Error> {
        let config = self.config.current();

        match name {
            Some(name) => {
                let page = ComponentPage::new(&config.base_url, name)?;
                let key = compute_cache_key(&page.slug, &config.mantine_version);
                self.cache.clear(&key, &config.cache).await;
                tracing::info!(key, "cleared cached component");
            }
            None => {
                self.cache.clear_all(&config.cache).await;
                tracing::info!("cleared component cache");
            }
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn cache(&self) -> &CacheStore<ComponentDoc> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CATALOG_READY_SELECTOR;
    use crate::render::fake::FakeRenderer;
    use mantine_docs_core::CacheConfig;
    use std::sync::RwLock;
    use tempfile::TempDir;

    const BUTTON_URL: &str = "https://mantine.dev/core/button";
    const CATALOG_URL: &str = "https://mantine.dev/getting-started";

    const BUTTON_PAGE: &str = r#"
        <html><body>
            <h1>Button</h1>
            <p>Render button or link with button styles</p>
            <h2>Usage</h2>
            <pre><code>import { Button } from '@mantine/core';

function Demo() {
  return &lt;Button variant="filled"&gt;Button&lt;/Button&gt;;
}</code></pre>
            <table>
                <tr><th>Name</th><th>Type</th><th>Default</th><th>Description</th></tr>
                <tr><td>variant</td><td>'filled' | 'light'</td><td>'filled'</td><td>Controls appearance</td></tr>
                <tr><td>children *</td><td>React.ReactNode</td><td>-</td><td>Button content</td></tr>
            </table>
            <a href="/core/action-icon">ActionIcon</a>
        </body></html>
    "#;

    fn config(dir: &TempDir, ttl_ms: u64) -> AppConfig {
        AppConfig {
            cache: CacheConfig::with_files(ttl_ms),
            cache_dir: dir.path().to_path_buf(),
            search_url: "http://127.0.0.1:9/search".into(),
            ..Default::default()
        }
    }

    fn service(config: AppConfig, renderer: Arc<FakeRenderer>) -> DocumentationService {
        DocumentationService::new(Arc::new(config), renderer).unwrap()
    }

    fn button_renderer() -> Arc<FakeRenderer> {
        Arc::new(FakeRenderer::default().with_page(BUTTON_URL, BUTTON_PAGE))
    }

    #[tokio::test]
    async fn test_get_documentation_button() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 86_400_000), renderer.clone());

        let doc = service.get_documentation("button", false).await.unwrap();

        assert_eq!(doc.name, "Button");
        assert_eq!(doc.description, "Render button or link with button styles");
        assert_eq!(doc.import_statement, "import { Button } from '@mantine/core';");
        assert_eq!(doc.package_name, "@mantine/core");
        assert_eq!(doc.version, "7.17.0");
        assert_eq!(doc.url, BUTTON_URL);
        assert_eq!(doc.props.len(), 2);
        assert!(doc.prop("children").is_some_and(|p| p.required));
        assert_eq!(doc.examples[0].title, "Usage");
        assert_eq!(doc.related_components, vec!["ActionIcon"]);
        assert_eq!(renderer.calls(), 1);
    }

    #[tokio::test]
    async fn test_second_call_served_from_cache() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 86_400_000), renderer.clone());

        let first = service.get_documentation("button", false).await.unwrap();
        let second = service.get_documentation("Button", false).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(renderer.calls(), 1);
    }

    #[tokio::test]
    async fn test_cache_survives_restart() {
        let dir = TempDir::new().unwrap();

        let first = service(config(&dir, 86_400_000), button_renderer());
        let doc = first.get_documentation("button", false).await.unwrap();
        drop(first);

        let renderer = Arc::new(FakeRenderer::default());
        let restarted = service(config(&dir, 86_400_000), renderer.clone());
        let cached = restarted.get_documentation("button", false).await.unwrap();

        assert_eq!(cached, doc);
        assert_eq!(renderer.calls(), 0);
    }

    #[tokio::test]
    async fn test_force_refresh_bypasses_cache() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 86_400_000), renderer.clone());

        let first = service.get_documentation("button", false).await.unwrap();
        let refreshed = service.get_documentation("button", true).await.unwrap();
        let cached = service.get_documentation("button", false).await.unwrap();

        assert_eq!(renderer.calls(), 2);
        assert!(refreshed.last_fetched_at >= first.last_fetched_at);
        assert_eq!(cached.last_fetched_at, refreshed.last_fetched_at);
    }

    #[tokio::test]
    async fn test_zero_ttl_always_fetches_and_never_writes() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 0), renderer.clone());

        service.get_documentation("button", false).await.unwrap();
        service.get_documentation("button", false).await.unwrap();

        assert_eq!(renderer.calls(), 2);
        assert_eq!(service.cache().memory_len().await, 0);
        assert_eq!(std::fs::read_dir(dir.path()).map(|d| d.count()).unwrap_or(0), 0);
    }

    #[tokio::test]
    async fn test_version_change_invalidates_cache() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let provider = Arc::new(RwLock::new(config(&dir, 86_400_000)));
        let service = DocumentationService::new(provider.clone(), renderer.clone()).unwrap();

        service.get_documentation("button", false).await.unwrap();
        provider.write().unwrap().mantine_version = "8.0.0".into();
        let doc = service.get_documentation("button", false).await.unwrap();

        assert_eq!(doc.version, "8.0.0");
        assert_eq!(renderer.calls(), 2);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported_and_not_cached() {
        let dir = TempDir::new().unwrap();
        let renderer = Arc::new(FakeRenderer::default());
        let service = service(config(&dir, 86_400_000), renderer.clone());

        let err = service.get_documentation("button", false).await.unwrap_err();
        assert!(matches!(&err, Error::FetchFailed { component, .. } if component == "Button"));
        assert!(err.to_string().contains("ERR_NAME_NOT_RESOLVED"));

        assert!(service.get_documentation("button", false).await.is_err());
        assert_eq!(renderer.calls(), 2);
        assert_eq!(service.cache().memory_len().await, 0);
    }

    #[tokio::test]
    async fn test_invalid_name_is_rejected_before_rendering() {
        let dir = TempDir::new().unwrap();
        let renderer = Arc::new(FakeRenderer::default());
        let service = service(config(&dir, 86_400_000), renderer.clone());

        let err = service.get_documentation("  ", false).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err = service.get_documentation("../etc/passwd", false).await.unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(renderer.calls(), 0);
    }

    #[tokio::test]
    async fn test_clear_cache_single_and_all() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 86_400_000), renderer.clone());

        service.get_documentation("button", false).await.unwrap();
        service.clear_cache(Some("Button")).await.unwrap();
        service.get_documentation("button", false).await.unwrap();
        assert_eq!(renderer.calls(), 2);

        service.clear_cache(None).await.unwrap();
        assert_eq!(service.cache().memory_len().await, 0);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_clear_cache_rejects_invalid_name() {
        let dir = TempDir::new().unwrap();
        let service = service(config(&dir, 86_400_000), Arc::new(FakeRenderer::default()));
        assert!(matches!(service.clear_cache(Some("")).await, Err(Error::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_list_all_components_falls_back_on_navigation_failure() {
        let dir = TempDir::new().unwrap();
        let service = service(config(&dir, 86_400_000), Arc::new(FakeRenderer::default()));

        let outcome = service.list_outcome().await;
        assert!(outcome.is_fallback());
        assert!(!service.list_all_components().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_all_components_live() {
        let dir = TempDir::new().unwrap();
        let renderer = Arc::new(FakeRenderer::default().with_page(
            CATALOG_URL,
            r#"<nav><a href="/core/button">Button</a><a href="/core/text-input">TextInput</a></nav>"#,
        ));
        let service = service(config(&dir, 86_400_000), renderer.clone());

        assert_eq!(
            service.list_outcome().await,
            Outcome::Live(vec!["Button".to_string(), "TextInput".to_string()])
        );
        assert_eq!(renderer.waited_for(), vec![Some(CATALOG_READY_SELECTOR.to_string())]);
    }

    #[tokio::test]
    async fn test_component_render_waits_for_configured_marker() {
        let dir = TempDir::new().unwrap();
        let renderer = button_renderer();
        let service = service(config(&dir, 86_400_000), renderer.clone());

        service.get_documentation("button", false).await.unwrap();
        assert_eq!(renderer.waited_for(), vec![Some("table".to_string())]);
    }

    #[tokio::test]
    async fn test_search_failure_returns_empty() {
        let dir = TempDir::new().unwrap();
        let service = service(config(&dir, 86_400_000), Arc::new(FakeRenderer::default()));

        assert!(service.search_outcome("button").await.is_fallback());
        assert!(service.search_components("button").await.is_empty());
    }
}
