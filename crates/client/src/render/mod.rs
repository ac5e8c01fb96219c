//! Headless browser rendering for JS-heavy documentation pages.
//!
//! This module provides a renderer trait and a feature-gated implementation
//! using chromiumoxide for headless Chrome/Chromium browser control. Each
//! render call owns its own browser session, which is closed on every exit
//! path.

use std::time::Duration;

use mantine_docs_core::AppConfig;
use thiserror::Error;
use url::Url;

/// Errors that can occur during page rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Failed to launch or connect to browser.
    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),

    /// Failed to navigate to URL.
    #[error("navigation failed: {0}")]
    Navigation(String),

    /// Failed to get page content.
    #[error("content retrieval failed: {0}")]
    ContentRetrieval(String),

    /// Navigation did not complete in time.
    #[error("navigation timeout after {0}ms")]
    Timeout(u64),
}

/// Options for rendering a page.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Bound on navigation (default: 30s). Exceeding it fails the render.
    pub timeout: Duration,

    /// Optional CSS selector to wait for before reading content.
    pub wait_for: Option<String>,

    /// Bound on the `wait_for` poll (default: 10s). Exceeding it does not
    /// fail the render; the content present at that point is returned.
    pub ready_timeout: Duration,

    /// Viewport dimensions (default: 1280x720).
    pub viewport: (u32, u32),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(30_000),
            wait_for: None,
            ready_timeout: Duration::from_millis(10_000),
            viewport: (1280, 720),
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            timeout: config.timeout(),
            wait_for: config.ready_selector.clone(),
            ready_timeout: config.ready_timeout(),
            ..Default::default()
        }
    }
}

/// Result of rendering a page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    /// Rendered HTML content.
    pub html: String,

    /// Final URL after redirects.
    pub final_url: Url,

    /// Time taken to render in milliseconds.
    pub render_time_ms: u64,

    /// Whether the `wait_for` marker appeared (true when none was requested).
    pub ready: bool,
}

/// Renderer trait for headless browser page rendering.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    /// Render a URL to HTML via headless browser.
    async fn render(&self, url: &Url, opts: &RenderOptions) -> Result<RenderedPage, RenderError>;
}

#[cfg(feature = "render")]
mod headless;

#[cfg(feature = "render")]
pub use headless::HeadlessRenderer;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_default() {
        let opts = RenderOptions::default();
        assert_eq!(opts.timeout, Duration::from_millis(30_000));
        assert_eq!(opts.ready_timeout, Duration::from_millis(10_000));
        assert!(opts.wait_for.is_none());
        assert_eq!(opts.viewport, (1280, 720));
    }

    #[test]
    fn test_render_options_from_config() {
        let config = AppConfig { timeout_ms: 5_000, ready_timeout_ms: 1_000, ..Default::default() };
        let opts = RenderOptions::from_config(&config);
        assert_eq!(opts.timeout, Duration::from_millis(5_000));
        assert_eq!(opts.ready_timeout, Duration::from_millis(1_000));
        assert_eq!(opts.wait_for.as_deref(), Some("table"));
    }

    #[test]
    fn test_render_error_display() {
        assert!(RenderError::Timeout(30_000).to_string().contains("30000ms"));
        assert!(RenderError::Navigation("boom".into()).to_string().contains("boom"));
    }
}
