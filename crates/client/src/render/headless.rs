//! chromiumoxide-backed renderer.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::error::CdpError;
use chromiumoxide::page::Page;
use futures_util::StreamExt;
use tokio::task::JoinHandle;
use url::Url;

use super::{RenderError, RenderOptions, RenderedPage, Renderer};

/// Interval between polls for the readiness selector.
const READY_POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Headless Chrome/Chromium renderer using chromiumoxide.
///
/// A fresh browser is launched for each `render` call and shut down before
/// the call returns, so no browser process outlives a request.
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    chrome_path: Option<PathBuf>,
}

impl HeadlessRenderer {
    /// Create a renderer that auto-detects the browser executable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the browser executable at `path`.
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }
}

#[async_trait::async_trait]
impl Renderer for HeadlessRenderer {
    async fn render(&self, url: &Url, opts: &RenderOptions) -> Result<RenderedPage, RenderError> {
        let session = RenderSession::launch(self.chrome_path.clone(), opts.viewport).await?;
        let result = session.load(url, opts).await;
        session.close().await;
        result
    }
}

/// One browser process plus the task driving its DevTools event stream.
///
/// `close` shuts the browser down gracefully; if the session is dropped
/// without it (e.g. the caller stopped awaiting), the handler task is aborted
/// and chromiumoxide kills the child process.
struct RenderSession {
    browser: Browser,
    handler: JoinHandle<()>,
}

impl RenderSession {
    async fn launch(chrome_path: Option<PathBuf>, viewport: (u32, u32)) -> Result<Self, RenderError> {
        let mut builder = BrowserConfig::builder().window_size(viewport.0, viewport.1);
        if let Some(path) = chrome_path {
            builder = builder.chrome_executable(path);
        }
        let config = builder.build().map_err(RenderError::BrowserLaunch)?;

        let (browser, mut handler) = Browser::launch(config)
            .await
            .map_err(|e| RenderError::BrowserLaunch(e.to_string()))?;

        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    tracing::debug!("browser handler event error: {e}");
                }
            }
        });

        Ok(Self { browser, handler })
    }

    async fn load(&self, url: &Url, opts: &RenderOptions) -> Result<RenderedPage, RenderError> {
        let start = Instant::now();
        let timeout_ms = u64::try_from(opts.timeout.as_millis()).unwrap_or(u64::MAX);

        let page = tokio::time::timeout(opts.timeout, async {
            let page = self.browser.new_page(url.as_str()).await?;
            page.wait_for_navigation().await?;
            Ok::<Page, CdpError>(page)
        })
        .await
        .map_err(|_| RenderError::Timeout(timeout_ms))?
        .map_err(|e| RenderError::Navigation(e.to_string()))?;

        let ready = match &opts.wait_for {
            Some(selector) => {
                let found = wait_for_selector(&page, selector, opts.ready_timeout).await;
                if !found {
                    tracing::debug!(%url, selector, "ready marker not found, using current content");
                }
                found
            }
            None => true,
        };

        let html = page
            .content()
            .await
            .map_err(|e| RenderError::ContentRetrieval(e.to_string()))?;

        let final_url = page
            .url()
            .await
            .ok()
            .flatten()
            .and_then(|u| Url::parse(&u).ok())
            .unwrap_or_else(|| url.clone());

        let render_time_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        page.close().await.ok();
        tracing::debug!(%url, render_time_ms, ready, bytes = html.len(), "rendered page");
        Ok(RenderedPage { html, final_url, render_time_ms, ready })
    }

    async fn close(mut self) {
        if let Err(e) = self.browser.close().await {
            tracing::debug!("browser close failed: {e}");
        }
        if let Err(e) = self.browser.wait().await {
            tracing::debug!("browser wait failed: {e}");
        }
        self.handler.abort();
    }
}

impl Drop for RenderSession {
    fn drop(&mut self) {
        self.handler.abort();
    }
}

/// Poll for `selector` until it matches or `limit` elapses.
async fn wait_for_selector(page: &Page, selector: &str, limit: Duration) -> bool {
    tokio::time::timeout(limit, async {
        loop {
            if page.find_element(selector).await.is_ok() {
                return;
            }
            tokio::time::sleep(READY_POLL_INTERVAL).await;
        }
    })
    .await
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore = "requires Chrome/Chromium installation"]
    async fn test_render_unresolvable_host_fails() {
        let renderer = HeadlessRenderer::new();
        let url = Url::parse("https://nonexistent.invalid/core/button").unwrap();
        let opts = RenderOptions { timeout: Duration::from_secs(10), ..Default::default() };

        let result = renderer.render(&url, &opts).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    #[ignore = "requires network and Chrome/Chromium"]
    async fn test_render_missing_marker_still_returns_content() {
        let renderer = HeadlessRenderer::new();
        let url = Url::parse("https://example.com").unwrap();
        let opts = RenderOptions {
            wait_for: Some("#never-present".into()),
            ready_timeout: Duration::from_millis(500),
            ..Default::default()
        };

        let page = renderer.render(&url, &opts).await.unwrap();
        assert!(!page.ready);
        assert!(page.html.contains("<html"));
    }
}
