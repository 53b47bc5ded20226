use std::time::Duration;

use async_trait::async_trait;
use chromiumoxide::page::Page as CrPage;

use crate::dom::DomSource;
use crate::element::Element;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Page with the handful of calls a scrape needs.
pub struct Page {
    inner: CrPage,
    default_timeout: Duration,
}

impl Page {
    pub(crate) fn new(inner: CrPage, default_timeout: Duration) -> Self {
        Self { inner, default_timeout }
    }

    // ── Navigation ──────────────────────────────────────────────────

    /// Navigate to the given URL and wait for the page to load, giving up
    /// after the configured default timeout.
    pub async fn goto(&self, url: &str) -> Result<()> {
        match tokio::time::timeout(self.default_timeout, self.inner.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => Err(Error::NavigationError(format!("{url}: {e}"))),
            Err(_) => Err(Error::Timeout(format!(
                "navigation to {url} after {:?}",
                self.default_timeout
            ))),
        }
    }

    /// Get the current page title. A page that cannot answer is treated as a
    /// lost session, not a script problem.
    pub async fn title(&self) -> Result<String> {
        let result = self
            .inner
            .evaluate("document.title")
            .await
            .map_err(|e| Error::NavigationError(format!("document.title: {e}")))?;
        match result.into_value::<String>() {
            Ok(title) => Ok(title),
            Err(_) => Ok(String::new()),
        }
    }

    // ── Element Queries ─────────────────────────────────────────────

    /// Find all elements matching the given CSS selector, in document order.
    pub async fn find_elements(&self, selector: &str) -> Result<Vec<Element>> {
        let els = self
            .inner
            .find_elements(selector)
            .await
            .map_err(|e| Error::QueryError(format!("{selector}: {e}")))?;
        Ok(els.into_iter().map(Element::new).collect())
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Close this tab.
    pub async fn close(self) -> Result<()> {
        self.inner.close().await?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl DomSource for Page {
    type Node = Element;

    async fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        self.find_elements(selector).await
    }
}
