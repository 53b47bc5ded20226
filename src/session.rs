use async_trait::async_trait;
use tracing::warn;

use crate::browser::NewsBrowser;
use crate::config::BrowserConfig;
use crate::dom::DomSource;
use crate::element::Element;
use crate::error::Result;
use crate::page::Page;

/// A browser session: one tab that can be navigated, inspected and queried.
#[async_trait(?Send)]
pub trait Session: DomSource {
    async fn navigate(&self, url: &str) -> Result<()>;

    async fn title(&self) -> Result<String>;

    /// Release the session. Consumes the handle so it can only happen once.
    async fn close(self) -> Result<()>;
}

/// Creates sessions.
#[async_trait(?Send)]
pub trait SessionProvider {
    type Session: Session;

    async fn open(&self) -> Result<Self::Session>;
}

/// Launches a fresh Chrome per session.
pub struct ChromeProvider {
    config: BrowserConfig,
}

impl ChromeProvider {
    pub fn new(config: BrowserConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl SessionProvider for ChromeProvider {
    type Session = ChromeSession;

    async fn open(&self) -> Result<ChromeSession> {
        let browser = NewsBrowser::launch(self.config.clone()).await?;

        match browser.new_page().await {
            Ok(page) => Ok(ChromeSession { browser, page }),
            Err(e) => {
                // The browser is already running; do not leave it behind.
                if let Err(close_err) = browser.close().await {
                    warn!(error = %close_err, "failed to close browser after tab error");
                }
                Err(e)
            }
        }
    }
}

/// A Chrome process together with the tab it is driving.
pub struct ChromeSession {
    browser: NewsBrowser,
    page: Page,
}

#[async_trait(?Send)]
impl DomSource for ChromeSession {
    type Node = Element;

    async fn query_all(&self, selector: &str) -> Result<Vec<Element>> {
        self.page.find_elements(selector).await
    }
}

#[async_trait(?Send)]
impl Session for ChromeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        self.page.goto(url).await
    }

    async fn title(&self) -> Result<String> {
        self.page.title().await
    }

    async fn close(self) -> Result<()> {
        let tab = self.page.close().await;
        let browser = self.browser.close().await;
        if let Err(e) = tab {
            warn!(error = %e, "failed to close tab");
        }
        browser
    }
}
