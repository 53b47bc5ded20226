use std::num::NonZeroUsize;
use std::time::Duration;

/// Page scraped when no URL is given.
pub const DEFAULT_URL: &str = "https://www.python.org/";

/// List items of the blog widget on python.org.
pub const DEFAULT_CONTAINER_SELECTOR: &str = ".blog-widget li";

pub const DEFAULT_ITEM_CAP: usize = 5;

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub viewport_width: u32,
    pub viewport_height: u32,
    pub chrome_path: Option<String>,
    /// Upper bound for a single navigation (default: 30s).
    pub default_timeout: Duration,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            viewport_width: 1920,
            viewport_height: 1080,
            chrome_path: None,
            default_timeout: Duration::from_secs(30),
        }
    }
}

pub struct BrowserBuilder {
    config: BrowserConfig,
}

impl BrowserBuilder {
    pub fn new() -> Self {
        Self {
            config: BrowserConfig::default(),
        }
    }

    pub fn headless(mut self, headless: bool) -> Self {
        self.config.headless = headless;
        self
    }

    pub fn viewport(mut self, width: u32, height: u32) -> Self {
        self.config.viewport_width = width;
        self.config.viewport_height = height;
        self
    }

    pub fn chrome_path(mut self, path: impl Into<String>) -> Self {
        self.config.chrome_path = Some(path.into());
        self
    }

    /// Set the navigation timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.default_timeout = timeout;
        self
    }

    pub fn build_config(self) -> BrowserConfig {
        self.config
    }
}

impl Default for BrowserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// What to scrape: the page, the repeating list items on it, and how many of
/// them to look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeJob {
    pub url: String,
    pub container_selector: String,
    pub item_cap: NonZeroUsize,
}

impl Default for ScrapeJob {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            item_cap: NonZeroUsize::new(DEFAULT_ITEM_CAP).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_job_targets_python_blog_widget() {
        let job = ScrapeJob::default();
        assert_eq!(job.url, "https://www.python.org/");
        assert_eq!(job.container_selector, ".blog-widget li");
        assert_eq!(job.item_cap.get(), 5);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = BrowserBuilder::new()
            .headless(false)
            .viewport(800, 600)
            .chrome_path("/usr/bin/chromium")
            .timeout(Duration::from_secs(5))
            .build_config();

        assert!(!config.headless);
        assert_eq!((config.viewport_width, config.viewport_height), (800, 600));
        assert_eq!(config.chrome_path.as_deref(), Some("/usr/bin/chromium"));
        assert_eq!(config.default_timeout, Duration::from_secs(5));
    }
}
