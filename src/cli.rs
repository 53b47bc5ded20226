use std::num::NonZeroUsize;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::{
    BrowserBuilder, BrowserConfig, ScrapeJob, DEFAULT_CONTAINER_SELECTOR, DEFAULT_ITEM_CAP,
    DEFAULT_URL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Print the latest news entries of a page, read through headless Chrome.
///
/// With no arguments, scrapes the top five python.org blog entries.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Page to load
    #[arg(long, default_value = DEFAULT_URL)]
    pub url: String,

    /// CSS selector of the repeating news items
    #[arg(long, default_value = DEFAULT_CONTAINER_SELECTOR)]
    pub selector: String,

    /// How many matched items to read
    #[arg(short = 'n', long, default_value_t = NonZeroUsize::new(DEFAULT_ITEM_CAP).unwrap_or(NonZeroUsize::MIN))]
    pub limit: NonZeroUsize,

    /// Show the browser window
    #[arg(long)]
    pub headful: bool,

    /// Browser window width in pixels
    #[arg(long, default_value_t = 1920)]
    pub window_width: u32,

    /// Browser window height in pixels
    #[arg(long, default_value_t = 1080)]
    pub window_height: u32,

    /// Chrome/Chromium executable to launch instead of the detected one
    #[arg(long)]
    pub chrome_path: Option<String>,

    /// Navigation timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

impl Cli {
    pub fn job(&self) -> ScrapeJob {
        ScrapeJob {
            url: self.url.clone(),
            container_selector: self.selector.clone(),
            item_cap: self.limit,
        }
    }

    pub fn browser_config(&self) -> BrowserConfig {
        let mut builder = BrowserBuilder::new()
            .headless(!self.headful)
            .viewport(self.window_width, self.window_height)
            .timeout(Duration::from_secs(self.timeout_secs));
        if let Some(ref path) = self.chrome_path {
            builder = builder.chrome_path(path);
        }
        builder.build_config()
    }
}
