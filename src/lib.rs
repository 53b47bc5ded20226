pub mod browser;
pub mod cli;
pub mod config;
pub mod dom;
pub mod element;
pub mod error;
pub mod extract;
pub mod logging;
pub mod page;
pub mod present;
pub mod record;
pub mod run;
pub mod session;

#[cfg(test)]
mod fake;

pub use browser::NewsBrowser;
pub use config::{BrowserConfig, ScrapeJob};
pub use error::{Error, ErrorKind, Result};
pub use extract::extract;
pub use page::Page;
pub use record::NewsRecord;
pub use run::{run, RunReport};
pub use session::{ChromeProvider, ChromeSession, Session, SessionProvider};
