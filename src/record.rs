use serde::Serialize;

/// A single news entry read from the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsRecord {
    date: String,
    title: String,
    url: String,
}

impl NewsRecord {
    pub fn new(date: impl Into<String>, title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Absolute link target of the entry.
    pub fn url(&self) -> &str {
        &self.url
    }
}
