//! In-memory stand-ins for a browser session, used by unit tests.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::dom::{DomNode, DomSource};
use crate::error::{Error, Result};
use crate::session::{Session, SessionProvider};

#[derive(Debug, Clone)]
pub struct FakeItem {
    date: Option<String>,
    link: Option<(String, Option<String>)>,
}

impl FakeItem {
    pub fn numbered(n: usize) -> Self {
        Self {
            date: Some(format!("2024-01-{n:02}")),
            link: Some((
                format!("Post {n}"),
                Some(format!("https://blog.example.org/post-{n}")),
            )),
        }
    }

    pub fn without_date(mut self) -> Self {
        self.date = None;
        self
    }

    pub fn without_link(mut self) -> Self {
        self.link = None;
        self
    }

    pub fn without_href(mut self) -> Self {
        if let Some((_, href)) = self.link.as_mut() {
            *href = None;
        }
        self
    }
}

#[derive(Debug, Clone)]
pub enum FakeNode {
    Item(FakeItem),
    Date(String),
    Link { text: String, href: Option<String> },
}

#[async_trait(?Send)]
impl DomNode for FakeNode {
    async fn first_by_tag(&self, tag: &str) -> Result<Self> {
        let FakeNode::Item(item) = self else {
            return Err(Error::ElementNotFound(tag.to_string()));
        };
        let found = match tag {
            "time" => item.date.clone().map(FakeNode::Date),
            "a" => item
                .link
                .clone()
                .map(|(text, href)| FakeNode::Link { text, href }),
            _ => None,
        };
        found.ok_or_else(|| Error::ElementNotFound(tag.to_string()))
    }

    async fn text(&self) -> Result<String> {
        Ok(match self {
            FakeNode::Item(_) => String::new(),
            FakeNode::Date(date) => date.clone(),
            FakeNode::Link { text, .. } => text.clone(),
        })
    }

    async fn link_target(&self) -> Result<Option<String>> {
        Ok(match self {
            FakeNode::Link { href, .. } => href.clone(),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct FakePage {
    items: Vec<FakeItem>,
    query_fails: bool,
}

impl FakePage {
    pub fn with_items(items: Vec<FakeItem>) -> Self {
        Self {
            items,
            query_fails: false,
        }
    }

    pub fn failing_query() -> Self {
        Self {
            items: Vec::new(),
            query_fails: true,
        }
    }
}

#[async_trait(?Send)]
impl DomSource for FakePage {
    type Node = FakeNode;

    async fn query_all(&self, selector: &str) -> Result<Vec<FakeNode>> {
        if self.query_fails {
            return Err(Error::QueryError(format!("invalid selector {selector}")));
        }
        Ok(self.items.iter().cloned().map(FakeNode::Item).collect())
    }
}

/// Hands out [`FakeSession`]s and counts how often they are opened and closed.
#[derive(Debug, Default)]
pub struct FakeProvider {
    pub page: FakePage,
    pub title: String,
    pub open_fails: bool,
    pub navigate_fails: bool,
    pub title_fails: bool,
    pub close_fails: bool,
    pub opened: Rc<Cell<usize>>,
    pub closed: Rc<Cell<usize>>,
}

impl FakeProvider {
    pub fn serving(page: FakePage) -> Self {
        Self {
            page,
            title: "Welcome to Python.org".to_string(),
            ..Self::default()
        }
    }
}

#[async_trait(?Send)]
impl SessionProvider for FakeProvider {
    type Session = FakeSession;

    async fn open(&self) -> Result<FakeSession> {
        if self.open_fails {
            return Err(Error::LaunchError("no chrome binary".into()));
        }
        self.opened.set(self.opened.get() + 1);
        Ok(FakeSession {
            page: self.page.clone(),
            title: self.title.clone(),
            navigate_fails: self.navigate_fails,
            title_fails: self.title_fails,
            close_fails: self.close_fails,
            closed: Rc::clone(&self.closed),
        })
    }
}

pub struct FakeSession {
    page: FakePage,
    title: String,
    navigate_fails: bool,
    title_fails: bool,
    close_fails: bool,
    closed: Rc<Cell<usize>>,
}

#[async_trait(?Send)]
impl DomSource for FakeSession {
    type Node = FakeNode;

    async fn query_all(&self, selector: &str) -> Result<Vec<FakeNode>> {
        self.page.query_all(selector).await
    }
}

#[async_trait(?Send)]
impl Session for FakeSession {
    async fn navigate(&self, url: &str) -> Result<()> {
        if self.navigate_fails {
            return Err(Error::NavigationError(format!("{url}: net::ERR_NAME_NOT_RESOLVED")));
        }
        Ok(())
    }

    async fn title(&self) -> Result<String> {
        if self.title_fails {
            return Err(Error::NavigationError("document.title: target closed".into()));
        }
        Ok(self.title.clone())
    }

    async fn close(self) -> Result<()> {
        self.closed.set(self.closed.get() + 1);
        if self.close_fails {
            return Err(Error::IoError(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "browser connection already gone",
            )));
        }
        Ok(())
    }
}
