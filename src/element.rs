use async_trait::async_trait;
use chromiumoxide::element::Element as CrElement;

use crate::dom::DomNode;
use crate::error::{Error, Result};

/// Wrapper around a chromiumoxide Element, providing a simplified API.
pub struct Element {
    inner: CrElement,
}

impl Element {
    pub(crate) fn new(inner: CrElement) -> Self {
        Self { inner }
    }

    /// Get the inner text of this element.
    pub async fn inner_text(&self) -> Result<String> {
        self.inner
            .inner_text()
            .await?
            .ok_or_else(|| Error::JsError("element has no innerText".into()))
    }

    /// Get the value of an attribute on this element, exactly as written in
    /// the markup.
    pub async fn get_attribute(&self, name: &str) -> Result<Option<String>> {
        Ok(self.inner.attribute(name).await?)
    }

    /// Get a DOM property of this element as a string, if it is one.
    /// Unlike [`Element::get_attribute`], `href` comes back resolved to an
    /// absolute URL.
    pub async fn get_property(&self, name: &str) -> Result<Option<String>> {
        let value = self.inner.property(name).await?;
        Ok(value.and_then(|v| v.as_str().map(str::to_owned)))
    }

    /// Find the first descendant matching the given CSS selector.
    pub async fn find_element(&self, selector: &str) -> Result<Element> {
        let el = self
            .inner
            .find_element(selector)
            .await
            .map_err(|e| Error::ElementNotFound(format!("{selector}: {e}")))?;
        Ok(Element::new(el))
    }
}

#[async_trait(?Send)]
impl DomNode for Element {
    async fn first_by_tag(&self, tag: &str) -> Result<Self> {
        self.find_element(tag).await
    }

    async fn text(&self) -> Result<String> {
        self.inner_text().await
    }

    async fn link_target(&self) -> Result<Option<String>> {
        match self.get_property("href").await? {
            Some(href) if !href.is_empty() => Ok(Some(href)),
            _ => self.get_attribute("href").await,
        }
    }
}
