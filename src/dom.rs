use async_trait::async_trait;

use crate::error::Result;

/// A loaded document that can be queried with CSS selectors.
#[async_trait(?Send)]
pub trait DomSource {
    type Node: DomNode;

    /// All elements matching `selector`, in document order. An empty match is
    /// `Ok(vec![])`; a selector the engine rejects, or a dead session, is an
    /// `Error::QueryError`.
    async fn query_all(&self, selector: &str) -> Result<Vec<Self::Node>>;
}

/// One element of a [`DomSource`].
#[async_trait(?Send)]
pub trait DomNode: Sized {
    /// First descendant with the given tag name.
    async fn first_by_tag(&self, tag: &str) -> Result<Self>;

    /// Rendered (visible) text of the element.
    async fn text(&self) -> Result<String>;

    /// Absolute link target, resolved against the document URL.
    async fn link_target(&self) -> Result<Option<String>>;
}
