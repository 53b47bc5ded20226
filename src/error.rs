use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Browser launch failed: {0}")]
    LaunchError(String),

    #[error("Navigation failed: {0}")]
    NavigationError(String),

    #[error("Timeout waiting for: {0}")]
    Timeout(String),

    #[error("Query failed: {0}")]
    QueryError(String),

    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Missing attribute: {0}")]
    MissingAttribute(String),

    #[error("JavaScript error: {0}")]
    JsError(String),

    #[error("CDP error: {0}")]
    CdpError(#[from] chromiumoxide::error::CdpError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// How far a failure reaches: the whole session, the container query, or a
/// single list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Session,
    Query,
    Item,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::LaunchError(_)
            | Error::NavigationError(_)
            | Error::Timeout(_)
            | Error::CdpError(_)
            | Error::IoError(_) => ErrorKind::Session,
            Error::QueryError(_) => ErrorKind::Query,
            Error::ElementNotFound(_) | Error::MissingAttribute(_) | Error::JsError(_) => {
                ErrorKind::Item
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
