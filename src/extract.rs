use std::num::NonZeroUsize;

use tracing::{debug, info, instrument, warn};

use crate::dom::{DomNode, DomSource};
use crate::error::{Error, Result};
use crate::record::NewsRecord;

/// Tag holding the entry's date.
pub const DATE_TAG: &str = "time";

/// Tag holding the entry's title and link.
pub const LINK_TAG: &str = "a";

/// Read up to `item_cap` news entries from the elements matching
/// `container_selector`.
///
/// Items missing a date or a link are logged and skipped; the rest keep
/// document order. Only a failure of the container query itself is returned
/// as an error.
pub async fn extract<S: DomSource>(
    page: &S,
    container_selector: &str,
    item_cap: NonZeroUsize,
) -> Result<Vec<NewsRecord>> {
    let numbered = extract_numbered(page, container_selector, item_cap).await?;
    Ok(numbered.into_iter().map(|(_, record)| record).collect())
}

/// Like [`extract`], but each record is paired with the 1-based position of
/// the element it came from, so skipped items leave a gap in the numbering.
#[instrument(level = "info", skip(page, item_cap), fields(item_cap = item_cap.get()))]
pub async fn extract_numbered<S: DomSource>(
    page: &S,
    container_selector: &str,
    item_cap: NonZeroUsize,
) -> Result<Vec<(usize, NewsRecord)>> {
    let items = page.query_all(container_selector).await.map_err(|e| match e {
        Error::QueryError(_) => e,
        other => Error::QueryError(format!("{container_selector}: {other}")),
    })?;

    let matched = items.len();
    let mut records = Vec::with_capacity(matched.min(item_cap.get()));

    for (i, item) in items.iter().take(item_cap.get()).enumerate() {
        let index = i + 1;
        match read_item(item).await {
            Ok(record) => {
                debug!(index, date = record.date(), title = record.title(), "read news item");
                records.push((index, record));
            }
            Err(e) => warn!(index, error = %e, "skipping news item"),
        }
    }

    info!(matched, extracted = records.len(), "extraction finished");
    Ok(records)
}

async fn read_item<N: DomNode>(item: &N) -> Result<NewsRecord> {
    let date = item.first_by_tag(DATE_TAG).await?.text().await?;

    let link = item.first_by_tag(LINK_TAG).await?;
    let title = link.text().await?;
    let url = link
        .link_target()
        .await?
        .ok_or_else(|| Error::MissingAttribute(format!("href on <{LINK_TAG}>")))?;

    Ok(NewsRecord::new(date, title, url))
}
