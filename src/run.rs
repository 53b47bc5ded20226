use tracing::{error, info, warn};

use crate::config::ScrapeJob;
use crate::error::{Error, ErrorKind, Result};
use crate::extract::extract_numbered;
use crate::present::Presenter;
use crate::record::NewsRecord;
use crate::session::{Session, SessionProvider};

/// What one scrape cycle produced.
#[derive(Debug, Default)]
pub struct RunReport {
    pub title: Option<String>,
    pub records: Vec<NewsRecord>,
    /// The fatal error that ended the cycle early, if any.
    pub failure: Option<Error>,
    /// Whether a session was opened and then released.
    pub released: bool,
}

/// Run one full cycle: open a session, load `job.url`, extract and present
/// the news items, and release the session on every path out.
///
/// Errors are logged and recorded in the report rather than returned.
pub async fn run<P, R>(provider: &P, job: &ScrapeJob, presenter: &mut R) -> RunReport
where
    P: SessionProvider,
    R: Presenter,
{
    let mut report = RunReport::default();
    let mut session: Option<P::Session> = None;

    if let Err(e) = drive(provider, &mut session, job, presenter, &mut report).await {
        match e.kind() {
            ErrorKind::Session => error!(error = %e, url = %job.url, "browser session failed"),
            ErrorKind::Query => error!(
                error = %e,
                selector = %job.container_selector,
                "could not query news items"
            ),
            ErrorKind::Item => error!(error = %e, "unexpected item failure"),
        }
        report.failure = Some(e);
    }

    if let Some(handle) = session.take() {
        match handle.close().await {
            Ok(()) => info!("browser closed"),
            Err(e) => warn!(error = %e, "failed to close browser cleanly"),
        }
        report.released = true;
    }

    report
}

async fn drive<P, R>(
    provider: &P,
    slot: &mut Option<P::Session>,
    job: &ScrapeJob,
    presenter: &mut R,
    report: &mut RunReport,
) -> Result<()>
where
    P: SessionProvider,
    R: Presenter,
{
    let session = slot.insert(provider.open().await?);

    session.navigate(&job.url).await?;
    info!(url = %job.url, "page loaded");

    let title = session.title().await?;
    if let Err(e) = presenter.page_title(&title) {
        warn!(error = %e, "failed to write page title");
    }
    report.title = Some(title);

    let numbered = extract_numbered(&*session, &job.container_selector, job.item_cap).await?;
    if let Err(e) = presenter.records(&numbered) {
        warn!(error = %e, "failed to write records");
    }
    report.records = numbered.into_iter().map(|(_, record)| record).collect();

    Ok(())
}
