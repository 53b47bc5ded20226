use clap::Parser;

use headless_news::cli::{Cli, OutputFormat};
use headless_news::logging::init_logging;
use headless_news::present::{JsonPresenter, TextPresenter};
use headless_news::{run, ChromeProvider};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    init_logging();

    let provider = ChromeProvider::new(cli.browser_config());
    let job = cli.job();
    let stdout = std::io::stdout().lock();

    // Failures are logged by `run`; the exit status stays 0.
    let report = match cli.format {
        OutputFormat::Text => run(&provider, &job, &mut TextPresenter::new(stdout)).await,
        OutputFormat::Json => run(&provider, &job, &mut JsonPresenter::new(stdout)).await,
    };
    tracing::debug!(
        records = report.records.len(),
        failed = report.failure.is_some(),
        "run finished"
    );
}
