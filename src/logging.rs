use tracing::Level;
use tracing_subscriber::fmt::time::UtcTime;

/// Install the process-wide `tracing` subscriber: INFO and above, RFC 3339
/// timestamps, written to stderr so stdout stays free for the report.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_timer(UtcTime::rfc_3339())
        .with_writer(std::io::stderr)
        .try_init();
}
