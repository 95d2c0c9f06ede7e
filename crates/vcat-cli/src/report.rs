//! Final run summary printed after every extraction, aborted or not.

use std::time::Duration;

use vcat_scraper::PipelineOutcome;

/// Renders the end-of-run summary.
///
/// Always reports all four counters so an aborted run's partial yield is
/// visible at a glance next to its termination kind.
#[must_use]
pub fn format_summary(outcome: &PipelineOutcome, elapsed: Duration) -> String {
    format!(
        "pages fetched: {}\n\
         raw records: {}\n\
         normalized: {}\n\
         skipped: {}\n\
         termination: {}\n\
         elapsed: {:.1}s",
        outcome.pages_fetched,
        outcome.raw_records,
        outcome.products.len(),
        outcome.skipped,
        outcome.termination.label(),
        elapsed.as_secs_f64(),
    )
}
