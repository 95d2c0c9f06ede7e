//! Run orchestration: drive a fetch session page by page and normalize
//! each raw record independently.
//!
//! Record-level failures are counted and logged, never fatal. Page-level
//! failures abort the run, but everything normalized before the abort is
//! kept: a partial catalog is surfaced, clearly marked as aborted, so
//! callers never mistake it for a complete one.

use vcat_core::{CanonicalProduct, NormalizeOptions};

use crate::error::ScrapeError;
use crate::normalize::normalize;
use crate::session::{FetchSession, StopReason};

/// How a run ended.
#[derive(Debug)]
pub enum Termination {
    /// The catalog was fully paginated (empty page reached).
    Exhausted,
    /// The `max_pages` safety ceiling stopped pagination. Not an error.
    PageLimit,
    /// A page failed after retries. The outcome still carries all
    /// records normalized before the failure.
    Aborted(ScrapeError),
}

impl Termination {
    /// Short human-readable label for run summaries.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Termination::Exhausted => "exhausted",
            Termination::PageLimit => "page limit",
            Termination::Aborted(_) => "aborted",
        }
    }
}

/// Final accounting of one extraction run.
#[derive(Debug)]
pub struct PipelineOutcome {
    pub pages_fetched: u32,
    pub raw_records: u64,
    pub products: Vec<CanonicalProduct>,
    pub skipped: u64,
    pub termination: Termination,
}

impl PipelineOutcome {
    #[must_use]
    pub fn aborted(&self) -> bool {
        matches!(self.termination, Termination::Aborted(_))
    }
}

/// Drains `session`, normalizing every raw record against `options`.
///
/// Never returns an error: fatal page failures are folded into
/// [`Termination::Aborted`] so partial results survive.
pub async fn run_pipeline(
    mut session: FetchSession<'_>,
    base_url: &str,
    options: &NormalizeOptions,
) -> PipelineOutcome {
    let mut products = Vec::new();
    let mut skipped = 0u64;

    let termination = loop {
        match session.next_page().await {
            Ok(Some(batch)) => {
                for raw in &batch {
                    match normalize(raw, base_url, options) {
                        Ok(product) => products.push(product),
                        Err(e) => {
                            skipped += 1;
                            tracing::warn!(reason = %e, "skipping record");
                        }
                    }
                }
            }
            Ok(None) => {
                break match session.stop_reason() {
                    Some(StopReason::PageLimit) => Termination::PageLimit,
                    // Exhaustion is the only other way a session stops
                    // cleanly.
                    _ => Termination::Exhausted,
                };
            }
            Err(e) => {
                tracing::error!(error = %e, "run aborted mid-pagination");
                break Termination::Aborted(e);
            }
        }
    };

    PipelineOutcome {
        pages_fetched: session.pages_fetched(),
        raw_records: session.raw_records(),
        products,
        skipped,
        termination,
    }
}
