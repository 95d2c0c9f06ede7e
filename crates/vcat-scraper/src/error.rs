use thiserror::Error;

/// Page-level failures of the paginated fetch.
///
/// Transport errors, non-2xx statuses, and malformed bodies are all
/// transient (the upstream search API serves intermittent 5xx and
/// truncated bodies under load) and are retried with backoff. When the
/// retry budget for a page is exhausted the last error is escalated to
/// [`ScrapeError::PageFailed`], which carries the page number and aborts
/// the run.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("page {page} failed after retries: {source}")]
    PageFailed {
        page: u32,
        #[source]
        source: Box<ScrapeError>,
    },
}

/// A single raw record could not be mapped to the canonical shape.
///
/// Always local to one record: the pipeline logs the reason, bumps the
/// skip counter, and moves on. Never aborts a run.
#[derive(Debug, Error)]
#[error("record skipped: {reason}")]
pub struct RecordError {
    pub reason: String,
}

impl RecordError {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
