//! Retry with exponential backoff for transient page-fetch errors.
//!
//! Transport failures, non-2xx statuses, and malformed JSON bodies share
//! one retry policy. An already-escalated [`ScrapeError::PageFailed`] is
//! never retried again.

use std::future::Future;
use std::time::Duration;

use crate::error::ScrapeError;

/// Returns `true` if `err` represents a transient condition that should
/// be retried after a backoff delay.
///
/// Malformed bodies count as transient here: the upstream API is known
/// to emit truncated or empty responses under load, and a fresh request
/// usually yields a full body.
fn is_retriable(err: &ScrapeError) -> bool {
    matches!(
        err,
        ScrapeError::Http(_)
            | ScrapeError::UnexpectedStatus { .. }
            | ScrapeError::Deserialize { .. }
    )
}

/// Executes `operation` with exponential backoff retries on transient errors.
///
/// `max_retries` is the total attempt budget: the operation runs at most
/// `max_retries` times (one attempt minimum, so `0` and `1` behave the
/// same). On a retriable error with budget remaining the function sleeps
/// for `backoff_base_secs * 2^(attempt - 1)` seconds and tries again;
/// once the budget is spent the last error is returned.
///
/// With `max_retries = 3` the operation is attempted at most 3 times total.
pub(crate) async fn retry_with_backoff<T, F, Fut>(
    max_retries: u32,
    backoff_base_secs: u64,
    mut operation: F,
) -> Result<T, ScrapeError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScrapeError>>,
{
    let mut last_err;
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if !is_retriable(&err) || attempt >= max_retries {
                    return Err(err);
                }
                last_err = err;
            }
        }

        // Exponential backoff: base * 2^(attempt - 1) seconds, capped to
        // avoid shift overflow on extreme configs.
        let delay_secs = backoff_base_secs.saturating_mul(1u64 << (attempt - 1).min(62));
        tracing::warn!(
            attempt,
            max_retries,
            delay_secs,
            error = %last_err,
            "transient fetch error, retrying after backoff"
        );
        tokio::time::sleep(Duration::from_secs(delay_secs)).await;
        attempt += 1;
    }
}
