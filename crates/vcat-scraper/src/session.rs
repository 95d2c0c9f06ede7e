//! One catalog extraction run: a finite, non-restartable page sequence.
//!
//! The session owns the only cross-page state of a run: the 1-based
//! page counter, the accumulated record count, and a one-shot total-page
//! estimate used purely for progress logging. Pages are fetched strictly
//! one at a time; the inter-page delay bounds the request rate.

use std::time::Duration;

use serde_json::Value;

use crate::client::CatalogClient;
use crate::error::ScrapeError;

/// Why a session stopped yielding pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The API returned an empty (or absent) `products` array, the sole
    /// catalog-exhaustion signal.
    Exhausted,
    /// The configured `max_pages` safety ceiling was reached. Not an
    /// error; used for unattended/CI runs.
    PageLimit,
}

/// Drives page-by-page fetching for one run.
///
/// Not restartable: once [`FetchSession::next_page`] returns `Ok(None)`
/// or an error, the session is finished.
pub struct FetchSession<'a> {
    client: &'a CatalogClient,
    base_url: &'a str,
    endpoint: &'a str,
    request_delay_ms: u64,
    max_pages: Option<u32>,
    page: u32,
    pages_fetched: u32,
    raw_records: u64,
    estimated_pages: Option<u64>,
    stop: Option<StopReason>,
}

impl<'a> FetchSession<'a> {
    #[must_use]
    pub fn new(
        client: &'a CatalogClient,
        base_url: &'a str,
        endpoint: &'a str,
        request_delay_ms: u64,
        max_pages: Option<u32>,
    ) -> Self {
        Self {
            client,
            base_url,
            endpoint,
            request_delay_ms,
            max_pages,
            page: 1,
            pages_fetched: 0,
            raw_records: 0,
            estimated_pages: None,
            stop: None,
        }
    }

    /// Fetches the next page of raw product records.
    ///
    /// Returns `Ok(Some(records))` for a non-empty page, `Ok(None)` once
    /// the catalog is exhausted or the page ceiling is hit (see
    /// [`FetchSession::stop_reason`] to distinguish the two). A page
    /// that returns fewer records than the per-page hint is still a
    /// valid page and does not terminate the sequence.
    ///
    /// # Errors
    ///
    /// Propagates [`ScrapeError::PageFailed`] once the page's retry
    /// budget is exhausted. The session yields no further pages after an
    /// error.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Value>>, ScrapeError> {
        if self.stop.is_some() {
            return Ok(None);
        }

        if let Some(limit) = self.max_pages {
            if self.page > limit {
                tracing::info!(limit, "page ceiling reached, stopping pagination");
                self.stop = Some(StopReason::PageLimit);
                return Ok(None);
            }
        }

        if self.page > 1 && self.request_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.request_delay_ms)).await;
        }

        let search_page = self
            .client
            .fetch_page(self.base_url, self.endpoint, self.page)
            .await?;

        if self.estimated_pages.is_none() {
            if let Some(estimate) = search_page.estimated_pages() {
                self.estimated_pages = Some(estimate);
                tracing::info!(
                    total_records = search_page.records_filtered,
                    estimated_pages = estimate,
                    "catalog size estimate"
                );
            }
        }

        if search_page.products.is_empty() {
            tracing::info!(page = self.page, "empty page, catalog exhausted");
            self.stop = Some(StopReason::Exhausted);
            return Ok(None);
        }

        let count = search_page.products.len();
        self.raw_records += count as u64;
        self.pages_fetched += 1;
        tracing::info!(
            page = self.page,
            estimated_pages = self.estimated_pages,
            count,
            total = self.raw_records,
            "fetched catalog page"
        );
        self.page += 1;

        Ok(Some(search_page.products))
    }

    /// Pages that contributed at least one record.
    #[must_use]
    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Raw records yielded so far.
    #[must_use]
    pub fn raw_records(&self) -> u64 {
        self.raw_records
    }

    /// Why the session stopped, once it has. `None` while pages remain
    /// or after an error (errors carry their own context).
    #[must_use]
    pub fn stop_reason(&self) -> Option<StopReason> {
        self.stop
    }
}
