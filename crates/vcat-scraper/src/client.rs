use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::error::ScrapeError;
use crate::retry::retry_with_backoff;
use crate::types::SearchPage;

/// HTTP client for a storefront's paginated JSON search endpoint.
///
/// Pages are addressed by a 1-based `page` query parameter. Transport
/// failures, non-2xx statuses, and malformed bodies are retried with
/// exponential backoff; once the retry budget for a page is exhausted
/// the last error is escalated to [`ScrapeError::PageFailed`] carrying
/// the page number.
pub struct CatalogClient {
    client: Client,
    /// Total attempt budget per page request.
    max_retries: u32,
    /// Base delay in seconds for exponential backoff between attempts.
    backoff_base_secs: u64,
}

impl CatalogClient {
    /// Creates a `CatalogClient` with configured timeout, `User-Agent`,
    /// and retry policy.
    ///
    /// Every request carries `Accept: application/json` alongside the
    /// given `User-Agent`. `max_retries` is the total number of attempts
    /// made per page; `0` and `1` both mean a single attempt.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(
        timeout_secs: u64,
        user_agent: &str,
        max_retries: u32,
        backoff_base_secs: u64,
    ) -> Result<Self, ScrapeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            max_retries,
            backoff_base_secs,
        })
    }

    /// Fetches one page of the catalog search endpoint, with automatic
    /// retry on transient errors.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::PageFailed`] carrying `page` and the last
    /// underlying error once the `max_retries` attempt budget is spent.
    /// Page-level failures are never swallowed; the caller decides
    /// whether a partial catalog is usable.
    pub async fn fetch_page(
        &self,
        base_url: &str,
        endpoint: &str,
        page: u32,
    ) -> Result<SearchPage, ScrapeError> {
        let url = Self::search_url(base_url, endpoint, page);

        retry_with_backoff(self.max_retries, self.backoff_base_secs, || {
            let url = url.clone();
            async move {
                let response = self.client.get(&url).send().await?;
                let status = response.status();

                if !status.is_success() {
                    return Err(ScrapeError::UnexpectedStatus {
                        status: status.as_u16(),
                        url,
                    });
                }

                // An empty body is a parse failure like any other and
                // goes through the same retry policy.
                let body = response.text().await?;
                serde_json::from_str::<SearchPage>(&body).map_err(|e| ScrapeError::Deserialize {
                    context: format!("search page {page}"),
                    source: e,
                })
            }
        })
        .await
        .map_err(|source| ScrapeError::PageFailed {
            page,
            source: Box::new(source),
        })
    }

    /// Builds the search URL for a 1-based page number.
    ///
    /// The endpoint path is appended verbatim to the origin; only a
    /// trailing slash on `base_url` is stripped so configured values
    /// like `https://shop.example.com/` do not produce `//api/...`.
    fn search_url(base_url: &str, endpoint: &str, page: u32) -> String {
        format!("{}{endpoint}?page={page}", base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
