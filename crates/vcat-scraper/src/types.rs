//! Search API response envelope.
//!
//! Only the envelope is typed. The per-product payload varies between
//! catalog entries (optional fields, numbers-as-strings, missing
//! substructures), so products stay as raw [`serde_json::Value`] trees
//! and all access goes through [`crate::raw`].

use serde::Deserialize;
use serde_json::Value;

/// Top-level response from `GET {base_url}{endpoint}?page={n}`.
///
/// An absent `products` field deserializes as an empty vector, which the
/// session treats identically to an explicit empty array: the catalog is
/// exhausted.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub products: Vec<Value>,

    /// Total records matching the (empty) search filter, used once for a
    /// page-count estimate. Never drives loop control.
    #[serde(default, rename = "recordsFiltered")]
    pub records_filtered: Option<u64>,

    #[serde(default)]
    pub pagination: Option<Pagination>,
}

/// Pagination metadata block, when the API includes one.
#[derive(Debug, Deserialize)]
pub struct Pagination {
    #[serde(default, rename = "perPage")]
    pub per_page: Option<u64>,
}

impl SearchPage {
    /// One-shot estimate of the total page count, for progress reporting
    /// only. `None` when the response lacks either figure.
    #[must_use]
    pub fn estimated_pages(&self) -> Option<u64> {
        let total = self.records_filtered?;
        let per_page = self.pagination.as_ref()?.per_page?;
        if per_page == 0 {
            return None;
        }
        Some(total.div_ceil(per_page))
    }
}
