use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// A product record normalized into a flat, schema-stable shape,
/// independent of the upstream search API's nested representation.
///
/// String fields default to the empty string when the source field is
/// absent, so exporters can rely on every field being present. Prices are
/// non-negative; when both prices are positive, `list_price` is an upper
/// bound for `selling_price`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CanonicalProduct {
    /// Source `productId`, kept as a string to tolerate numeric or
    /// string IDs upstream. Empty when the source field is absent.
    pub id: String,
    pub name: String,
    pub brand: String,
    /// Hierarchical category path with `" > "` separators, e.g.
    /// `"Ropa > Remeras"`. Empty when the record carries no categories.
    pub category: String,
    /// Pre-discount price. `0.0` when unresolvable.
    pub list_price: f64,
    /// Price actually charged. `0.0` when unresolvable.
    pub selling_price: f64,
    /// Integer percentage in `[0, 100]`. Exactly `0` unless both prices
    /// are positive and `list_price > selling_price`.
    pub discount_percent: u8,
    /// Deduplicated size names (set semantics, no source ordering kept).
    /// Empty when the variant profile does not collect sizes.
    pub sizes: BTreeSet<String>,
    /// First image of the first item, or empty string.
    pub image_url: String,
    /// Base storefront URL concatenated with the product-relative link.
    pub product_url: String,
    /// Plain-text description, truncated to the configured maximum.
    pub description: String,
}

impl CanonicalProduct {
    /// Returns `true` when both prices resolved to positive values.
    #[must_use]
    pub fn is_priced(&self) -> bool {
        self.list_price > 0.0 && self.selling_price > 0.0
    }

    /// Returns `true` when the record carries a real discount.
    #[must_use]
    pub fn has_discount(&self) -> bool {
        self.discount_percent > 0
    }
}
