//! Per-variant normalization options.
//!
//! The original extraction scripts existed as four near-identical copies
//! differing only in description length, whether sizes were collected,
//! and which price source they trusted. Those differences are collapsed
//! into one options struct consumed by the normalizer.

use std::str::FromStr;

/// Which source the normalizer consults for prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceStrategy {
    /// Full fallback chain: first seller's commercial offer, then
    /// `PriceWithoutDiscount`, then the catalog-level price range.
    OfferChain,
    /// Skip the offer inspection and read the catalog-level
    /// `priceRange` figures directly (coarser, catalog-wide).
    PriceRangeOnly,
}

impl std::fmt::Display for PriceStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriceStrategy::OfferChain => write!(f, "offer-chain"),
            PriceStrategy::PriceRangeOnly => write!(f, "price-range-only"),
        }
    }
}

impl FromStr for PriceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "offer-chain" => Ok(PriceStrategy::OfferChain),
            "price-range-only" => Ok(PriceStrategy::PriceRangeOnly),
            other => Err(format!(
                "unknown price strategy \"{other}\" (expected \"offer-chain\" or \"price-range-only\")"
            )),
        }
    }
}

/// Options controlling how a raw record is normalized.
#[derive(Debug, Clone, Copy)]
pub struct NormalizeOptions {
    /// Maximum description length in characters (200–500 in practice).
    pub description_truncate_chars: usize,
    /// Whether to scan `skuSpecifications` for size values.
    pub include_sizes: bool,
    pub price_strategy: PriceStrategy,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            description_truncate_chars: 500,
            include_sizes: true,
            price_strategy: PriceStrategy::OfferChain,
        }
    }
}
