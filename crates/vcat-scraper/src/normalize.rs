//! Normalization from raw product JSON to [`vcat_core::CanonicalProduct`].
//!
//! Pure functions of one raw record: no I/O, no shared state. Raw field
//! access is delegated to [`crate::raw`]; this module owns the fallback
//! policy: which price source wins, how categories are flattened, and
//! when a record is skipped.

use std::collections::BTreeSet;

use serde_json::Value;
use vcat_core::{CanonicalProduct, NormalizeOptions, PriceStrategy};

use crate::error::RecordError;
use crate::raw;

/// Normalizes one raw product record into the canonical shape.
///
/// Missing string fields resolve to empty strings; missing prices
/// resolve through the fallback chain of [`resolve_prices`]. The only
/// hard failure is a record that is not a JSON object at all.
///
/// # Errors
///
/// Returns [`RecordError`] when the record is structurally unusable.
/// Callers skip the record and continue; a single bad record never
/// aborts a run.
pub fn normalize(
    product: &Value,
    base_url: &str,
    options: &NormalizeOptions,
) -> Result<CanonicalProduct, RecordError> {
    if !product.is_object() {
        return Err(RecordError::new(format!(
            "record is not a JSON object (got {})",
            json_kind(product)
        )));
    }

    let (list_price, selling_price) = resolve_prices(product, options.price_strategy);
    let discount_percent = discount_percent(list_price, selling_price);

    let category = raw::first(product, "categories")
        .and_then(Value::as_str)
        .map(normalize_category)
        .unwrap_or_default();

    let image_url = raw::first(product, "items")
        .and_then(|item| raw::first(item, "images"))
        .and_then(|image| raw::str_field(image, "imageUrl"))
        .unwrap_or_default()
        .to_string();

    let sizes = if options.include_sizes {
        collect_sizes(product)
    } else {
        BTreeSet::new()
    };

    let link = raw::str_field(product, "link").unwrap_or_default();
    let product_url = format!("{}{link}", base_url.trim_end_matches('/'));

    let description = truncate_chars(
        raw::str_field(product, "description").unwrap_or_default(),
        options.description_truncate_chars,
    );

    Ok(CanonicalProduct {
        id: raw::id_field(product, "productId").unwrap_or_default(),
        name: raw::str_field(product, "productName")
            .unwrap_or_default()
            .to_string(),
        brand: raw::str_field(product, "brand")
            .unwrap_or_default()
            .to_string(),
        category,
        list_price,
        selling_price,
        discount_percent,
        sizes,
        image_url,
        product_url,
        description,
    })
}

/// Resolves `(list_price, selling_price)` via an ordered fallback chain.
/// The first rule yielding both prices > 0 wins; an exhausted chain
/// yields `(0.0, 0.0)`.
///
/// [`PriceStrategy::OfferChain`]:
/// 1. `items[0].sellers[0].commertialOffer`: `Price` and `ListPrice`.
/// 2. When `ListPrice` is zero or equal to `Price` (no discount
///    representable), substitute the offer's `PriceWithoutDiscount` if
///    present, else the selling price itself.
/// 3. Fall back to the catalog-level `priceRange` figures, a coarser,
///    catalog-wide number rather than this offer's price.
///
/// [`PriceStrategy::PriceRangeOnly`] starts directly at step 3.
fn resolve_prices(product: &Value, strategy: PriceStrategy) -> (f64, f64) {
    if strategy == PriceStrategy::OfferChain {
        if let Some(offer) = raw::commercial_offer(product) {
            let selling = raw::num_field(offer, "Price").unwrap_or(0.0);
            let mut list = raw::num_field(offer, "ListPrice").unwrap_or(0.0);
            if list <= 0.0 || (list - selling).abs() < f64::EPSILON {
                list = raw::num_field(offer, "PriceWithoutDiscount").unwrap_or(selling);
            }
            if list > 0.0 && selling > 0.0 {
                return (list, selling);
            }
        }
    }
    price_range_prices(product)
}

/// Catalog-level price range: `priceRange.{listPrice,sellingPrice}.highPrice`.
fn price_range_prices(product: &Value) -> (f64, f64) {
    let range = raw::field(product, "priceRange");
    let sub_price = |key: &str| -> f64 {
        range
            .and_then(|r| raw::field(r, key))
            .and_then(|p| raw::num_field(p, "highPrice"))
            .unwrap_or(0.0)
    };
    let list = sub_price("listPrice");
    let selling = sub_price("sellingPrice");
    if list > 0.0 && selling > 0.0 {
        (list, selling)
    } else {
        (0.0, 0.0)
    }
}

/// Integer discount percentage.
///
/// `round((1 - selling/list) * 100)` only when `list > 0`, `selling > 0`
/// and `list > selling`; every other combination is exactly `0`. There
/// are no negative discounts and no division by zero. Rounding is
/// round-half-up (`f64::round`, half away from zero; operands are
/// non-negative here), so `12.5%` becomes `13`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // value clamped to [0, 100]
fn discount_percent(list: f64, selling: f64) -> u8 {
    if list <= 0.0 || selling <= 0.0 || list <= selling {
        return 0;
    }
    let pct = ((1.0 - selling / list) * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

/// Flattens a slash-delimited category path to `" > "` separators and
/// trims leading/trailing separators and whitespace.
///
/// Idempotent: an already-normalized path passes through unchanged.
fn normalize_category(category: &str) -> String {
    category
        .replace('/', " > ")
        .trim_matches([' ', '>'])
        .to_string()
}

/// Collects size names from `skuSpecifications`.
///
/// A specification is size-relevant when its `field.name` contains
/// `"talle"` or `"size"` case-insensitively; all `values[*].name`
/// entries across matching specifications are gathered with set
/// semantics (deduplicated, input order irrelevant).
fn collect_sizes(product: &Value) -> BTreeSet<String> {
    let mut sizes = BTreeSet::new();
    let Some(specs) = raw::field(product, "skuSpecifications").and_then(Value::as_array) else {
        return sizes;
    };
    for spec in specs {
        let name = raw::field(spec, "field")
            .and_then(|f| raw::str_field(f, "name"))
            .unwrap_or_default()
            .to_lowercase();
        if !name.contains("talle") && !name.contains("size") {
            continue;
        }
        let Some(values) = raw::field(spec, "values").and_then(Value::as_array) else {
            continue;
        };
        for value in values {
            if let Some(size) = raw::str_field(value, "name") {
                sizes.insert(size.to_string());
            }
        }
    }
    sizes
}

/// Truncates to at most `max` characters on a char boundary.
fn truncate_chars(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s.to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
