//! Typed accessors over raw product JSON.
//!
//! The upstream API does not guarantee field presence or type stability
//! between catalog entries: IDs arrive as numbers or strings, prices as
//! numbers or numeric strings, and whole substructures may be missing.
//! Every accessor here returns an explicit `Option` so the normalizer's
//! fallback policy stays local and independently testable.

use serde_json::Value;

/// Looks up `key` on an object value. `None` for non-objects.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key)
}

/// First element of an array field. `None` when the field is absent,
/// not an array, or empty.
pub fn first<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    field(value, key)?.as_array()?.first()
}

/// String field. `None` for absent or non-string values.
pub fn str_field<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    field(value, key)?.as_str()
}

/// Numeric field, accepting JSON numbers and numeric strings
/// (`"1299.90"` appears alongside `1299.9` in live catalogs).
pub fn num_field(value: &Value, key: &str) -> Option<f64> {
    match field(value, key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Field rendered as a string, accepting strings and numbers. Used for
/// IDs, which VTEX serves as strings but other storefronts as numbers.
pub fn id_field(value: &Value, key: &str) -> Option<String> {
    match field(value, key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// The first seller's commercial offer of the first item:
/// `items[0].sellers[0].commertialOffer`.
///
/// `commertialOffer` is the field's spelling on the wire (VTEX's own
/// misspelling), not ours.
pub fn commercial_offer(product: &Value) -> Option<&Value> {
    let item = first(product, "items")?;
    let seller = first(item, "sellers")?;
    field(seller, "commertialOffer")
}
