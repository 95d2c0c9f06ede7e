use super::*;
use serde_json::json;

fn opts() -> NormalizeOptions {
    NormalizeOptions::default()
}

const BASE: &str = "https://www.portsaid.com.ar";

fn offer_product(offer: Value) -> Value {
    json!({
        "productId": "98765",
        "productName": "Remera Estampada",
        "brand": "Portsaid",
        "categories": ["/Ropa/Remeras/"],
        "link": "/remera-estampada/p",
        "description": "Remera de algodón.",
        "items": [{
            "images": [{"imageUrl": "https://cdn.example.com/remera.jpg"}],
            "sellers": [{"commertialOffer": offer}]
        }]
    })
}

// ---------------------------------------------------------------------------
// price resolution
// ---------------------------------------------------------------------------

#[test]
fn offer_prices_win_when_both_positive() {
    let product = offer_product(json!({"Price": 800, "ListPrice": 1000}));
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 1000.0);
    assert_eq!(normalized.selling_price, 800.0);
    assert_eq!(normalized.discount_percent, 20);
}

#[test]
fn zero_list_price_substitutes_price_without_discount() {
    let product = offer_product(json!({
        "Price": 500, "ListPrice": 0, "PriceWithoutDiscount": 500
    }));
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 500.0);
    assert_eq!(normalized.selling_price, 500.0);
    assert_eq!(normalized.discount_percent, 0);
}

#[test]
fn list_equal_to_price_yields_zero_discount() {
    let product = offer_product(json!({"Price": 750, "ListPrice": 750}));
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 750.0);
    assert_eq!(normalized.selling_price, 750.0);
    assert_eq!(normalized.discount_percent, 0);
}

#[test]
fn missing_items_falls_back_to_price_range() {
    let product = json!({
        "productId": "1",
        "priceRange": {
            "listPrice": {"highPrice": 1200},
            "sellingPrice": {"highPrice": 900}
        }
    });
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 1200.0);
    assert_eq!(normalized.selling_price, 900.0);
    assert_eq!(normalized.discount_percent, 25);
}

#[test]
fn zero_offer_price_falls_back_to_price_range() {
    let mut product = offer_product(json!({"Price": 0, "ListPrice": 0}));
    product["priceRange"] = json!({
        "listPrice": {"highPrice": 300},
        "sellingPrice": {"highPrice": 200}
    });
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 300.0);
    assert_eq!(normalized.selling_price, 200.0);
}

#[test]
fn exhausted_chain_yields_zero_prices_and_zero_discount() {
    let product = json!({"productId": "1", "productName": "Sin precio"});
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 0.0);
    assert_eq!(normalized.selling_price, 0.0);
    assert_eq!(normalized.discount_percent, 0);
}

#[test]
fn price_range_only_strategy_ignores_offer() {
    let mut product = offer_product(json!({"Price": 800, "ListPrice": 1000}));
    product["priceRange"] = json!({
        "listPrice": {"highPrice": 1200},
        "sellingPrice": {"highPrice": 900}
    });
    let options = NormalizeOptions {
        price_strategy: PriceStrategy::PriceRangeOnly,
        ..opts()
    };
    let normalized = normalize(&product, BASE, &options).unwrap();
    assert_eq!(normalized.list_price, 1200.0);
    assert_eq!(normalized.selling_price, 900.0);
}

#[test]
fn numeric_strings_are_accepted_as_prices() {
    let product = offer_product(json!({"Price": "800.00", "ListPrice": "1000.00"}));
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.list_price, 1000.0);
    assert_eq!(normalized.discount_percent, 20);
}

// ---------------------------------------------------------------------------
// discount_percent
// ---------------------------------------------------------------------------

#[test]
fn discount_zero_when_selling_exceeds_list() {
    // Promotional price above list: forced to 0, never negative.
    assert_eq!(discount_percent(800.0, 1000.0), 0);
}

#[test]
fn discount_zero_when_either_price_nonpositive() {
    assert_eq!(discount_percent(0.0, 500.0), 0);
    assert_eq!(discount_percent(500.0, 0.0), 0);
    assert_eq!(discount_percent(-1.0, 500.0), 0);
}

#[test]
fn discount_rounds_half_up() {
    // 1 - 875/1000 = 12.5%, which rounds half up.
    assert_eq!(discount_percent(1000.0, 875.0), 13);
}

#[test]
fn discount_rounds_to_nearest_integer() {
    // 1 - 666/1000 = 33.4% -> 33
    assert_eq!(discount_percent(1000.0, 666.0), 33);
    // 1 - 664/1000 = 33.6% -> 34
    assert_eq!(discount_percent(1000.0, 664.0), 34);
}

#[test]
fn discount_stays_within_bounds() {
    assert_eq!(discount_percent(1000.0, 1.0), 100);
    assert_eq!(discount_percent(1000.0, 999.0), 0);
}

// ---------------------------------------------------------------------------
// category
// ---------------------------------------------------------------------------

#[test]
fn category_flattens_slashes_and_trims_separators() {
    let product = json!({"categories": ["/Ropa/Remeras/"]});
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.category, "Ropa > Remeras");
}

#[test]
fn category_normalization_is_idempotent() {
    let once = normalize_category("/Ropa/Remeras/");
    let twice = normalize_category(&once);
    assert_eq!(once, twice);
    assert_eq!(twice, "Ropa > Remeras");
}

#[test]
fn absent_categories_yield_empty_string() {
    let product = json!({"productId": "1"});
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.category, "");
}

// ---------------------------------------------------------------------------
// sizes
// ---------------------------------------------------------------------------

#[test]
fn sizes_collected_from_matching_specifications() {
    let product = json!({
        "skuSpecifications": [
            {"field": {"name": "Talle"}, "values": [{"name": "S"}, {"name": "M"}]},
            {"field": {"name": "Color"}, "values": [{"name": "Rojo"}]},
            {"field": {"name": "Size"}, "values": [{"name": "L"}]}
        ]
    });
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    let expected: BTreeSet<String> =
        ["S", "M", "L"].iter().map(ToString::to_string).collect();
    assert_eq!(normalized.sizes, expected);
}

#[test]
fn sizes_are_order_and_duplicate_invariant() {
    let with_dupes = json!({
        "skuSpecifications": [
            {"field": {"name": "Talle"}, "values": [{"name": "S"}, {"name": "M"}, {"name": "S"}]}
        ]
    });
    let reordered = json!({
        "skuSpecifications": [
            {"field": {"name": "Talle"}, "values": [{"name": "M"}, {"name": "S"}]}
        ]
    });
    let a = normalize(&with_dupes, BASE, &opts()).unwrap();
    let b = normalize(&reordered, BASE, &opts()).unwrap();
    assert_eq!(a.sizes, b.sizes);
}

#[test]
fn sizes_skipped_when_disabled() {
    let product = json!({
        "skuSpecifications": [
            {"field": {"name": "Talle"}, "values": [{"name": "S"}]}
        ]
    });
    let options = NormalizeOptions {
        include_sizes: false,
        ..opts()
    };
    let normalized = normalize(&product, BASE, &options).unwrap();
    assert!(normalized.sizes.is_empty());
}

// ---------------------------------------------------------------------------
// remaining fields
// ---------------------------------------------------------------------------

#[test]
fn image_is_first_image_of_first_item() {
    let product = json!({
        "items": [
            {"images": [
                {"imageUrl": "https://cdn.example.com/a.jpg"},
                {"imageUrl": "https://cdn.example.com/b.jpg"}
            ]},
            {"images": [{"imageUrl": "https://cdn.example.com/c.jpg"}]}
        ]
    });
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.image_url, "https://cdn.example.com/a.jpg");
}

#[test]
fn missing_image_levels_yield_empty_string() {
    for product in [
        json!({}),
        json!({"items": []}),
        json!({"items": [{}]}),
        json!({"items": [{"images": []}]}),
    ] {
        let normalized = normalize(&product, BASE, &opts()).unwrap();
        assert_eq!(normalized.image_url, "");
    }
}

#[test]
fn product_url_concatenates_base_and_link() {
    let product = json!({"link": "/remera-estampada/p"});
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(
        normalized.product_url,
        "https://www.portsaid.com.ar/remera-estampada/p"
    );
}

#[test]
fn product_url_tolerates_trailing_slash_on_base() {
    let product = json!({"link": "/remera/p"});
    let normalized = normalize(&product, "https://www.portsaid.com.ar/", &opts()).unwrap();
    assert_eq!(
        normalized.product_url,
        "https://www.portsaid.com.ar/remera/p"
    );
}

#[test]
fn description_truncated_to_configured_chars() {
    let product = json!({"description": "abcdefghij"});
    let options = NormalizeOptions {
        description_truncate_chars: 4,
        ..opts()
    };
    let normalized = normalize(&product, BASE, &options).unwrap();
    assert_eq!(normalized.description, "abcd");
}

#[test]
fn description_truncation_respects_char_boundaries() {
    let product = json!({"description": "ñandú y mañana"});
    let options = NormalizeOptions {
        description_truncate_chars: 5,
        ..opts()
    };
    let normalized = normalize(&product, BASE, &options).unwrap();
    assert_eq!(normalized.description, "ñandú");
}

#[test]
fn numeric_product_id_becomes_string() {
    let product = json!({"productId": 98765});
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.id, "98765");
}

#[test]
fn missing_scalar_fields_become_empty_strings() {
    let normalized = normalize(&json!({}), BASE, &opts()).unwrap();
    assert_eq!(normalized.id, "");
    assert_eq!(normalized.name, "");
    assert_eq!(normalized.brand, "");
    assert_eq!(normalized.description, "");
}

#[test]
fn non_object_record_is_skipped_with_reason() {
    let err = normalize(&json!("garbage"), BASE, &opts()).unwrap_err();
    assert!(
        err.reason.contains("string"),
        "reason should name the JSON kind: {}",
        err.reason
    );
    assert!(normalize(&json!([1, 2, 3]), BASE, &opts()).is_err());
    assert!(normalize(&json!(null), BASE, &opts()).is_err());
}

#[test]
fn full_record_normalizes_every_field() {
    let product = offer_product(json!({"Price": 800, "ListPrice": 1000}));
    let normalized = normalize(&product, BASE, &opts()).unwrap();
    assert_eq!(normalized.id, "98765");
    assert_eq!(normalized.name, "Remera Estampada");
    assert_eq!(normalized.brand, "Portsaid");
    assert_eq!(normalized.category, "Ropa > Remeras");
    assert_eq!(normalized.image_url, "https://cdn.example.com/remera.jpg");
    assert_eq!(
        normalized.product_url,
        "https://www.portsaid.com.ar/remera-estampada/p"
    );
    assert_eq!(normalized.description, "Remera de algodón.");
}
