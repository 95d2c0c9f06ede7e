//! End-to-end pipeline tests: fetch, normalize, and account for every
//! record, including aborted runs that must surface partial output.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vcat_core::NormalizeOptions;
use vcat_scraper::{run_pipeline, CatalogClient, FetchSession, ScrapeError, Termination};

const ENDPOINT: &str = "/api/io/_v/api/intelligent-search/product_search";

fn test_client() -> CatalogClient {
    CatalogClient::new(5, "vcat-test/0.1", 1, 0).expect("failed to build test CatalogClient")
}

fn good_product(id: &str) -> serde_json::Value {
    json!({
        "productId": id,
        "productName": format!("Product {id}"),
        "brand": "Portsaid",
        "categories": ["/Ropa/Remeras/"],
        "link": format!("/product-{id}/p"),
        "items": [{
            "images": [{"imageUrl": format!("https://cdn.example.com/{id}.jpg")}],
            "sellers": [{"commertialOffer": {"Price": 800, "ListPrice": 1000}}]
        }]
    })
}

#[tokio::test]
async fn full_run_normalizes_and_counts_skips() {
    let server = MockServer::start().await;

    // Page 1: two good records and one structurally broken one.
    let page_1 = json!({
        "products": [good_product("1"), "not an object", good_product("2")]
    });
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_1))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&json!({"products": []})))
        .mount(&server)
        .await;

    let client = test_client();
    let base_url = server.uri();
    let session = FetchSession::new(&client, &base_url, ENDPOINT, 0, None);
    let outcome = run_pipeline(session, &base_url, &NormalizeOptions::default()).await;

    assert!(matches!(outcome.termination, Termination::Exhausted));
    assert!(!outcome.aborted());
    assert_eq!(outcome.pages_fetched, 1);
    assert_eq!(outcome.raw_records, 3);
    assert_eq!(outcome.products.len(), 2);
    assert_eq!(outcome.skipped, 1);

    let first = &outcome.products[0];
    assert_eq!(first.id, "1");
    assert_eq!(first.discount_percent, 20);
    assert_eq!(first.category, "Ropa > Remeras");
    assert_eq!(first.product_url, format!("{base_url}/product-1/p"));
}

#[tokio::test]
async fn aborted_run_surfaces_partial_catalog() {
    let server = MockServer::start().await;

    let page_1 = json!({"products": [good_product("1"), good_product("2")]});
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&page_1))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client();
    let base_url = server.uri();
    let session = FetchSession::new(&client, &base_url, ENDPOINT, 0, None);
    let outcome = run_pipeline(session, &base_url, &NormalizeOptions::default()).await;

    // Page 2 failed, but page 1's records are still in the outcome.
    assert!(outcome.aborted());
    assert_eq!(outcome.products.len(), 2);
    assert_eq!(outcome.raw_records, 2);
    match &outcome.termination {
        Termination::Aborted(ScrapeError::PageFailed { page, .. }) => assert_eq!(*page, 2),
        other => panic!("expected Aborted(PageFailed page 2), got: {other:?}"),
    }
}

#[tokio::test]
async fn page_limit_run_is_not_an_abort() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(ENDPOINT))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(&json!({"products": [good_product("1")]})),
        )
        .mount(&server)
        .await;

    let client = test_client();
    let base_url = server.uri();
    let session = FetchSession::new(&client, &base_url, ENDPOINT, 0, Some(3));
    let outcome = run_pipeline(session, &base_url, &NormalizeOptions::default()).await;

    assert!(matches!(outcome.termination, Termination::PageLimit));
    assert!(!outcome.aborted());
    assert_eq!(outcome.pages_fetched, 3);
    assert_eq!(outcome.products.len(), 3);
    assert_eq!(outcome.skipped, 0);
}
