use httpmock::prelude::*;
use pantry_tracker::config::toml_config::ProductLookupConfig;
use pantry_tracker::core::form::{FoodForm, ScanNotice};
use pantry_tracker::core::{Category, ProductLookup};
use pantry_tracker::OpenFoodFactsClient;
use chrono::NaiveDate;

fn client_for(endpoint: String) -> OpenFoodFactsClient {
    let config = ProductLookupConfig {
        endpoint,
        timeout_seconds: 5,
        language: "en".to_string(),
    };
    OpenFoodFactsClient::new(&config).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, 20).unwrap()
}

#[tokio::test]
async fn test_lookup_found_product() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/product/3017620422003.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "code": "3017620422003",
                    "status": 1,
                    "status_verbose": "product found",
                    "product": {
                        "product_name": "Hazelnut Spread",
                        "categories_tags": ["en:spreads", "en:snacks", "en:dairy"]
                    }
                }));
        })
        .await;

    let client = client_for(server.base_url());
    let info = client.lookup("3017620422003").await.unwrap();

    api_mock.assert_async().await;
    assert_eq!(info.name, "Hazelnut Spread");
    // en:dairy sits above en:snacks in the mapping table
    assert_eq!(info.category, Category::Dairy);
    assert_eq!(info.expiry_days, Some(7));
}

#[tokio::test]
async fn test_lookup_not_found_is_a_miss() {
    let server = MockServer::start_async().await;
    let api_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/product/0000000000000.json");
            then.status(200).json_body(serde_json::json!({
                "code": "0000000000000",
                "status": 0,
                "status_verbose": "product not found"
            }));
        })
        .await;

    let client = client_for(server.base_url());
    assert!(matches!(client.try_lookup("0000000000000").await, Ok(None)));
    api_mock.assert_async().await;
}

#[tokio::test]
async fn test_http_error_and_malformed_body_are_misses() {
    let server = MockServer::start_async().await;
    let error_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/product/111.json");
            then.status(503);
        })
        .await;
    let garbage_mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/product/222.json");
            then.status(200).body("<html>maintenance</html>");
        })
        .await;

    let client = client_for(server.base_url());
    assert!(matches!(client.try_lookup("111").await, Ok(None)));
    assert!(matches!(client.try_lookup("222").await, Ok(None)));
    error_mock.assert_async().await;
    garbage_mock.assert_async().await;
}

#[tokio::test]
async fn test_blank_barcode_makes_no_request() {
    let server = MockServer::start_async().await;
    let any_mock = server
        .mock_async(|when, then| {
            when.method(GET);
            then.status(200);
        })
        .await;

    let client = client_for(server.base_url());
    assert!(client.lookup("   ").await.is_none());
    assert!(client.lookup("12/../34").await.is_none());
    assert_eq!(any_mock.hits_async().await, 0);
}

#[tokio::test]
async fn test_transport_failure_is_distinguished_but_soft() {
    let client = client_for("http://127.0.0.1:1".to_string());

    assert!(client.try_lookup("3017620422003").await.is_err());
    assert!(client.lookup("3017620422003").await.is_none());

    let mut form = FoodForm::new();
    assert!(form.begin_scan());
    let notice = form.apply_scan(client.try_lookup("3017620422003").await, today());
    assert_eq!(notice, ScanNotice::Failed);
    assert!(!form.loading);
}

#[tokio::test]
async fn test_scan_prefills_form() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/v0/product/5000112637922.json");
            then.status(200).json_body(serde_json::json!({
                "status": 1,
                "product": {
                    "product_name_en": "Cola",
                    "categories_tags": ["en:beverages", "en:soft-drinks"]
                }
            }));
        })
        .await;

    let client = client_for(server.base_url());
    let mut form = FoodForm::new();
    assert!(form.begin_scan());
    let notice = form.apply_scan(client.try_lookup("5000112637922").await, today());

    assert_eq!(notice.description(), "Added Cola to the form");
    let candidate = form.submit(today()).unwrap();
    assert_eq!(candidate.category, Category::Beverages);
    assert_eq!(candidate.expiry_date, NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
}
