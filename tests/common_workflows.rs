//! Integration tests for common SellAuth workflows.
//!
//! These tests drive the facade crate the way an application would: load
//! settings, build a client and call resource modules against a mock API.

use std::io::Write;

use sellauth::prelude::*;
use serde::Deserialize;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// =============================================================================
// Client Construction
// =============================================================================

#[test]
fn test_registry_lists_every_module() {
    assert_eq!(
        SellAuthClient::RESOURCES,
        &[
            "shops",
            "products",
            "invoices",
            "checkout",
            "coupons",
            "customers",
            "blacklist",
            "categories",
        ]
    );
}

#[test]
fn test_client_from_settings_file() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        "api_key = \"sk_file\"\nbase_url = \"https://sandbox.example.com/\"\ntimeout_secs = 12"
    )
    .unwrap();

    let settings = ClientSettings::from_file(file.path()).unwrap();
    let client = SellAuthClient::from_settings(settings).unwrap();

    assert_eq!(client.config().api_key(), "sk_file");
    assert_eq!(client.config().base_url(), "https://sandbox.example.com");
    assert_eq!(client.config().timeout().as_secs(), 12);
}

#[test]
fn test_invalid_settings_never_build_a_client() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    writeln!(file, r#"{{"api_key": "sk_file", "timeout_secs": 0}}"#).unwrap();

    let err = ClientSettings::from_file(file.path()).unwrap_err();
    assert!(matches!(err, sellauth::config::ConfigError::ValidationError(_)));
}

#[test]
fn test_config_errors_convert() {
    let err: SellAuthError =
        sellauth::config::ConfigError::KeyNotFound("api_key".to_string()).into();
    assert!(matches!(err, SellAuthError::Config(_)));
}

// =============================================================================
// Store Workflows
// =============================================================================

#[tokio::test]
async fn test_catalog_management_workflow() {
    let server = MockServer::start().await;
    let client = SellAuthClient::with_base_url("sk_test", format!("{}/", server.uri())).unwrap();

    Mock::given(method("POST"))
        .and(path("/v1/shops/5/categories"))
        .and(body_json(json!({"name": "Software"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 30, "name": "Software"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/shops/5/products"))
        .and(body_json(json!({"name": "License", "category_id": 30})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": 101})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/v1/shops/5/products/101/update"))
        .and(body_json(json!({"price": "19.99"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": 101, "price": "19.99"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/v1/shops/5/products/101"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    #[derive(Debug, Deserialize)]
    struct Created {
        id: u64,
    }

    let category: Created = client
        .categories
        .create(5, &json!({"name": "Software"}))
        .await
        .unwrap()
        .into_json()
        .unwrap();
    assert_eq!(category.id, 30);

    let product: Created = client
        .products
        .create(5, &json!({"name": "License", "category_id": category.id}))
        .await
        .unwrap()
        .into_json()
        .unwrap();
    assert_eq!(product.id, 101);

    let updated = client
        .products
        .update(5, product.id, &json!({"price": "19.99"}))
        .await
        .unwrap();
    assert_eq!(updated.as_json().unwrap()["price"], "19.99");

    let deleted = client.products.delete(5, product.id).await.unwrap();
    assert_eq!(deleted, DecodedBody::Raw(String::new()));
}

#[tokio::test]
async fn test_order_support_workflow() {
    let server = MockServer::start().await;
    let client = SellAuthClient::with_base_url("sk_test", server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/shops/5/invoices"))
        .and(query_param("status", "completed"))
        .and(header("authorization", "Bearer sk_test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [{"id": 9}]})))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/5/invoices/9/refund"))
        .respond_with(
            ResponseTemplate::new(422)
                .set_body_json(json!({"message": "Invoice already refunded"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/shops/5/customers/77"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .expect(1)
        .mount(&server)
        .await;

    let invoices = client
        .invoices
        .list(5, &[("status", "completed")])
        .await
        .unwrap();
    assert_eq!(invoices.as_json().unwrap()["data"][0]["id"], 9);

    let err = client.invoices.refund(5, 9).await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP 422: Invoice already refunded");

    let err = client.customers.get(5, 77).await.unwrap_err();
    assert_eq!(err.status_code(), Some(503));
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn test_raw_dispatch_alongside_modules() {
    let server = MockServer::start().await;
    let client = SellAuthClient::with_base_url("sk_test", server.uri()).unwrap();

    Mock::given(method("GET"))
        .and(path("/v1/shops/5/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"revenue": 1200})))
        .expect(2)
        .mount(&server)
        .await;

    let via_module = client.shops.stats(5).await.unwrap();
    let via_dispatcher = client
        .request(ApiMethod::Get, "/v1/shops/5/stats", None, None)
        .await
        .unwrap();

    assert_eq!(via_module, via_dispatcher);
}

#[tokio::test]
async fn test_unreachable_api_reports_transport_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let client = SellAuthClient::with_base_url("sk_test", uri).unwrap();
    let err = client.shops.list().await.unwrap_err();

    assert!(err.is_transport());
    assert!(!err.to_string().contains("HTTP "));
}
