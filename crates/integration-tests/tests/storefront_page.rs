//! Integration tests for the storefront product page.
//!
//! These tests require:
//! - The storefront running (cargo run -p camiseta-storefront)
//! - For the delivery tests, outbound access to viacep.com.br
//!
//! Run with: cargo test -p camiseta-integration-tests -- --ignored

use camiseta_core::Cep;
use reqwest::{Client, StatusCode};

/// Base URL for the storefront (configurable via environment).
fn base_url() -> String {
    std::env::var("CAMISETA_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

fn client() -> Client {
    Client::new()
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_health() {
    let resp = client()
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to reach storefront");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read response"), "ok");
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_product_page_renders() {
    let resp = client()
        .get(base_url())
        .send()
        .await
        .expect("Failed to get product page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");

    assert!(body.contains("Premium T-Shirt"));
    assert!(body.contains("Size"));
    assert!(body.contains("Color"));
    assert!(body.contains("Check Delivery Availability"));
    assert!(body.contains("Add to Cart"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_size_selection_updates_price() {
    let base = base_url();

    let resp = client()
        .post(format!("{base}/select/size"))
        .form(&[("size", "Large")])
        .send()
        .await
        .expect("Failed to select size");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("$249.99"));
}

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_color_selection_switches_image() {
    let base = base_url();

    let resp = client()
        .post(format!("{base}/select/color"))
        .form(&[("color", "Black")])
        .send()
        .await
        .expect("Failed to select color");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("camisa_preta.jpg"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and ViaCEP access"]
async fn test_delivery_lookup_resolves_known_cep() {
    let base = base_url();

    // Avenida Paulista; stable since the nineties
    let cep = Cep::parse("01310-100").expect("valid CEP");
    let resp = client()
        .post(format!("{base}/cep"))
        .form(&[("cep", cep.formatted())])
        .send()
        .await
        .expect("Failed to post CEP");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("Paulista"));
    assert!(body.contains("SP"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and ViaCEP access"]
async fn test_delivery_lookup_reports_unknown_cep() {
    let base = base_url();

    let resp = client()
        .post(format!("{base}/cep"))
        .form(&[("cep", "00000000")])
        .send()
        .await
        .expect("Failed to post CEP");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read response");
    assert!(body.contains("CEP not found"));
}
