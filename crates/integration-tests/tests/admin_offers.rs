//! Integration tests for the offer dialogs' save path.
//!
//! These tests require:
//! - The console running (cargo run -p souq-admin)
//! - A reachable platform API behind it
//!
//! Run with: cargo test -p souq-integration-tests -- --ignored

use reqwest::StatusCode;
use reqwest::multipart::Form;
use serde_json::Value;
use souq_integration_tests::{console_base_url, console_client};

/// Multipart form for a delivery offer (the simplest valid draft).
fn delivery_offer_form(vendor_id: &str) -> Form {
    Form::new()
        .text("kind", "delivery")
        .text("vendor_id", vendor_id.to_string())
        .text("discount_type", "percentage")
        .text("discount_value", "15")
        .text("start_date", "2026-01-01")
        .text("end_date", "2026-01-31")
}

// ============================================================================
// List & Pagination Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running console and platform API"]
async fn test_offer_list_pagination() {
    let client = console_client();
    let base_url = console_base_url();

    let resp = client
        .get(format!("{base_url}/offers"))
        .send()
        .await
        .expect("Failed to get offers list");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse page");
    assert!(body["items"].is_array());
    assert!(body["page"].is_number());

    // Keyword search narrows the same endpoint
    let resp = client
        .get(format!("{base_url}/offers?q=package&page=1"))
        .send()
        .await
        .expect("Failed to search offers");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Submission Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running console and platform API"]
async fn test_delivery_offer_roundtrip() {
    let client = console_client();
    let base_url = console_base_url();

    let vendor_id = std::env::var("TEST_VENDOR_ID").unwrap_or_else(|_| "v-1".to_string());
    let resp = client
        .post(format!("{base_url}/offers"))
        .multipart(delivery_offer_form(&vendor_id))
        .send()
        .await
        .expect("Failed to create delivery offer");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse save response");
    assert_eq!(body["notification"]["kind"], "success");
    let offer_id = body["offer"]["id"].as_str().expect("offer id").to_string();

    // Delete through the kind-split transport
    let resp = client
        .delete(format!("{base_url}/offers/{offer_id}?kind=delivery"))
        .send()
        .await
        .expect("Failed to delete delivery offer");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires running console and platform API"]
async fn test_empty_package_is_rejected_with_notification() {
    let client = console_client();
    let base_url = console_base_url();

    let vendor_id = std::env::var("TEST_VENDOR_ID").unwrap_or_else(|_| "v-1".to_string());
    let form = Form::new()
        .text("kind", "package")
        .text("name_ar", "وجبة التوفير")
        .text("vendor_id", vendor_id)
        .text("bundle_price", "50")
        .text("start_date", "2026-01-01")
        .text("end_date", "2026-01-31");

    let resp = client
        .post(format!("{base_url}/offers"))
        .multipart(form)
        .send()
        .await
        .expect("Failed to post package offer");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse notification");
    assert_eq!(body["kind"], "error");
    assert_eq!(body["message"], "at least one product required");
}

#[tokio::test]
#[ignore = "Requires running console and platform API"]
async fn test_offer_option_lists() {
    let client = console_client();
    let base_url = console_base_url();

    let resp = client
        .get(format!("{base_url}/offers/options/vendors"))
        .send()
        .await
        .expect("Failed to get vendor options");
    assert_eq!(resp.status(), StatusCode::OK);
    let vendors: Value = resp.json().await.expect("Failed to parse vendors");
    let vendors = vendors.as_array().expect("vendor array");

    if let Some(first) = vendors.first() {
        let vendor_id = first["id"].as_str().expect("vendor id");
        let resp = client
            .get(format!(
                "{base_url}/offers/options/products?vendor_id={vendor_id}"
            ))
            .send()
            .await
            .expect("Failed to get product options");
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
