#![allow(clippy::unwrap_used, clippy::expect_used)]
//! HTTP boundary integration tests.
//!
//! Drives the real router over the in-memory store and checks the wire
//! envelope contract: statusCode mirrors HTTP status, `errorCode: "NO"`
//! on success, taxonomy codes on failure.

mod common;

use axum::http::StatusCode;
use common::{assert_error_envelope, assert_success_envelope, TestApp};
use mandap_test_utils::{admin, approval_request, banquet, enquiry, vendor};
use serde_json::json;

// -------------------------------------------------------------------------
// Listings
// -------------------------------------------------------------------------

#[tokio::test]
async fn banquet_create_then_list() {
    let app = TestApp::new();

    let (status, body) = app
        .post_multipart("/api/banquet", banquet("Rosewood Gardens").city("Pune").json())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_success_envelope(status, &body);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.get("/api/banquets").await;
    assert_eq!(status, StatusCode::OK);
    assert_success_envelope(status, &body);
    let listings = body["data"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["id"], id.as_str());
    assert_eq!(listings[0]["city"], "Pune");
}

#[tokio::test]
async fn inactive_banquets_never_reach_the_listing() {
    let app = TestApp::new();

    app.post_multipart("/api/banquet", banquet("Open Venue").json())
        .await;
    app.post_multipart("/api/banquet", banquet("Closed Venue").inactive().json())
        .await;

    let (_, body) = app.get("/api/banquets").await;
    let listings = body["data"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["name"], "Open Venue");
}

#[tokio::test]
async fn listing_filters_and_ordering_apply() {
    let app = TestApp::new();

    for payload in [
        banquet("Lotus Banquet").city("Pune").capacity(300).json(),
        banquet("Meadow Lane").city("Pune").capacity(150).premium().json(),
        banquet("Harbour View").city("Mumbai").capacity(500).json(),
        banquet("Crown Hall").city("Pune").capacity(450).featured().json(),
    ] {
        app.post_multipart("/api/banquet", payload).await;
    }

    let (status, body) = app.get("/api/banquets?city=Pune&minCapacity=200").await;
    assert_eq!(status, StatusCode::OK);

    // Featured leads, then normal, premium excluded by capacity.
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Crown Hall", "Lotus Banquet"]);
}

#[tokio::test]
async fn unknown_facet_key_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/banquets?colour=red").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(status, &body, "BAD_REQUEST");
}

#[tokio::test]
async fn facets_come_from_the_full_active_collection() {
    let app = TestApp::new();

    for payload in [
        banquet("A").city("Delhi").price(0).json(),
        banquet("B").city("Pune").price(5000).json(),
        banquet("C").city("Pune").price(15000).json(),
    ] {
        app.post_multipart("/api/banquet", payload).await;
    }

    let (status, body) = app.get("/api/banquets/facets").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["cities"], json!(["Delhi", "Pune"]));

    let labels: Vec<&str> = body["data"]["priceRanges"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["₹5000-₹10000", "₹10001-₹15000", "> ₹15000"]);
}

#[tokio::test]
async fn banquet_update_via_multipart_merges_fields() {
    let app = TestApp::new();

    let (_, body) = app
        .post_multipart("/api/banquet", banquet("Rosewood Gardens").city("Pune").json())
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .put_multipart("/api/banquet", json!({"id": id, "city": "Jaipur"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["city"], "Jaipur");
    assert_eq!(body["data"]["name"], "Rosewood Gardens");
}

#[tokio::test]
async fn missing_banquet_is_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/banquet?id=nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_envelope(status, &body, "NOT_FOUND");
}

#[tokio::test]
async fn absent_id_is_bad_request() {
    let app = TestApp::new();

    let (status, body) = app.get("/api/banquet").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(status, &body, "BAD_REQUEST");

    let (status, body) = app.delete("/api/vendor").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(status, &body, "BAD_REQUEST");
}

#[tokio::test]
async fn vendor_category_filter() {
    let app = TestApp::new();

    for payload in [
        vendor("Lens & Light").category("Photography").json(),
        vendor("Blossom Decor").category("Decor").json(),
    ] {
        app.post_multipart("/api/vendor", payload).await;
    }

    let (status, body) = app.get("/api/vendors?category=Photography").await;
    assert_eq!(status, StatusCode::OK);
    let listings = body["data"].as_array().unwrap();
    assert_eq!(listings.len(), 1);
    assert_eq!(listings[0]["name"], "Lens & Light");
}

// -------------------------------------------------------------------------
// Admins and audit
// -------------------------------------------------------------------------

#[tokio::test]
async fn admin_crud_and_audit_round_trip() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/admin", admin("Asha", "asha@example.com").json())
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .patch_json(
            "/api/admin",
            json!({"adminId": id, "action": "approve_vendor", "target": "v-1"}),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_success_envelope(status, &body);
    assert_eq!(body["data"]["action"], "approve_vendor");

    let (status, body) = app.get(&format!("/api/admin/actions?id={id}")).await;
    assert_eq!(status, StatusCode::OK);
    let entries = body["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["target"], "v-1");
}

#[tokio::test]
async fn superadmin_delete_is_forbidden_over_http() {
    let app = TestApp::new();

    let (_, body) = app
        .post_json("/api/admin", admin("Root", "root@example.com").superadmin().json())
        .await;
    let id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/api/admin?id={id}")).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_error_envelope(status, &body, "FORBIDDEN");
}

// -------------------------------------------------------------------------
// Approvals
// -------------------------------------------------------------------------

#[tokio::test]
async fn approval_flow_over_http() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/approval", approval_request("Blossom Decor", "hello@blossom.in"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["data"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["data"]["status"], "pending");

    let (status, body) = app
        .patch_json("/api/approval", json!({"id": id, "approve": true, "notes": "ok"}))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "approved");
    assert_eq!(body["data"]["notes"], "ok");

    // Second decision conflicts.
    let (status, body) = app
        .patch_json("/api/approval", json!({"id": id, "approve": false}))
        .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_envelope(status, &body, "CONFLICT");

    // Status filter sees the processed request.
    let (_, body) = app.get("/api/approvals?status=approved").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
    let (_, body) = app.get("/api/approvals?status=pending").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

// -------------------------------------------------------------------------
// Enquiries
// -------------------------------------------------------------------------

#[tokio::test]
async fn enquiry_submission_and_listing_filter() {
    let app = TestApp::new();

    let (_, body) = app
        .post_multipart("/api/banquet", banquet("Rosewood Gardens").json())
        .await;
    let listing_id = body["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .post_json("/api/enquiry", enquiry(&listing_id, "banquet"))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_success_envelope(status, &body);

    let (_, body) = app
        .get(&format!("/api/enquiries?listingId={listing_id}"))
        .await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (_, body) = app.get("/api/enquiries?listingId=other").await;
    assert!(body["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn enquiry_with_bad_listing_kind_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .post_json("/api/enquiry", enquiry("some-listing", "florist"))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_envelope(status, &body, "BAD_REQUEST");
}

// -------------------------------------------------------------------------
// Blog
// -------------------------------------------------------------------------

#[tokio::test]
async fn blog_publishes_and_resolves_slugs() {
    let app = TestApp::new();

    let (status, _) = app
        .post_json(
            "/api/blogpost",
            json!({
                "title": "Ten Questions for Your Caterer",
                "slug": "ten-questions-caterer",
                "body": "Ask about service staff ratios first.",
                "published": true
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    app.post_json(
        "/api/blogpost",
        json!({
            "title": "Draft",
            "slug": "draft-post",
            "body": "unfinished",
            "published": false
        }),
    )
    .await;

    let (_, body) = app.get("/api/blog").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 1);

    let (status, body) = app.get("/api/blog?slug=ten-questions-caterer").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "Ten Questions for Your Caterer");

    let (status, _) = app.get("/api/blog?slug=draft-post").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Admin view still lists the draft.
    let (_, body) = app.get("/api/blogposts").await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);
}

// -------------------------------------------------------------------------
// Health
// -------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_store_status() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], true);
}
