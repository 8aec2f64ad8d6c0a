#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Builds the REAL kernel router over an in-memory document store, so
//! tests exercise the same handlers, services, and cache paths the
//! server runs in production; only the store backend differs.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use mandap_kernel::docstore::{DocumentStore, MemoryStore};
use mandap_kernel::routes;
use mandap_kernel::state::AppState;
use mandap_kernel::upload::LocalImageStorage;

/// Boundary used by the multipart helpers.
const BOUNDARY: &str = "mandap-test-boundary";

/// Test application over the real router and an in-memory store.
pub struct TestApp {
    router: Router,
    pub state: AppState,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// Create a fresh app with empty collections.
    pub fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let images = Arc::new(LocalImageStorage::new(
            std::env::temp_dir().join("mandap-test-uploads"),
            "/files",
        ));
        let state = AppState::with_store(store.clone() as Arc<dyn DocumentStore>, images);
        let router = routes::router().with_state(state.clone());

        Self {
            router,
            state,
            store,
        }
    }

    /// Issue a request and return status plus parsed JSON body.
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let request = builder.body(body).expect("valid request");
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("response body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };

        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn patch_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Issue a multipart request carrying a `data` JSON part.
    pub async fn send_multipart(
        &self,
        method: Method,
        uri: &str,
        data: Value,
    ) -> (StatusCode, Value) {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"data\"\r\n\r\n\
             {data}\r\n\
             --{BOUNDARY}--\r\n"
        );

        let request = Request::builder()
            .method(method)
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .expect("valid request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router response");

        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("response body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }

    pub async fn post_multipart(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.send_multipart(Method::POST, uri, data).await
    }

    pub async fn put_multipart(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.send_multipart(Method::PUT, uri, data).await
    }
}

/// Assert the success envelope shape: statusCode mirror, "NO" sentinel,
/// empty errorMessage.
pub fn assert_success_envelope(status: StatusCode, body: &Value) {
    assert_eq!(body["statusCode"], status.as_u16());
    assert_eq!(body["errorCode"], "NO");
    assert_eq!(body["errorMessage"], "");
}

/// Assert the error envelope shape for the given code.
pub fn assert_error_envelope(status: StatusCode, body: &Value, code: &str) {
    assert_eq!(body["statusCode"], status.as_u16());
    assert_eq!(body["errorCode"], code);
    assert_ne!(body["errorMessage"], "");
}
