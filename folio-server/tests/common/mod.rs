#![allow(dead_code)]

//! Test infrastructure for folio-server API tests

use folio_db::{ConnectionManager, ConnectionSettings};
use folio_server::AppState;

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;

/// An AppState backed by a fresh file-based database in a temp dir.
/// Keep the context alive for the duration of the test; dropping it
/// removes the database file.
pub struct TestContext {
    pub state: AppState,
    _dir: tempfile::TempDir,
}

pub fn create_test_context() -> TestContext {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("test.db").display());

    let db = Arc::new(ConnectionManager::new(ConnectionSettings::new(url)));

    TestContext {
        state: AppState { db },
        _dir: dir,
    }
}

/// Build a JSON request
pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a bodiless request
pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
