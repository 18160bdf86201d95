#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use catalog_api::app;
use catalog_api::config::{ServerConfig, StoreBackend};
use catalog_api::state::AppState;
use catalog_db::MemoryDocumentStore;

/// Build a test `ServerConfig` backed by the in-memory store and pointing
/// at the repository's `frontend/` directory.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        store: StoreBackend::Memory,
        database_url: String::new(),
        database_max_connections: 1,
        request_timeout_secs: 30,
        frontend_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../frontend"),
    }
}

/// The full router plus a handle on the store behind it, so tests can
/// inspect raw stored state.
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryDocumentStore>,
}

/// Build the application exactly as `main.rs` does, over a fresh in-memory
/// store.
pub fn build_test_app() -> TestApp {
    let store = Arc::new(MemoryDocumentStore::new());
    let state = AppState {
        store: store.clone(),
        config: Arc::new(test_config()),
    };
    TestApp {
        router: app::build_router(state),
        store,
    }
}

impl TestApp {
    /// A clone of the router suitable for a single `oneshot` call.
    pub fn app(&self) -> Router {
        self.router.clone()
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::delete(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// Send a raw, possibly malformed, JSON body.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

// ---------------------------------------------------------------------------
// Body helpers
// ---------------------------------------------------------------------------

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

/// Create a document and return its `_id`.
pub async fn create(app: Router, uri: &str, body: serde_json::Value) -> String {
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), 200, "create at {uri} failed");
    body_json(response).await["_id"]
        .as_str()
        .expect("created document has an _id")
        .to_string()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn track_body(title: &str) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "artist": "New Artist",
        "price": 12.99,
        "previewPath": "/p.mp3",
    })
}

pub fn sound_body(name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "price": 1.5,
        "previewPath": "/s.wav",
        "files": [{ "format": "wav", "filePath": "/s.wav" }],
    })
}
