#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use gsos_clients::config::DatabaseConfig;
use gsos_clients::server::{AppState, create_router};
use gsos_clients::store::{SqliteStore, Store};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ALLOWED_ORIGIN: &str = "http://localhost:3000";

pub struct TestApp {
    // Keeps the database file alive for the duration of the test.
    _temp_dir: TempDir,
    pub router: Router,
    pub store: Arc<SqliteStore>,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let config = DatabaseConfig {
            pool_size: 4,
            ..DatabaseConfig::new(temp_dir.path().join("clients.db"))
        };

        let store = Arc::new(SqliteStore::new(config).expect("open store"));
        store.initialize().expect("initialize schema");

        let state =
            Arc::new(AppState::new(store.clone(), ALLOWED_ORIGIN).expect("build app state"));

        Self {
            _temp_dir: temp_dir,
            router: create_router(state),
            store,
        }
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(self.router.clone(), method, uri, body).await
    }

    /// Creates a client through the API and returns its id.
    pub async fn create_client(&self, name: &str, password: &str) -> i64 {
        let (status, body) = self
            .post(
                "/api/clients",
                serde_json::json!({
                    "client_name": name,
                    "domain_url": format!("https://{name}.example.com"),
                    "client_id": format!("ext-{name}"),
                    "password": password,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
        body["id"].as_i64().expect("client id")
    }
}

/// Sends a request through a router and returns the status code and parsed
/// JSON body (`null` when the body is not JSON).
pub async fn send(
    router: Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let request = match body {
        Some(body) => Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string())),
        None => Request::builder().method(method).uri(uri).body(Body::empty()),
    }
    .expect("build request");

    let response = router.oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
