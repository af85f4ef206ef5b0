use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::http::{HeaderValue, Method, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::{
    Json, Router,
    routing::{delete, get, post, put},
};
use chrono::{SecondsFormat, Utc};
use serde_json::json;
use tower_http::cors::CorsLayer;

use super::{clients, history};
use crate::auth::PasswordHasher;
use crate::error::{Error, Result};
use crate::store::Store;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub hasher: PasswordHasher,
    /// The only origin allowed to make credentialed cross-origin requests.
    pub allowed_origin: HeaderValue,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, allowed_origin: &str) -> Result<Self> {
        let allowed_origin = HeaderValue::from_str(allowed_origin)
            .map_err(|e| Error::Config(format!("invalid allowed origin '{allowed_origin}': {e}")))?;

        Ok(Self {
            store,
            hasher: PasswordHasher::new(),
            allowed_origin,
        })
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    }))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let start = Instant::now();

    let response = next.run(request).await;

    let latency = start.elapsed();
    let status = response.status();

    tracing::info!(
        "{} {} {} {}ms",
        method,
        uri.path(),
        status.as_u16(),
        latency.as_millis()
    );

    response
}

fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Clients
        .route("/clients", get(clients::list_clients))
        .route("/clients", post(clients::create_client))
        .route("/clients/{id}", put(clients::update_client))
        .route("/clients/{id}", delete(clients::delete_client))
        .route("/clients/{id}/details", get(clients::get_client_details))
        // Pull history
        .route("/clients/{id}/history", get(history::list_history))
        .route("/clients/{id}/history", post(history::add_history))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.allowed_origin.clone());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api_router())
        .layer(middleware::from_fn(log_request))
        .layer(cors)
        .with_state(state)
}
