use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::PullHistoryRequest;
use crate::server::response::{ApiError, MessageResponse, StoreResultExt};
use crate::types::NewPullHistory;

pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let history = state
        .store
        .list_pull_history(id)
        .api_err("Failed to list pull history")?;

    Ok::<_, ApiError>(Json(history))
}

pub async fn add_history(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<PullHistoryRequest>,
) -> impl IntoResponse {
    let entry = NewPullHistory::from(req);

    state
        .store
        .append_pull_history(id, &entry)
        .api_err("Failed to add pull history")?;

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(MessageResponse::new("Pull history added successfully")),
    ))
}
