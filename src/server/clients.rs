use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::server::AppState;
use crate::server::dto::ClientRequest;
use crate::server::response::{
    ApiError, CreatedResponse, MessageResponse, StoreOptionExt, StoreResultExt,
};

pub async fn list_clients(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let clients = state
        .store
        .list_clients()
        .api_err("Failed to list clients")?;

    Ok::<_, ApiError>(Json(clients))
}

pub async fn get_client_details(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let client = state
        .store
        .get_client(id)
        .api_err("Failed to get client")?
        .or_not_found("Client not found")?;

    Ok::<_, ApiError>(Json(client))
}

pub async fn create_client(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClientRequest>,
) -> impl IntoResponse {
    let (fields, password) = req.into_parts();

    let credential = password
        .map(|p| state.hasher.credential(&p))
        .transpose()
        .api_err("Failed to hash password")?;

    let id = state
        .store
        .create_client(&fields, credential.as_ref())
        .api_err("Failed to create client")?;

    tracing::info!("Created client {id}");

    Ok::<_, ApiError>((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Client added successfully",
        }),
    ))
}

pub async fn update_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<ClientRequest>,
) -> impl IntoResponse {
    let (fields, password) = req.into_parts();

    let credential = password
        .filter(|p| !p.is_empty())
        .map(|p| state.hasher.credential(&p))
        .transpose()
        .api_err("Failed to hash password")?;

    state
        .store
        .update_client(id, &fields, credential.as_ref())
        .api_err("Failed to update client")?;

    Ok::<_, ApiError>(Json(MessageResponse::new("Client updated successfully")))
}

pub async fn delete_client(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    let existed = state
        .store
        .delete_client(id)
        .api_err("Failed to delete client")?;

    if existed {
        tracing::info!("Deleted client {id}");
    }

    Ok::<_, ApiError>(Json(MessageResponse::new("Client deleted successfully")))
}
