use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::location::{CreateLocation, Location, UpdateLocation};
use service::validation::decode;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Location>), ApiError> {
    let Json(body) = body?;
    let input: CreateLocation = decode(body)?;
    let created = state.services.locations.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Location>>, ApiError> {
    Ok(Json(state.services.locations.find_all().await?))
}

pub async fn find_one(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Location>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.services.locations.find_one(id).await?))
}

/// Serves both PATCH and PUT; only supplied fields change.
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Location>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch: UpdateLocation = decode(body)?;
    Ok(Json(state.services.locations.update(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.services.locations.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
