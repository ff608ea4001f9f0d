use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::pizza::{CreatePizza, Pizza, UpdatePizza};
use service::validation::decode;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Pizza>), ApiError> {
    let Json(body) = body?;
    let input: CreatePizza = decode(body)?;
    let created = state.services.pizzas.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Pizza>>, ApiError> {
    Ok(Json(state.services.pizzas.find_all().await?))
}

pub async fn find_one(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Pizza>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.services.pizzas.find_one(id).await?))
}

/// Serves both PATCH and PUT; only supplied fields change.
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Pizza>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch: UpdatePizza = decode(body)?;
    Ok(Json(state.services.pizzas.update(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.services.pizzas.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
