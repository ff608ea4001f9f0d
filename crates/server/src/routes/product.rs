use axum::{
    extract::{rejection::{JsonRejection, PathRejection}, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use service::product::{CreateProduct, Product, UpdateProduct};
use service::validation::decode;
use uuid::Uuid;

use crate::errors::ApiError;
use crate::state::ServerState;

pub async fn create(
    State(state): State<ServerState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), ApiError> {
    let Json(body) = body?;
    let input: CreateProduct = decode(body)?;
    let created = state.services.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn find_all(State(state): State<ServerState>) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.services.products.find_all().await?))
}

pub async fn find_one(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.services.products.find_one(id).await?))
}

/// Serves both PATCH and PUT; only supplied fields change.
pub async fn update(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Product>, ApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    let patch: UpdateProduct = decode(body)?;
    Ok(Json(state.services.products.update(id, patch).await?))
}

pub async fn remove(
    State(state): State<ServerState>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.services.products.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
