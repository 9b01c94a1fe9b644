//! Product endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{created, message};
use crate::db::repos::Product;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonObject, RowId};
use crate::http::server::AppState;
use crate::models::{Lookup, Mutation, Operation, ProductInput, Resource};

const RESOURCE: Resource = Resource::Product;

/// GET /products - list all products
async fn list_products(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state
        .products
        .list()
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::List))?;

    Ok(Json(products))
}

/// GET /products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Json<Product>, ApiError> {
    let not_found = || ApiError::not_found(RESOURCE, Lookup::Get);
    let id = id.ok_or_else(not_found)?;

    state
        .products
        .get(id)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Get))?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /products - create a product
async fn create_product(
    State(state): State<Arc<AppState>>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = ProductInput::from_body(&body)?;

    let id = state
        .products
        .create(&input)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Create))?;

    tracing::info!(product_id = id, "product created");
    Ok(created(RESOURCE, id))
}

/// PUT /products/{id} - overwrite a product
async fn update_product(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, ApiError> {
    // Validation comes first, even for ids that cannot exist.
    let input = ProductInput::from_body(&body)?;
    let id = id.ok_or_else(|| ApiError::not_found(RESOURCE, Lookup::Update))?;

    let affected = state
        .products
        .update(id, &input)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Update))?;

    if affected == 0 {
        return Err(ApiError::not_found(RESOURCE, Lookup::Update));
    }

    tracing::info!(product_id = id, "product updated");
    Ok(message(RESOURCE, Mutation::Update))
}

/// DELETE /products/{id} - remove a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Json<Value>, ApiError> {
    let id = id.ok_or_else(|| ApiError::not_found(RESOURCE, Lookup::Delete))?;

    let affected = state
        .products
        .delete(id)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Delete))?;

    if affected == 0 {
        return Err(ApiError::not_found(RESOURCE, Lookup::Delete));
    }

    tracing::info!(product_id = id, "product deleted");
    Ok(message(RESOURCE, Mutation::Delete))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
