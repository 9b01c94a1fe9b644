//! User endpoints
//!
//! Responses carry `id`, `username` and `email` only.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::Value;

use super::{created, message};
use crate::db::repos::User;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonObject, RowId};
use crate::http::server::AppState;
use crate::models::{Lookup, Mutation, Operation, Resource, UserInput};

const RESOURCE: Resource = Resource::User;

/// GET /users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .list()
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::List))?;

    Ok(Json(users))
}

/// GET /users/{id}
async fn get_user(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Json<User>, ApiError> {
    let not_found = || ApiError::not_found(RESOURCE, Lookup::Get);
    let id = id.ok_or_else(not_found)?;

    state
        .users
        .get(id)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Get))?
        .map(Json)
        .ok_or_else(not_found)
}

/// POST /users
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonObject(body): JsonObject,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let input = UserInput::from_body(&body)?;

    let id = state
        .users
        .create(&input)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Create))?;

    tracing::info!(user_id = id, "user created");
    Ok(created(RESOURCE, id))
}

/// PUT /users/{id}
async fn update_user(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
    JsonObject(body): JsonObject,
) -> Result<Json<Value>, ApiError> {
    let input = UserInput::from_body(&body)?;
    let id = id.ok_or_else(|| ApiError::not_found(RESOURCE, Lookup::Update))?;

    let affected = state
        .users
        .update(id, &input)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Update))?;

    if affected == 0 {
        return Err(ApiError::not_found(RESOURCE, Lookup::Update));
    }

    tracing::info!(user_id = id, "user updated");
    Ok(message(RESOURCE, Mutation::Update))
}

/// DELETE /users/{id}
async fn delete_user(
    State(state): State<Arc<AppState>>,
    RowId(id): RowId,
) -> Result<Json<Value>, ApiError> {
    let id = id.ok_or_else(|| ApiError::not_found(RESOURCE, Lookup::Delete))?;

    let affected = state
        .users
        .delete(id)
        .await
        .map_err(ApiError::storage(RESOURCE, Operation::Delete))?;

    if affected == 0 {
        return Err(ApiError::not_found(RESOURCE, Lookup::Delete));
    }

    tracing::info!(user_id = id, "user deleted");
    Ok(message(RESOURCE, Mutation::Delete))
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}
