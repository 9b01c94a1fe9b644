//! Route handlers organized by resource

pub mod root;
pub mod products;
pub mod users;

use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::models::{Mutation, Resource};

/// `{ "message": ... }` body for successful update/delete.
pub(crate) fn message(resource: Resource, mutation: Mutation) -> Json<Value> {
    Json(json!({ "message": mutation.success_message(resource) }))
}

/// 201 with `{ "message": ..., "<r>Id": id }`.
pub(crate) fn created(resource: Resource, id: i64) -> (StatusCode, Json<Value>) {
    let mut body = serde_json::Map::new();
    body.insert(
        "message".to_owned(),
        Value::from(Mutation::Create.success_message(resource)),
    );
    body.insert(resource.id_key().to_owned(), Value::from(id));
    (StatusCode::CREATED, Json(Value::Object(body)))
}
