//! User endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required;
use crate::AppState;

/// User routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/:id", get(get_user).put(update_user).delete(delete_user))
}

#[derive(Deserialize)]
struct CreateUserRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

#[derive(Deserialize)]
struct UpdateUserRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let mut out = Vec::new();
    for user in state.store.list_users()? {
        out.push(state.store.user_projection(&user)?);
    }
    Ok(Json(Value::Array(out)))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let user = state
        .store
        .get_user(id)?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    Ok(Json(state.store.user_projection(&user)?))
}

async fn create_user(
    State(state): State<AppState>,
    body: Option<Json<CreateUserRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(Json(body)) = body else {
        return Err(AppError::BadRequest("Missing or invalid data".into()));
    };
    let (Some(email), Some(password)) = (required(body.email), required(body.password)) else {
        return Err(AppError::BadRequest("Missing or invalid data".into()));
    };

    let user = state.store.create_user(&email, &password)?;
    Ok((StatusCode::CREATED, Json(state.store.user_projection(&user)?)))
}

async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<UpdateUserRequest>>,
) -> Result<Json<Value>, AppError> {
    if state.store.get_user(id)?.is_none() {
        return Err(AppError::NotFound("User not found".into()));
    }

    let (email, password) = match body {
        Some(Json(body)) => (required(body.email), required(body.password)),
        None => (None, None),
    };
    if email.is_none() && password.is_none() {
        return Err(AppError::BadRequest("You must change at least one field".into()));
    }

    let user = state
        .store
        .update_user(id, email.as_deref(), password.as_deref())?;
    Ok(Json(state.store.user_projection(&user)?))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_user(id)?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
