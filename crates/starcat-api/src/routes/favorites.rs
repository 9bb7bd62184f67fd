//! Favorite endpoints.
//!
//! Favorites are addressed by their target (person or planet) rather than
//! by their own id; the owning user travels in the request body.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::AppState;

/// Favorite routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users/favorites", get(users_with_favorites))
        .route(
            "/favorite/planet/:planet_id",
            post(add_favorite_planet).delete(delete_favorite_planet),
        )
        .route(
            "/favorite/people/:people_id",
            post(add_favorite_person).delete(delete_favorite_person),
        )
}

#[derive(Deserialize)]
struct AddFavoriteRequest {
    #[serde(default)]
    user_id: Option<u64>,
}

async fn users_with_favorites(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let users = state.store.users_with_favorites()?;

    if users.is_empty() {
        return Ok(Json(json!({ "message": "No users with favorites found" })));
    }
    Ok(Json(Value::Array(users)))
}

async fn add_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<u64>,
    body: Option<Json<AddFavoriteRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(user_id) = body.and_then(|Json(body)| body.user_id) else {
        return Err(AppError::NotFound(
            "The selected user does not exist in the database".into(),
        ));
    };

    state.store.add_favorite_planet(planet_id, user_id)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Favorite planet added successfully" })),
    ))
}

async fn add_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<u64>,
    body: Option<Json<AddFavoriteRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(user_id) = body.and_then(|Json(body)| body.user_id) else {
        return Err(AppError::NotFound(
            "The selected user does not exist in the database".into(),
        ));
    };

    state.store.add_favorite_person(people_id, user_id)?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Favorite people added successfully" })),
    ))
}

async fn delete_favorite_planet(
    State(state): State<AppState>,
    Path(planet_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.remove_favorite_by_planet(planet_id)?;
    Ok(Json(json!({ "message": "Favorite planet deleted successfully" })))
}

async fn delete_favorite_person(
    State(state): State<AppState>,
    Path(people_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.remove_favorite_by_person(people_id)?;
    Ok(Json(json!({ "message": "Favorite people deleted successfully" })))
}
