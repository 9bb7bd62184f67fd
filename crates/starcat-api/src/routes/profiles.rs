//! Profile endpoints.
//!
//! Profiles are addressed by their own id except for creation and deletion,
//! which key on the owning user.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required;
use crate::AppState;

/// Profile routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profiles", get(list_profiles))
        .route(
            "/profiles/:id",
            get(get_profile).post(create_profile).put(update_profile),
        )
        .route("/profileseee/:user_id", delete(delete_profile))
}

#[derive(Deserialize)]
struct CreateProfileRequest {
    #[serde(default)]
    bio: Option<String>,
}

#[derive(Deserialize)]
struct UpdateProfileRequest {
    #[serde(default)]
    bio: Option<String>,
}

async fn list_profiles(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let profiles = state.store.list_profiles()?;
    let out: Vec<Value> = profiles.iter().map(|profile| profile.projection()).collect();
    Ok(Json(Value::Array(out)))
}

async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let profile = state
        .store
        .get_profile(id)?
        .ok_or_else(|| AppError::NotFound("Profile not found".into()))?;
    Ok(Json(profile.projection()))
}

/// The path id is the owning user's id. The owner is not checked for
/// existence before the insert.
async fn create_profile(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
    body: Option<Json<CreateProfileRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(Json(CreateProfileRequest { bio: Some(bio) })) = body else {
        return Err(AppError::BadRequest("Missing data".into()));
    };

    let profile = state.store.create_profile(user_id, &bio)?;
    Ok((StatusCode::CREATED, Json(profile.projection())))
}

async fn update_profile(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<UpdateProfileRequest>>,
) -> Result<Json<Value>, AppError> {
    if state.store.get_profile(id)?.is_none() {
        return Err(AppError::NotFound("Profile not found".into()));
    }

    let Some(bio) = body.and_then(|Json(body)| required(body.bio)) else {
        return Err(AppError::BadRequest("You must change at least one field".into()));
    };

    let profile = state.store.update_profile(id, &bio)?;
    Ok(Json(profile.projection()))
}

/// Delete a profile by its owning user's id.
async fn delete_profile(
    State(state): State<AppState>,
    Path(user_id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_profile_for_user(user_id)?;
    Ok(Json(json!({ "message": "Profile deleted successfully" })))
}
