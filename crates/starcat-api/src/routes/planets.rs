//! Planet endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required;
use crate::AppState;

/// Planet routes. Updates are registered under the singular path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/planets", get(list_planets).post(create_planet))
        .route("/planets/:id", get(get_planet).delete(delete_planet))
        .route("/planet/:id", put(update_planet))
}

#[derive(Deserialize)]
struct PlanetRequest {
    #[serde(default)]
    name: Option<String>,
}

async fn list_planets(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let planets = state.store.list_planets()?;
    let out: Vec<Value> = planets.iter().map(|planet| planet.projection()).collect();
    Ok(Json(Value::Array(out)))
}

async fn get_planet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let planet = state
        .store
        .get_planet(id)?
        .ok_or_else(|| AppError::NotFound("Planet not found".into()))?;
    Ok(Json(planet.projection()))
}

async fn create_planet(
    State(state): State<AppState>,
    body: Option<Json<PlanetRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(name) = body.and_then(|Json(body)| required(body.name)) else {
        return Err(AppError::BadRequest("Missing or invalid data".into()));
    };

    let planet = state.store.create_planet(&name)?;
    Ok((StatusCode::CREATED, Json(planet.projection())))
}

async fn update_planet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<PlanetRequest>>,
) -> Result<Json<Value>, AppError> {
    if state.store.get_planet(id)?.is_none() {
        return Err(AppError::NotFound("Planet not found".into()));
    }

    let Some(name) = body.and_then(|Json(body)| required(body.name)) else {
        return Err(AppError::BadRequest("You must change at least one field".into()));
    };

    let planet = state.store.update_planet(id, &name)?;
    Ok(Json(planet.projection()))
}

async fn delete_planet(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_planet(id)?;
    Ok(Json(json!({ "message": "Planet deleted successfully" })))
}
