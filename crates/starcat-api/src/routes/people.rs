//! People endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::routes::required;
use crate::AppState;

/// People routes. Creation is registered under the trailing-slash path.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/people", get(list_people))
        .route("/people/", post(create_person))
        .route(
            "/people/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

#[derive(Deserialize)]
struct PersonRequest {
    #[serde(default)]
    name: Option<String>,
}

async fn list_people(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let people = state.store.list_people()?;
    let out: Vec<Value> = people.iter().map(|person| person.projection()).collect();
    Ok(Json(Value::Array(out)))
}

async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    let person = state
        .store
        .get_person(id)?
        .ok_or_else(|| AppError::NotFound("Person not found".into()))?;
    Ok(Json(person.projection()))
}

async fn create_person(
    State(state): State<AppState>,
    body: Option<Json<PersonRequest>>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Some(name) = body.and_then(|Json(body)| required(body.name)) else {
        return Err(AppError::BadRequest("Missing or invalid data".into()));
    };

    let person = state.store.create_person(&name)?;
    Ok((StatusCode::CREATED, Json(person.projection())))
}

async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<PersonRequest>>,
) -> Result<Json<Value>, AppError> {
    if state.store.get_person(id)?.is_none() {
        return Err(AppError::NotFound("Person not found".into()));
    }

    let Some(name) = body.and_then(|Json(body)| required(body.name)) else {
        return Err(AppError::BadRequest("You must change at least one field".into()));
    };

    let person = state.store.update_person(id, &name)?;
    Ok(Json(person.projection()))
}

async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<Value>, AppError> {
    state.store.delete_person(id)?;
    Ok(Json(json!({ "message": "People deleted successfully" })))
}
