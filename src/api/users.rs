//! Users API handlers

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::user::{validate_age, UserId, UserInput};

use super::state::AppState;
use super::types::{ApiError, UserRequest, UserResponse};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> Result<Response, ApiError> {
    let users = state.users.find_all().await?;

    let response: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    Ok(Json(response).into_response())
}

/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<UserRequest>,
) -> Result<Response, ApiError> {
    validate_age(request.age)?;

    let mut input = UserInput::new();
    input.name = request.name;
    input.age = request.age;

    let user = state.users.save(input).await?;

    let location = format!("/users/{}", user.id());
    let response = (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserResponse::from(&user)),
    );

    Ok(response.into_response())
}

/// GET /users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = UserId::new(id)?;

    match state.users.find_by_id(&id).await? {
        Some(user) => Ok(Json(UserResponse::from(&user)).into_response()),
        None => Err(ApiError::not_found(format!("User '{}' not found", id))),
    }
}

/// PUT /users/{id}
///
/// Full-field overwrite of `name` and `age`. The target must already
/// exist; updates never create users.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UserRequest>,
) -> Result<Response, ApiError> {
    let id = UserId::new(id)?;
    validate_age(request.age)?;

    if state.users.find_by_id(&id).await?.is_none() {
        return Err(ApiError::not_found(format!("User '{}' not found", id)));
    }

    let mut input = UserInput::new().with_id(id);
    input.name = request.name;
    input.age = request.age;

    let user = state.users.save(input).await?;
    Ok(Json(UserResponse::from(&user)).into_response())
}

/// DELETE /users/{id}
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = UserId::new(id)?;

    if state.users.delete_by_id(&id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(ApiError::not_found(format!("User '{}' not found", id)))
    }
}
