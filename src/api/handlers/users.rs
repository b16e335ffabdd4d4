//! Handlers for user management endpoints.
//!
//! Handlers decode and validate input, call [`crate::application::services::UserService`]
//! and decide the status code. Not-found answers 404 only on direct lookup;
//! for update and delete it is reported as a generic failure.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::user::{
    CreateUserRequest, ListUsersQuery, PaginatedUsersResponse, UpdateUserRequest, UserResponse,
    UserWithAgeResponse,
};
use crate::domain::entities::NewUser;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /api/v1/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada", "dob": "2000-01-01" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not valid JSON or fails validation.
/// Returns 500 on database errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;
    let new_user = NewUser::try_from(payload)?;

    let user = state
        .user_service
        .create_user(new_user)
        .await
        .map_err(AppError::fold_not_found)?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Retrieves a user with their current age.
///
/// # Endpoint
///
/// `GET /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 404 if the user does not exist.
/// Returns 500 on database errors.
pub async fn get_user_handler(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<UserWithAgeResponse>, AppError> {
    let Path(id) = id?;

    let user = state.user_service.get_user_by_id(id).await?;

    Ok(Json(user))
}

/// Lists users, one page at a time.
///
/// # Endpoint
///
/// `GET /api/v1/users?page=1&page_size=10`
///
/// `page` defaults to 1 and `page_size` to 10 (capped at 100). Out-of-range or
/// non-numeric values fall back to these defaults.
///
/// # Errors
///
/// Returns 500 on database errors.
pub async fn list_users_handler(
    State(state): State<AppState>,
    query: Result<Query<ListUsersQuery>, QueryRejection>,
) -> Result<Json<PaginatedUsersResponse>, AppError> {
    let Query(query) = query?;

    let page = state
        .user_service
        .list_users(query.page, query.page_size)
        .await
        .map_err(AppError::fold_not_found)?;

    Ok(Json(page))
}

/// Replaces a user's name and date of birth.
///
/// # Endpoint
///
/// `PUT /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer, the body is not valid JSON, or
/// validation fails.
/// Returns 500 if the user does not exist or on database errors.
pub async fn update_user_handler(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;
    let update = NewUser::try_from(payload)?;

    let user = state
        .user_service
        .update_user(id, update)
        .await
        .map_err(AppError::fold_not_found)?;

    Ok(Json(user))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /api/v1/users/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 500 if the user does not exist or on database errors.
pub async fn delete_user_handler(
    id: Result<Path<i32>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;

    state
        .user_service
        .delete_user(id)
        .await
        .map_err(AppError::fold_not_found)?;

    Ok(StatusCode::NO_CONTENT)
}
