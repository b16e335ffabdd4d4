//! API route configuration.

use crate::api::handlers::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    method_not_allowed_handler, update_user_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// User routes, mounted under `/api/v1`.
///
/// # Endpoints
///
/// - `POST   /users`        - Create a user
/// - `GET    /users`        - List users (paginated)
/// - `GET    /users/{id}`   - Get a user with their age
/// - `PUT    /users/{id}`   - Replace a user's name and date of birth
/// - `DELETE /users/{id}`   - Delete a user
///
/// Any other method on these paths answers 405 with the JSON error body.
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users",
            get(list_users_handler).post(create_user_handler),
        )
        .route(
            "/users/{id}",
            get(get_user_handler)
                .put(update_user_handler)
                .delete(delete_user_handler),
        )
        .method_not_allowed_fallback(method_not_allowed_handler)
}
