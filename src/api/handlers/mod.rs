//! HTTP request handlers for API endpoints.

pub mod fallback;
pub mod health;
pub mod users;

pub use fallback::{method_not_allowed_handler, not_found_handler};
pub use health::health_handler;
pub use users::{
    create_user_handler, delete_user_handler, get_user_handler, list_users_handler,
    update_user_handler,
};
