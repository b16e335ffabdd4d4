//! Business logic services for the application layer.

pub mod user_service;

pub use user_service::{UserService, UserServiceImpl};

#[cfg(test)]
pub use user_service::MockUserService;
