//! Application layer services implementing business logic.
//!
//! Services coordinate repository calls and apply the business rules: age
//! derivation, pagination and response assembly. They consume repository
//! traits and give HTTP handlers a transport-independent API.
//!
//! # Available Services
//!
//! - [`services::user_service::UserService`] - User CRUD and paged listing
//!
//! Services return the types in [`responses`]; the API layer serializes them as is.

pub mod responses;
pub mod services;
