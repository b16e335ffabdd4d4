//! User repository implementations.
//!
//! # Repositories
//!
//! - [`PgUserRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryUserRepository`] - process-local storage for development and tests

pub mod memory_user_repository;
pub mod pg_user_repository;

pub use memory_user_repository::InMemoryUserRepository;
pub use pg_user_repository::PgUserRepository;
