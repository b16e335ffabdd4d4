//! Core domain entities.
//!
//! Entities are plain data structures. Creation input lives in a separate
//! `New*` struct, following the same pattern for every entity.
//!
//! # Entity Types
//!
//! - [`User`] - A stored user with a date of birth

pub mod user;

pub use user::{NewUser, User};
