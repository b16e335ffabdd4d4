//! Domain layer containing business entities and logic.
//!
//! This module holds the user model and the rules that do not depend on
//! storage or transport: birth date parsing, age derivation and page
//! arithmetic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`birth_date`] - Calendar date of birth and age calculation
//! - [`pagination`] - Page normalization and bounds
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod birth_date;
pub mod entities;
pub mod pagination;
pub mod repositories;
