//! User entity.

use crate::domain::birth_date::BirthDate;

/// A persisted user.
///
/// `id` is assigned by the store on creation and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub dob: BirthDate,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i32, name: String, dob: BirthDate) -> Self {
        Self { id, name, dob }
    }

    /// Current age, computed fresh on every call.
    pub fn age(&self) -> u32 {
        self.dob.age()
    }
}

/// Input data for creating a user, or replacing the fields of an existing one.
///
/// Updates are full replacements, so the same shape serves both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub dob: BirthDate,
}
