//! Response shapes produced by the application services.
//!
//! Dates are rendered as `YYYY-MM-DD`; `age` is computed when the response is
//! built, never stored.

use serde::Serialize;

use crate::domain::entities::User;

/// User as returned after create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            dob: user.dob.to_string(),
            name: user.name,
        }
    }
}

/// User with the age derived from the current date, returned by read and list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserWithAgeResponse {
    pub id: i32,
    pub name: String,
    pub dob: String,
    pub age: u32,
}

impl From<User> for UserWithAgeResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            age: user.age(),
            dob: user.dob.to_string(),
            name: user.name,
        }
    }
}

/// One page of users plus the totals needed to page through the rest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginatedUsersResponse {
    pub users: Vec<UserWithAgeResponse>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
    pub total_pages: u32,
}
