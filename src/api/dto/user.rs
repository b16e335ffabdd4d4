//! DTOs for the user endpoints.

use serde::Deserialize;
use serde_json::json;
use serde_with::{DefaultOnError, DisplayFromStr, serde_as};
use validator::{Validate, ValidationError};

use crate::domain::birth_date::BirthDate;
use crate::domain::entities::NewUser;
use crate::error::AppError;

pub use crate::application::responses::{
    PaginatedUsersResponse, UserResponse, UserWithAgeResponse,
};

/// Request body for `POST /api/v1/users`.
///
/// Fields are optional at the serde level so that a missing field is
/// reported as a validation error ("is required") instead of a body parse
/// failure.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(required, length(max = 255), custom(function = "validate_name"))]
    pub name: Option<String>,

    /// Date of birth as `YYYY-MM-DD`.
    #[validate(required, custom(function = "validate_dob"))]
    pub dob: Option<String>,
}

/// Request body for `PUT /api/v1/users/{id}`.
///
/// Updates replace both fields; there are no partial updates.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(required, length(max = 255), custom(function = "validate_name"))]
    pub name: Option<String>,

    #[validate(required, custom(function = "validate_dob"))]
    pub dob: Option<String>,
}

/// Empty names count as missing.
fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn validate_dob(dob: &str) -> Result<(), ValidationError> {
    dob.parse::<BirthDate>()
        .map(|_| ())
        .map_err(|_| ValidationError::new("date"))
}

/// Builds the domain input from already-validated request fields.
fn to_new_user(name: Option<String>, dob: Option<String>) -> Result<NewUser, AppError> {
    let (name, dob) = match (name, dob) {
        (Some(name), Some(dob)) => (name, dob),
        (name, dob) => {
            let mut missing = serde_json::Map::new();
            if name.is_none() {
                missing.insert("name".into(), json!("name is required"));
            }
            if dob.is_none() {
                missing.insert("dob".into(), json!("dob is required"));
            }
            return Err(AppError::bad_request("Validation failed", missing.into()));
        }
    };

    let dob = dob.parse::<BirthDate>().map_err(|e| {
        AppError::bad_request("Validation failed", json!({ "dob": e.to_string() }))
    })?;

    Ok(NewUser { name, dob })
}

impl TryFrom<CreateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: CreateUserRequest) -> Result<Self, Self::Error> {
        to_new_user(req.name, req.dob)
    }
}

impl TryFrom<UpdateUserRequest> for NewUser {
    type Error = AppError;

    fn try_from(req: UpdateUserRequest) -> Result<Self, Self::Error> {
        to_new_user(req.name, req.dob)
    }
}

/// Query parameters for `GET /api/v1/users`.
///
/// Values that are not integers are treated as absent and fall back to the
/// defaults applied during normalization.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "DefaultOnError<Option<DisplayFromStr>>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}
