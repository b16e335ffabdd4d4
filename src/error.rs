//! Application error type and its HTTP representation.
//!
//! Every layer returns [`AppError`]. Handlers are the only place where an error
//! becomes a status code, through the [`IntoResponse`] implementation below.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;
use validator::{ValidationError, ValidationErrors};

use crate::domain::birth_date::DATE_FORMAT_HINT;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub msg: String,
    #[serde(skip_serializing_if = "is_empty")]
    pub details: Value,
}

fn is_empty(details: &Value) -> bool {
    match details {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Client input was malformed or out of bounds.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// The requested user does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// The path exists but not for this HTTP method.
    #[error("{message}")]
    MethodNotAllowed { message: String, details: Value },
    /// Any failure at the persistence boundary.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn method_not_allowed(message: impl Into<String>, details: Value) -> Self {
        Self::MethodNotAllowed {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Turns a not-found into a generic failure, keeping its message.
    ///
    /// Only direct lookups answer 404; mutations report a missing user as a
    /// plain failure.
    pub fn fold_not_found(self) -> Self {
        match self {
            Self::NotFound { message, details } => Self::Internal { message, details },
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Request rejected");
        }

        let (msg, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::MethodNotAllowed { message, details }
            | Self::Internal { message, details } => (message, details),
        };

        let body = ErrorBody {
            error: true,
            msg,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let fields: BTreeMap<String, String> = errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errs)| {
                errs.first()
                    .map(|e| (field.to_string(), describe_field_error(&field, e)))
            })
            .collect();

        AppError::bad_request("Validation failed", json!(fields))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(_: PathRejection) -> Self {
        AppError::bad_request("Invalid user ID", json!({}))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

/// Renders one validator failure with the fixed per-field reason templates.
fn describe_field_error(field: &str, error: &ValidationError) -> String {
    match error.code.as_ref() {
        "required" => format!("{field} is required"),
        "length" => {
            let bound = |key: &str| error.params.get(key).and_then(Value::as_u64);
            let len = error
                .params
                .get("value")
                .and_then(Value::as_str)
                .map(|v| v.chars().count() as u64);

            match (len, bound("min"), bound("max")) {
                (Some(0), _, _) => format!("{field} is required"),
                (Some(len), Some(min), _) if len < min => {
                    format!("{field} must be at least {min} characters")
                }
                (_, _, Some(max)) => format!("{field} must be at most {max} characters"),
                _ => format!("{field} is invalid"),
            }
        }
        "date" => format!("{field} must be a valid date in format {DATE_FORMAT_HINT}"),
        _ => format!("{field} is invalid"),
    }
}
