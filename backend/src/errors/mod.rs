//! Global application error types and handlers.
//!
//! Every failure a handler can produce maps onto one of three outcomes:
//! a validation failure (400, with field errors when a schema check failed),
//! a missing record (404), or an internal error (500, generic message only).

use std::collections::BTreeMap;

use almanac_catalog::CatalogError;
use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::{ValidationError, ValidationErrors};

use crate::{config::ConfigError, services::ServiceError};

pub type ApiResult<T> = Result<T, ApiError>;

/// Messages keyed by the camelCase field they refer to. Errors that concern
/// the body as a whole sit under `body`.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flattens `validator` output into the wire shape of a 400 body.
pub fn field_errors(errors: &ValidationErrors) -> FieldErrors {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, failures)| {
            let key = if field == "__all__" {
                "body".to_string()
            } else {
                camel_case(field)
            };
            (key, failures.iter().map(describe).collect())
        })
        .collect()
}

fn describe(failure: &ValidationError) -> String {
    if let Some(message) = &failure.message {
        return message.to_string();
    }
    // bounds arrive as JSON numbers, floats for `range`
    let bound = |name: &str| {
        failure.params.get(name).map(|value| match value.as_f64() {
            Some(number) => number.to_string(),
            None => value.to_string(),
        })
    };
    match (failure.code.as_ref(), bound("min"), bound("max")) {
        ("length", Some(min), Some(max)) => format!("must be between {min} and {max} characters"),
        ("length", None, Some(max)) => format!("must be at most {max} characters"),
        ("length", Some(min), None) => format!("must be at least {min} characters"),
        ("range", Some(min), Some(max)) => format!("must be between {min} and {max}"),
        ("range", None, Some(max)) => format!("must be at most {max}"),
        ("range", Some(min), None) => format!("must be at least {min}"),
        (code, _, _) => format!("failed the {code} check"),
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for ch in field.chars() {
        if ch == '_' {
            upper = true;
        } else if upper {
            out.extend(ch.to_uppercase());
            upper = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{message}")]
    Validation {
        message: String,
        errors: FieldErrors,
    },

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Internal server error")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(what: impl Into<String>) -> Self {
        ApiError::NotFound(what.into())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<serde_json::Value>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, errors) = match &self {
            ApiError::Validation { errors, .. } => {
                (StatusCode::BAD_REQUEST, serde_json::to_value(errors).ok())
            }
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, None),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, None),
            ApiError::Internal(detail) => {
                error!(%detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, None)
            }
        };

        let body = ErrorResponse {
            message: self.to_string(),
            errors,
        };

        (status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

/// Errors that stop the server before it starts serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_taxonomy() {
        let mut errors = FieldErrors::new();
        errors.insert("target".into(), vec!["must be between 1 and 100000".into()]);
        let validation = ApiError::Validation {
            message: "Invalid tasbih data".into(),
            errors,
        };

        assert_eq!(validation.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::not_found("Adhkar not found").into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Internal("lock poisoned".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_detail_is_not_displayed() {
        let err = ApiError::Internal("secret detail".into());
        assert_eq!(err.to_string(), "Internal server error");
    }

    #[test]
    fn validator_output_uses_wire_names() {
        let mut errors = ValidationErrors::new();
        let mut too_long = ValidationError::new("length");
        too_long.add_param("max".into(), &100);
        errors.add("user_id", too_long);
        let mut order = ValidationError::new("order");
        order.message = Some("asr must be later than dhuhr".into());
        errors.add("__all__", order);

        let flat = field_errors(&errors);
        assert_eq!(flat["userId"], ["must be at most 100 characters"]);
        assert_eq!(flat["body"], ["asr must be later than dhuhr"]);
    }
}
