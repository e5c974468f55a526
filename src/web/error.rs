//! Error responses for the anonboard Web API.
//!
//! Every failure is answered with a JSON body of the form
//! `{"error": {"code": ..., "message": ..., "fields": {...}}}`; `fields` only
//! appears when specific inputs can be blamed.

use std::collections::BTreeMap;

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::BoardError;

/// Messages per offending input, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Failure of a board request.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body or query string could not be read at all.
    #[error("malformed request: {0}")]
    Malformed(String),

    /// Input was readable but broke a board rule.
    #[error("invalid input: {message}")]
    InvalidInput { message: String, fields: FieldErrors },

    /// The thread or reply does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Server-side fault. Details are logged, never sent.
    #[error("internal error")]
    Internal,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: ErrorDetail<'a>,
}

#[derive(Serialize)]
struct ErrorDetail<'a> {
    code: &'static str,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    fields: Option<&'a FieldErrors>,
}

impl ApiError {
    /// Machine-readable error code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Malformed(_) => "MALFORMED_REQUEST",
            ApiError::InvalidInput { .. } => "INVALID_INPUT",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Malformed(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::Malformed(message)
            | ApiError::InvalidInput { message, .. }
            | ApiError::NotFound(message) => message,
            ApiError::Internal => "An internal error occurred",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let fields = match &self {
            ApiError::InvalidInput { fields, .. } if !fields.is_empty() => Some(fields),
            _ => None,
        };
        let body = ErrorBody {
            error: ErrorDetail {
                code: self.code(),
                message: self.message(),
                fields,
            },
        };
        (self.status(), Json(body)).into_response()
    }
}

impl From<BoardError> for ApiError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::Validation(message) => ApiError::InvalidInput {
                message,
                fields: FieldErrors::new(),
            },
            BoardError::NotFound(what) => ApiError::NotFound(format!("{what} not found")),
            other => {
                tracing::error!("Internal error: {}", other);
                ApiError::Internal
            }
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            let messages = field_errors
                .iter()
                .map(|e| match &e.message {
                    Some(message) => message.to_string(),
                    None => format!("invalid {field}"),
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }

        ApiError::InvalidInput {
            message: "Invalid input".to_string(),
            fields,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::Malformed(rejection.body_text())
    }
}
