//! Common responses for the API v1 shared by all the contexts.
//!
//! Errors of the domain layer are turned into responses by
//! [`error_response`]:
//!
//! Error | Status | Body
//! ---|---|---
//! `NotFound` | `404` | `{"detail": "Not found."}`
//! `Validation` | `400` | `{"field": ["message"]}`
//! `Rejected` | `400` | `{"errors": "reason"}`
//! `InvalidCredentials` | `400` | `{"non_field_errors": ["message"]}`
//! `InvalidToken` | `401` | `{"detail": "Invalid token."}`
//! `PermissionDenied` | `403` | `{"detail": "message"}`
//! Others | `500` | `Unhandled rejection: ...`
use std::borrow::Cow;

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::core::error::Error;
use crate::core::validation::FieldErrors;
use crate::servers::logging::API_LOG_TARGET;

pub const NOT_FOUND: &str = "Not found.";
pub const INVALID_TOKEN: &str = "Invalid token.";
pub const NOT_AUTHENTICATED: &str = "Authentication credentials were not provided.";
pub const PERMISSION_DENIED: &str = "You do not have permission to perform this action.";
pub const INVALID_CREDENTIALS: &str = "Unable to log in with provided credentials.";

/// Response status used when requests have only two possible results
/// `Ok` or `Error` and no data is returned.
#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ActionStatus<'a> {
    Ok,
    Err { reason: Cow<'a, str> },
}

/// Body with a single message.
#[derive(Serialize, Debug)]
pub struct Detail<'a> {
    pub detail: Cow<'a, str>,
}

/// Body of the actions rejected because of the current state, like
/// subscribing twice to the same author.
#[derive(Serialize, Debug)]
pub struct Errors<'a> {
    pub errors: Cow<'a, str>,
}

// OK responses

#[must_use]
pub fn ok_response() -> Response {
    json_response(StatusCode::OK, &ActionStatus::Ok)
}

/// A response with the resource serialized as JSON.
#[must_use]
pub fn json_response<T: Serialize>(status: StatusCode, resource: &T) -> Response {
    match serde_json::to_string(resource) {
        Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => unhandled_rejection_response(format!("failed to serialize the response: {err}")),
    }
}

/// `204` response.
#[must_use]
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

// Error responses

#[must_use]
pub fn detail_response(status: StatusCode, detail: &str) -> Response {
    json_response(status, &Detail { detail: detail.into() })
}

#[must_use]
pub fn not_found_response() -> Response {
    detail_response(StatusCode::NOT_FOUND, NOT_FOUND)
}

#[must_use]
pub fn bad_request_response(detail: &str) -> Response {
    detail_response(StatusCode::BAD_REQUEST, detail)
}

#[must_use]
pub fn field_errors_response(errors: &FieldErrors) -> Response {
    json_response(StatusCode::BAD_REQUEST, errors)
}

#[must_use]
pub fn rejected_response(reason: &str) -> Response {
    json_response(StatusCode::BAD_REQUEST, &Errors { errors: reason.into() })
}

#[must_use]
pub fn unauthorized_response(detail: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, "Token")],
        detail_response(StatusCode::UNAUTHORIZED, detail),
    )
        .into_response()
}

#[must_use]
pub fn permission_denied_response() -> Response {
    detail_response(StatusCode::FORBIDDEN, PERMISSION_DENIED)
}

/// It maps an error of the domain layer to the API response.
#[must_use]
pub fn error_response(err: &Error) -> Response {
    match err {
        Error::NotFound { .. } => not_found_response(),
        Error::Validation { errors, .. } => field_errors_response(errors),
        Error::Rejected { reason, .. } => rejected_response(reason),
        Error::InvalidCredentials { .. } => {
            let mut errors = FieldErrors::new();
            errors.add("non_field_errors", INVALID_CREDENTIALS);
            field_errors_response(&errors)
        }
        Error::InvalidToken { .. } => unauthorized_response(INVALID_TOKEN),
        Error::PermissionDenied { .. } => permission_denied_response(),
        Error::Database { .. } | Error::Media { .. } | Error::ShoppingList { .. } => {
            error!(target: API_LOG_TARGET, "{err}");
            unhandled_rejection_response(err.to_string())
        }
    }
}

/// `500` response for failures the client cannot fix.
#[must_use]
pub fn unhandled_rejection_response(reason: String) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Unhandled rejection: {:?}", ActionStatus::Err { reason: reason.into() }),
    )
        .into_response()
}
