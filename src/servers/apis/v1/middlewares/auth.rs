//! Authentication middleware for the admin API.
//!
//! It uses a "token" GET param to authenticate the administrator. URLs must
//! include the `token` query param with one of the access tokens of the
//! configuration. For example:
//!
//! ```text
//! http://0.0.0.0:8000/api/admin/recipes/1/stats?token=MyAccessToken
//! ```
//!
//! All the tokens have the same permissions, so it is not possible to have
//! different permissions for different tokens. The label is only used to
//! identify the token.
//!
//! The tokens are defined in the `[http_api.access_tokens]` section of the
//! configuration:
//!
//! ```toml
//! [http_api.access_tokens]
//! admin = "MyAccessToken"
//! moderator = "MyModeratorToken"
//! ```
//!
//! Requests without a valid token get a `500` response:
//!
//! ```text
//! Unhandled rejection: Err { reason: "unauthorized" }
//! ```
//!
//! ```text
//! Unhandled rejection: Err { reason: "token not valid" }
//! ```
use std::sync::Arc;

use axum::extract::{self, Query};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use foodgram_configuration::AccessTokens;
use serde::Deserialize;
use tracing::debug;

use crate::servers::apis::v1::responses::unhandled_rejection_response;
use crate::servers::logging::API_LOG_TARGET;

/// Container for the `token` extracted from the query params.
#[derive(Deserialize, Debug)]
pub struct QueryParams {
    pub token: Option<String>,
}

/// State of the middleware: the accepted tokens.
#[derive(Clone, Debug)]
pub struct State {
    pub access_tokens: Arc<AccessTokens>,
}

/// Middleware for authentication using a "token" GET param.
/// The token must be one of the access tokens in the [HTTP API configuration](foodgram_configuration::HttpApi).
pub async fn auth(
    extract::State(state): extract::State<State>,
    Query(params): Query<QueryParams>,
    request: extract::Request,
    next: Next,
) -> Response {
    let Some(token) = params.token else {
        return AuthError::Unauthorized.into_response();
    };

    if !authenticate(&token, &state.access_tokens) {
        debug!(target: API_LOG_TARGET, uri = %request.uri().path(), "admin token not valid");
        return AuthError::TokenNotValid.into_response();
    }

    next.run(request).await
}

enum AuthError {
    /// Missing token for authentication.
    Unauthorized,
    /// Token was provided but it is not valid.
    TokenNotValid,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::Unauthorized => unauthorized_response(),
            AuthError::TokenNotValid => token_not_valid_response(),
        }
    }
}

fn authenticate(token: &str, tokens: &AccessTokens) -> bool {
    tokens.values().any(|t| t == token)
}

/// `500` error response returned when the token is missing.
#[must_use]
pub fn unauthorized_response() -> Response {
    unhandled_rejection_response("unauthorized".to_string())
}

/// `500` error response when the provided token is not valid.
#[must_use]
pub fn token_not_valid_response() -> Response {
    unhandled_rejection_response("token not valid".to_string())
}
