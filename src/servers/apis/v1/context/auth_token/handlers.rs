//! API handlers for the [`auth_token`](crate::servers::apis::v1::context::auth_token)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use tracing::debug;

use super::forms::LoginForm;
use super::resources::AuthToken;
use crate::core::Foodgram;
use crate::servers::apis::v1::extractors::authentication::Authenticated;
use crate::servers::apis::v1::extractors::json::JsonBody;
use crate::servers::apis::v1::responses::{error_response, json_response, no_content_response};
use crate::servers::logging::API_LOG_TARGET;

/// It handles the request to get a login token.
///
/// It returns:
///
/// - `200` with an json [`AuthToken`] resource.
/// - `400` if the credentials are missing or wrong.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth_token#log-in)
/// for more information about this endpoint.
pub async fn login_handler(State(foodgram): State<Arc<Foodgram>>, JsonBody(form): JsonBody<LoginForm>) -> Response {
    match foodgram.login(&form.into()) {
        Ok(token) => json_response(StatusCode::OK, &AuthToken::from(token)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to delete the login token of the user.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::auth_token#log-out)
/// for more information about this endpoint.
pub async fn logout_handler(State(foodgram): State<Arc<Foodgram>>, Authenticated(user): Authenticated) -> Response {
    match foodgram.logout(&user) {
        Ok(()) => {
            debug!(target: API_LOG_TARGET, user_id = user.id, "logged out");
            no_content_response()
        }
        Err(e) => error_response(&e),
    }
}
