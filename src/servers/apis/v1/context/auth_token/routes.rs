//! API routes for the [`auth_token`](crate::servers::apis::v1::context::auth_token) API context.
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::{login_handler, logout_handler};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`auth_token`](crate::servers::apis::v1::context::auth_token) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        .route(&format!("{prefix}/auth/token/login"), post(login_handler).with_state(foodgram.clone()))
        .route(&format!("{prefix}/auth/token/logout"), post(logout_handler).with_state(foodgram))
}
