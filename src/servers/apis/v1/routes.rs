//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{auth_token, ingredients, recipes, tags, users};
use crate::core::Foodgram;

/// Add the routes for the v1 API.
///
/// The [`admin`](super::context::admin) routes are added separately because
/// they are guarded by the access token middleware.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    let router = users::routes::add(prefix, router, foodgram.clone());
    let router = auth_token::routes::add(prefix, router, foodgram.clone());
    let router = tags::routes::add(prefix, router, foodgram.clone());
    let router = ingredients::routes::add(prefix, router, foodgram.clone());
    recipes::routes::add(prefix, router, foodgram)
}
