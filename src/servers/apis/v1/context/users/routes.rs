//! API routes for the [`users`](crate::servers::apis::v1::context::users) API context.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    get_user_handler, list_users_handler, me_handler, register_user_handler, set_password_handler, subscribe_handler,
    subscriptions_handler, unsubscribe_handler,
};
use crate::core::Foodgram;

/// It adds the routes to the router for the [`users`](crate::servers::apis::v1::context::users) API context.
pub fn add(prefix: &str, router: Router, foodgram: Arc<Foodgram>) -> Router {
    router
        .route(
            &format!("{prefix}/users"),
            get(list_users_handler)
                .with_state(foodgram.clone())
                .post(register_user_handler)
                .with_state(foodgram.clone()),
        )
        .route(&format!("{prefix}/users/me"), get(me_handler).with_state(foodgram.clone()))
        .route(
            &format!("{prefix}/users/set_password"),
            post(set_password_handler).with_state(foodgram.clone()),
        )
        .route(
            &format!("{prefix}/users/subscriptions"),
            get(subscriptions_handler).with_state(foodgram.clone()),
        )
        .route(&format!("{prefix}/users/:id"), get(get_user_handler).with_state(foodgram.clone()))
        .route(
            &format!("{prefix}/users/:id/subscribe"),
            post(subscribe_handler)
                .with_state(foodgram.clone())
                .delete(unsubscribe_handler)
                .with_state(foodgram),
        )
}
