//! API routes.
//!
//! It loads all the API routes for all API versions and adds the middlewares
//! shared by all of them:
//!
//! - Trailing slashes are removed from the request path before routing.
//! - Responses are compressed.
//! - Each request gets an `x-request-id` header, echoed in the response.
//! - Requests and responses are traced.
//!
//! Uploaded images are served under the media URL prefix of the
//! configuration.
use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderName, HeaderValue, Request};
use axum::response::Response;
use axum::routing::get;
use axum::{middleware, Router};
use foodgram_configuration::AccessTokens;
use tower::Layer;
use tower_http::compression::CompressionLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::propagate_header::PropagateHeaderLayer;
use tower_http::request_id::{MakeRequestId, RequestId, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use tracing::{Level, Span};
use uuid::Uuid;

use super::v1;
use super::v1::context::health_check::handlers::health_check_handler;
use super::v1::middlewares::auth::State;
use super::v1::responses::not_found_response;
use crate::core::Foodgram;
use crate::servers::logging::API_LOG_TARGET;

/// Add all API routes to the router.
#[allow(clippy::needless_pass_by_value)]
pub fn router(foodgram: Arc<Foodgram>, access_tokens: Arc<AccessTokens>) -> NormalizePath<Router> {
    let router = Router::new();

    let api_url_prefix = "/api";

    let router = v1::routes::add(api_url_prefix, router, foodgram.clone());

    let state = State { access_tokens };

    let admin = v1::context::admin::routes::add(&format!("{api_url_prefix}/admin"), Router::new(), foodgram.clone())
        .layer(middleware::from_fn_with_state(state, v1::middlewares::auth::auth));

    let media_prefix = foodgram.media().url_prefix().trim_end_matches('/').to_string();
    let media = ServeDir::new(foodgram.media().root());

    let router = router
        .merge(admin)
        .route(&format!("{api_url_prefix}/health_check"), get(health_check_handler))
        .nest_service(&media_prefix, media)
        .fallback(|| async { not_found_response() })
        .layer(CompressionLayer::new())
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator))
        .layer(PropagateHeaderLayer::new(HeaderName::from_static("x-request-id")))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(|request: &Request<axum::body::Body>, _span: &Span| {
                    let method = request.method().to_string();
                    let uri = request.uri().to_string();
                    let request_id = request
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();

                    tracing::span!(
                        target: API_LOG_TARGET,
                        tracing::Level::INFO, "request", method = %method, uri = %uri, request_id = %request_id);
                })
                .on_response(|response: &Response, latency: Duration, _span: &Span| {
                    let status_code = response.status();
                    let request_id = response
                        .headers()
                        .get("x-request-id")
                        .map(|v| v.to_str().unwrap_or_default())
                        .unwrap_or_default();
                    let latency_ms = latency.as_millis();

                    tracing::span!(
                        target: API_LOG_TARGET,
                        tracing::Level::INFO, "response", latency = %latency_ms, status = %status_code, request_id = %request_id);
                }),
        )
        .layer(SetRequestIdLayer::x_request_id(RequestIdGenerator));

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

#[derive(Clone, Default)]
struct RequestIdGenerator;

impl MakeRequestId for RequestIdGenerator {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = HeaderValue::from_str(&Uuid::new_v4().to_string()).ok()?;
        Some(RequestId::new(id))
    }
}
