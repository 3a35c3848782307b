//! API handlers for the [`tags`](crate::servers::apis::v1::context::tags)
//! API context.
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::resources::Tag;
use crate::core::Foodgram;
use crate::servers::apis::v1::responses::{error_response, json_response, not_found_response};
use crate::servers::apis::IdParam;

/// It handles the request to list all the tags.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::tags#list-tags)
/// for more information about this endpoint.
pub async fn list_tags_handler(State(foodgram): State<Arc<Foodgram>>) -> Response {
    match foodgram.list_tags() {
        Ok(tags) => json_response(StatusCode::OK, &tags.into_iter().map(Tag::from).collect::<Vec<_>>()),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get one tag.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::tags#get-a-tag)
/// for more information about this endpoint.
pub async fn get_tag_handler(State(foodgram): State<Arc<Foodgram>>, Path(id): Path<IdParam>) -> Response {
    let Some(tag_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.get_tag(tag_id) {
        Ok(tag) => json_response(StatusCode::OK, &Tag::from(tag)),
        Err(e) => error_response(&e),
    }
}
