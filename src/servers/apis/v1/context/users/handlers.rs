//! API handlers for the [`users`](crate::servers::apis::v1::context::users)
//! API context.
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::forms::{RecipesLimitQuery, RegistrationForm, SetPasswordForm};
use super::resources::{Author, CreatedUser, User};
use crate::core::error::Error;
use crate::core::services::user::{self, AuthorInfo};
use crate::core::Foodgram;
use crate::servers::apis::v1::context::recipes::resources::ImageUrls;
use crate::servers::apis::v1::extractors::authentication::{Authenticated, MaybeAuthenticated};
use crate::servers::apis::v1::extractors::json::JsonBody;
use crate::servers::apis::v1::extractors::request_url::RequestUrl;
use crate::servers::apis::v1::pagination::{PaginationParams, Style};
use crate::servers::apis::v1::responses::{error_response, json_response, no_content_response, not_found_response};
use crate::servers::apis::IdParam;

/// It handles the request to list the users.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#list-users)
/// for more information about this endpoint.
pub async fn list_users_handler(
    State(foodgram): State<Arc<Foodgram>>,
    viewer: MaybeAuthenticated,
    url: RequestUrl,
    Query(params): Query<PaginationParams>,
) -> Response {
    let pagination = Style::LimitOffset.pagination(&params, foodgram.pagination_policy());

    let result = foodgram.list_users(&pagination).and_then(|(users, count)| {
        let profiles = users
            .into_iter()
            .map(|found| user::profile_of(&foodgram, viewer.user(), found).map(User::from))
            .collect::<Result<Vec<_>, Error>>()?;
        Ok((profiles, count))
    });

    match result {
        Ok((profiles, count)) => json_response(StatusCode::OK, &Style::LimitOffset.page(&url, &pagination, count, profiles)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to register a new user.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#register)
/// for more information about this endpoint.
pub async fn register_user_handler(
    State(foodgram): State<Arc<Foodgram>>,
    JsonBody(form): JsonBody<RegistrationForm>,
) -> Response {
    match foodgram.register_user(&form.into()) {
        Ok(user) => json_response(StatusCode::CREATED, &CreatedUser::from(user)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get a user profile.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#get-a-user)
/// for more information about this endpoint.
pub async fn get_user_handler(
    State(foodgram): State<Arc<Foodgram>>,
    viewer: MaybeAuthenticated,
    Path(id): Path<IdParam>,
) -> Response {
    let Some(user_id) = id.value() else {
        return not_found_response();
    };

    match user::get_profile(&foodgram, viewer.user(), user_id) {
        Ok(profile) => json_response(StatusCode::OK, &User::from(profile)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to get the profile of the authenticated user.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#current-user)
/// for more information about this endpoint.
pub async fn me_handler(State(foodgram): State<Arc<Foodgram>>, Authenticated(me): Authenticated) -> Response {
    let viewer = me.clone();

    match user::profile_of(&foodgram, Some(&viewer), me) {
        Ok(profile) => json_response(StatusCode::OK, &User::from(profile)),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to change the password of the authenticated user.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#set-password)
/// for more information about this endpoint.
pub async fn set_password_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(me): Authenticated,
    JsonBody(form): JsonBody<SetPasswordForm>,
) -> Response {
    match foodgram.set_password(&me, &form.into()) {
        Ok(()) => no_content_response(),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to list the authors the user is subscribed to.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#list-subscriptions)
/// for more information about this endpoint.
pub async fn subscriptions_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(me): Authenticated,
    url: RequestUrl,
    Query(params): Query<PaginationParams>,
    Query(recipes_limit): Query<RecipesLimitQuery>,
) -> Response {
    let pagination = Style::LimitOffset.pagination(&params, foodgram.pagination_policy());
    let recipes_limit = recipes_limit.value();
    let images = ImageUrls::new(&url, foodgram.media());

    let result = foodgram.subscriptions(&me, &pagination).and_then(|(authors, count)| {
        let authors = authors
            .into_iter()
            .map(|author| user::get_author_info(&foodgram, Some(&me), author, recipes_limit))
            .collect::<Result<Vec<AuthorInfo>, Error>>()?;
        Ok((authors, count))
    });

    match result {
        Ok((authors, count)) => {
            let authors = authors.into_iter().map(|info| Author::new(info, &images)).collect();
            json_response(StatusCode::OK, &Style::LimitOffset.page(&url, &pagination, count, authors))
        }
        Err(e) => error_response(&e),
    }
}

/// It handles the request to subscribe to an author.
///
/// It returns:
///
/// - `201` with the [`Author`] and their newest recipes.
/// - `400` when subscribing to oneself or subscribing twice.
/// - `404` if the author does not exist.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#subscribe)
/// for more information about this endpoint.
pub async fn subscribe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(me): Authenticated,
    Path(id): Path<IdParam>,
    url: RequestUrl,
    Query(recipes_limit): Query<RecipesLimitQuery>,
) -> Response {
    let Some(author_id) = id.value() else {
        return not_found_response();
    };

    let recipes_limit = recipes_limit.value();

    let result = foodgram
        .subscribe(&me, author_id)
        .and_then(|author| user::get_author_info(&foodgram, Some(&me), author, recipes_limit));

    match result {
        Ok(info) => json_response(
            StatusCode::CREATED,
            &Author::new(info, &ImageUrls::new(&url, foodgram.media())),
        ),
        Err(e) => error_response(&e),
    }
}

/// It handles the request to unsubscribe from an author.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::users#unsubscribe)
/// for more information about this endpoint.
pub async fn unsubscribe_handler(
    State(foodgram): State<Arc<Foodgram>>,
    Authenticated(me): Authenticated,
    Path(id): Path<IdParam>,
) -> Response {
    let Some(author_id) = id.value() else {
        return not_found_response();
    };

    match foodgram.unsubscribe(&me, author_id) {
        Ok(()) => no_content_response(),
        Err(e) => error_response(&e),
    }
}
