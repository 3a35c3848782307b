//! Axum [`extractor`](axum::extract) for JSON request bodies.
//!
//! It's a wrapper for the Axum `Json` extractor in order to return the same
//! error body as the rest of the API:
//!
//! ```json
//! {"detail": "JSON parse error - expected value at line 1 column 1"}
//! ```
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::response::Response;
use axum::Json;
use futures::future::BoxFuture;
use futures::FutureExt;
use serde::de::DeserializeOwned;

use crate::servers::apis::v1::responses::{bad_request_response, detail_response};

/// Extractor for a JSON body deserialized into `T`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = Response;

    #[must_use]
    fn from_request<'life0, 'async_trait>(req: Request, state: &'life0 S) -> BoxFuture<'async_trait, Result<Self, Self::Rejection>>
    where
        'life0: 'async_trait,
        Self: 'async_trait,
    {
        async move {
            match Json::<T>::from_request(req, state).await {
                Ok(Json(value)) => Ok(JsonBody(value)),
                Err(rejection) => Err(rejection_response(&rejection)),
            }
        }
        .boxed()
    }
}

fn rejection_response(rejection: &JsonRejection) -> Response {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => detail_response(
            rejection.status(),
            "Unsupported media type in request. Use \"application/json\".",
        ),
        _ => bad_request_response(&format!("JSON parse error - {}", rejection.body_text())),
    }
}
