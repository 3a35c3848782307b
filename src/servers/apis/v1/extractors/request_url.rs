//! Axum [`extractor`](axum::extract) for the absolute URL of the request.
//!
//! The host is taken from the `Host` header, so links in the responses point
//! to the same host the client used.
use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header;
use axum::http::request::Parts;
use futures::future::BoxFuture;
use futures::FutureExt;
use url::{form_urlencoded, Url};

/// Host used when the request has no `Host` header.
const DEFAULT_HOST: &str = "localhost";

/// The URL the client requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl {
    pub scheme: String,
    pub host: String,
    pub path: String,
    /// The raw query, without the leading `?`.
    pub query: Option<String>,
}

impl RequestUrl {
    #[must_use]
    pub fn from_parts(parts: &Parts) -> Self {
        let host = parts
            .headers
            .get(header::HOST)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
            .or_else(|| parts.uri.authority().map(ToString::to_string))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let scheme = parts
            .headers
            .get("x-forwarded-proto")
            .and_then(|value| value.to_str().ok())
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http")
            .to_string();

        Self {
            scheme,
            host,
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(ToString::to_string),
        }
    }

    /// Scheme and host, for example `http://localhost:8000`.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.host)
    }

    /// The same URL with each param set to its value, or removed when the
    /// value is `None`. The other params keep their order and the changed
    /// ones go last. Values are decoded and encoded again, so they keep
    /// their meaning.
    ///
    /// It returns `None` when the host is not valid in a URL.
    #[must_use]
    pub fn with_params(&self, params: &[(&str, Option<&str>)]) -> Option<String> {
        let mut url = Url::parse(&format!("{}{}", self.origin(), self.path)).ok()?;

        let kept: Vec<(String, String)> = form_urlencoded::parse(self.query.as_deref().unwrap_or_default().as_bytes())
            .filter(|(key, _)| !params.iter().any(|(name, _)| key == name))
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        url.query_pairs_mut()
            .clear()
            .extend_pairs(kept)
            .extend_pairs(params.iter().filter_map(|(name, value)| value.map(|value| (*name, value))));

        if url.query() == Some("") {
            url.set_query(None);
        }

        Some(url.into())
    }
}

impl<S> FromRequestParts<S> for RequestUrl
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[must_use]
    fn from_request_parts<'life0, 'life1, 'async_trait>(
        parts: &'life0 mut Parts,
        _state: &'life1 S,
    ) -> BoxFuture<'async_trait, Result<Self, Self::Rejection>>
    where
        'life0: 'async_trait,
        'life1: 'async_trait,
        Self: 'async_trait,
    {
        async move { Ok(RequestUrl::from_parts(parts)) }.boxed()
    }
}
