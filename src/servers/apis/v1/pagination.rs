//! Pagination of the list endpoints.
//!
//! Lists are returned in an envelope with the total number of results and
//! the links to the next and previous pages:
//!
//! ```json
//! {
//!   "count": 123,
//!   "next": "http://foodgram.example.org/api/recipes/?page=4",
//!   "previous": "http://foodgram.example.org/api/recipes/?page=2",
//!   "results": []
//! }
//! ```
//!
//! There are two styles of query params:
//!
//! Style | Params | Used by
//! ---|---|---
//! [`Style::LimitOffset`] | `limit`, `offset` | users, subscriptions
//! [`Style::PageNumber`] | `page`, `limit` | recipes
//!
//! Links are `null` when there is no such page. Page numbers that do not
//! exist, or are not numbers, are answered with `404 Not Found`:
//!
//! ```json
//! {
//!   "detail": "Invalid page."
//! }
//! ```
use foodgram_configuration::PaginationPolicy;
use foodgram_primitives::pagination::Pagination;
use serde::{Deserialize, Serialize};

use super::extractors::request_url::RequestUrl;
use super::forms::positive;

pub const INVALID_PAGE: &str = "Invalid page.";

/// One page of results.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// The pagination query params, as sent by the client. Values that are not
/// positive integers are ignored, except the `page` number.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PaginationParams {
    pub limit: Option<String>,
    pub offset: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    LimitOffset,
    PageNumber,
}

impl Style {
    /// It reads the page window from the query params of the request.
    #[must_use]
    pub fn pagination(self, params: &PaginationParams, policy: &PaginationPolicy) -> Pagination {
        let limit = positive(params.limit.as_deref());

        match self {
            Style::LimitOffset => Pagination::new_with_options(
                params.offset.as_deref().and_then(|offset| offset.trim().parse::<u32>().ok()),
                limit,
                policy.default_page_size,
                policy.max_page_size,
            ),
            Style::PageNumber => Pagination::from_page(
                positive(params.page.as_deref()),
                limit,
                policy.default_page_size,
                policy.max_page_size,
            ),
        }
    }

    /// Whether the requested page does not exist: the `page` param is not a
    /// positive integer, or it is past the last page. The first page always
    /// exists, even when there are no results.
    ///
    /// An `offset` past the end is not an error, it gives an empty page.
    #[must_use]
    pub fn is_invalid_page(self, params: &PaginationParams, pagination: &Pagination, count: u64) -> bool {
        match self {
            Style::LimitOffset => false,
            Style::PageNumber => {
                let not_a_page_number = params.page.as_deref().is_some_and(|page| positive(Some(page)).is_none());

                not_a_page_number || (pagination.page_number() > 1 && u64::from(pagination.offset) >= count)
            }
        }
    }

    /// It wraps the results of the page in the envelope.
    #[must_use]
    pub fn page<T>(self, url: &RequestUrl, pagination: &Pagination, count: u64, results: Vec<T>) -> Page<T> {
        let next = if pagination.has_next(count) {
            self.next_link(url, pagination)
        } else {
            None
        };

        let previous = if pagination.has_previous() {
            self.previous_link(url, pagination)
        } else {
            None
        };

        Page {
            count,
            next,
            previous,
            results,
        }
    }

    fn next_link(self, url: &RequestUrl, pagination: &Pagination) -> Option<String> {
        match self {
            Style::LimitOffset => {
                let limit = pagination.limit.to_string();
                let offset = (pagination.offset + pagination.limit).to_string();
                url.with_params(&[("limit", Some(limit.as_str())), ("offset", Some(offset.as_str()))])
            }
            Style::PageNumber => {
                let page = (pagination.page_number() + 1).to_string();
                url.with_params(&[("page", Some(page.as_str()))])
            }
        }
    }

    fn previous_link(self, url: &RequestUrl, pagination: &Pagination) -> Option<String> {
        match self {
            Style::LimitOffset => {
                let limit = pagination.limit.to_string();
                let offset = pagination.offset.saturating_sub(pagination.limit);
                if offset == 0 {
                    url.with_params(&[("limit", Some(limit.as_str())), ("offset", None)])
                } else {
                    url.with_params(&[("limit", Some(limit.as_str())), ("offset", Some(offset.to_string().as_str()))])
                }
            }
            Style::PageNumber => {
                let page = pagination.page_number() - 1;
                if page <= 1 {
                    url.with_params(&[("page", None)])
                } else {
                    url.with_params(&[("page", Some(page.to_string().as_str()))])
                }
            }
        }
    }
}
