use derive_more::Constructor;
use serde::Deserialize;

/// The window of results returned by a list endpoint.
#[derive(Deserialize, Copy, Clone, Debug, PartialEq, Eq, Constructor)]
pub struct Pagination {
    /// Number of results skipped from the start of the list.
    pub offset: u32,
    /// Page size. The number of results per page.
    pub limit: u32,
}

impl Pagination {
    /// Builds the window from `limit`/`offset` query params.
    ///
    /// A missing or zero limit falls back to `default_limit`. The limit is
    /// capped to `max_limit`.
    #[must_use]
    pub fn new_with_options(offset_option: Option<u32>, limit_option: Option<u32>, default_limit: u32, max_limit: u32) -> Self {
        let offset = offset_option.unwrap_or_else(Pagination::default_offset);
        let limit = Self::clamp_limit(limit_option, default_limit, max_limit);

        Self { offset, limit }
    }

    /// Builds the window from `page`/`limit` query params. Pages start at `1`.
    #[must_use]
    pub fn from_page(page_option: Option<u32>, limit_option: Option<u32>, default_limit: u32, max_limit: u32) -> Self {
        let page = page_option.unwrap_or(1).max(1);
        let limit = Self::clamp_limit(limit_option, default_limit, max_limit);

        Self {
            offset: (page - 1).saturating_mul(limit),
            limit,
        }
    }

    /// The `1`-based number of the page this window starts.
    #[must_use]
    pub fn page_number(&self) -> u32 {
        if self.limit == 0 {
            return 1;
        }
        self.offset / self.limit + 1
    }

    /// Whether there are more results after this window.
    #[must_use]
    pub fn has_next(&self, count: u64) -> bool {
        u64::from(self.offset) + u64::from(self.limit) < count
    }

    /// Whether there are results before this window.
    #[must_use]
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    #[must_use]
    pub fn default_offset() -> u32 {
        0
    }

    fn clamp_limit(limit_option: Option<u32>, default_limit: u32, max_limit: u32) -> u32 {
        match limit_option {
            Some(limit) if limit > 0 => limit.min(max_limit),
            _ => default_limit.min(max_limit),
        }
    }
}
