//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] pagination fields.

use url::Url;

/// Number of records the service returns per page. Every request asks for
/// exactly this many.
pub const PAGE_SIZE: i64 = 10;

/// Trait implemented by query builders. Provides URL serialization and the
/// shared pagination builder method.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    ///
    /// Returns `None` when the parameters cannot be represented, e.g. a page
    /// whose offset overflows `i64`.
    fn add_to_url(&self, url: &Url) -> Option<Url>;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed). Not validated.
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }
}

/// Pagination fields shared by all query types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QueryCommon {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon { page: 1 }
    }
}

impl QueryCommon {
    /// Offset of the first record on this page, or `None` if it overflows.
    /// Pages below 1 are not clamped, so page 0 yields a negative offset.
    pub fn offset(&self) -> Option<i64> {
        self.page.checked_sub(1)?.checked_mul(PAGE_SIZE)
    }
}
