//! Query builder for paginated listing requests.

use url::Url;

/// Pagination parameters for `GET /items`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageQuery {
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
    /// Results per page. Defaults to 10.
    pub limit: i64,
}

impl Default for PageQuery {
    fn default() -> PageQuery {
        PageQuery { page: 1, limit: 10 }
    }
}

impl PageQuery {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Appends `_page` and `_limit` to the given URL, returning the modified URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("_page", &self.page.to_string());
        url.query_pairs_mut()
            .append_pair("_limit", &self.limit.to_string());
        url
    }
}
