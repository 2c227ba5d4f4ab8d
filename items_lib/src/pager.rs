//! Discrete page-number listing.

use items_api::types::{Item, Page};

use crate::client::CachedClient;
use crate::error::ItemsError;
use crate::validation;

/// Page-selector listing state (discrete paging strategy).
///
/// Holds exactly one page at a time and refetches fully on page change.
/// Selecting the page that is already current is a deliberate no-op.
pub struct ItemPager {
    limit: i64,
    current: Option<Page<Item>>,
}

impl ItemPager {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            current: None,
        }
    }

    /// The currently held page, if one has been selected.
    pub fn current(&self) -> Option<&Page<Item>> {
        self.current.as_ref()
    }

    /// Total page count for a selector control, once a page is held.
    pub fn total_pages(&self) -> Option<i64> {
        self.current.as_ref().map(|p| p.total_pages())
    }

    /// True once loaded and the page came back empty.
    pub fn is_empty(&self) -> bool {
        self.current.as_ref().is_some_and(|p| p.data.is_empty())
    }

    /// Selects a page, fetching it unless it is already current.
    /// Returns whether a fetch was issued.
    pub async fn select_page(
        &mut self,
        page: i64,
        client: &CachedClient,
    ) -> Result<bool, ItemsError> {
        let page = validation::validate_page(page)?;
        if self.current.as_ref().is_some_and(|p| p.page == page) {
            return Ok(false);
        }
        let fetched = client.get_page(page, self.limit).await?;
        self.current = Some(fetched);
        Ok(true)
    }
}
