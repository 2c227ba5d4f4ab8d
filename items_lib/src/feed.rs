//! Infinite-accumulation listing: fetch-more when the last row becomes
//! visible.

use items_api::types::{Item, Page};

use crate::client::CachedClient;
use crate::error::ItemsError;

/// Loading state of the feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedStatus {
    /// Nothing fetched yet.
    Idle,
    /// First page in flight.
    LoadingFirst,
    /// At least one page held, no fetch in flight.
    Ready,
    /// A further page in flight.
    LoadingMore,
    /// A fetch failed. Terminal.
    Error,
}

/// Accumulating listing state (infinite-scroll strategy).
///
/// Pages are appended strictly in increasing page-number order: the next
/// fetch is only handed out after the previous one settles, and a page
/// already held is never refetched. The begin/complete split makes the
/// duplicate-trigger guard explicit: a visibility trigger that arrives
/// while a fetch is in flight gets no page number and is dropped.
pub struct ItemFeed {
    limit: i64,
    pages: Vec<Page<Item>>,
    status: FeedStatus,
}

impl ItemFeed {
    pub fn new(limit: i64) -> Self {
        Self {
            limit,
            pages: Vec::new(),
            status: FeedStatus::Idle,
        }
    }

    pub fn status(&self) -> FeedStatus {
        self.status
    }

    /// All accumulated items, in fetch order.
    pub fn items(&self) -> Vec<&Item> {
        self.pages.iter().flat_map(|p| p.data.iter()).collect()
    }

    /// Total matching records reported by the most recent page.
    pub fn total(&self) -> i64 {
        self.pages.last().map(|p| p.total).unwrap_or(0)
    }

    /// True once loaded and nothing came back: the "no data" state.
    pub fn is_empty(&self) -> bool {
        self.status == FeedStatus::Ready && self.pages.iter().all(|p| p.data.is_empty())
    }

    /// The page a fresh fetch would ask for: 1 before anything is held,
    /// then the last page's `next_page`, `None` once exhausted.
    pub fn next_page(&self) -> Option<i64> {
        match self.pages.last() {
            None => Some(1),
            Some(page) => page.next_page,
        }
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }

    /// Starts a fetch, returning the page number to request.
    ///
    /// Returns `None` while a fetch is in flight (re-entrant triggers
    /// are ignored), after an error, and once the listing is exhausted.
    pub fn begin_fetch(&mut self) -> Option<i64> {
        match self.status {
            FeedStatus::LoadingFirst | FeedStatus::LoadingMore | FeedStatus::Error => None,
            FeedStatus::Idle | FeedStatus::Ready => {
                let next = self.next_page()?;
                self.status = if self.pages.is_empty() {
                    FeedStatus::LoadingFirst
                } else {
                    FeedStatus::LoadingMore
                };
                Some(next)
            }
        }
    }

    /// Settles the fetch started by [`begin_fetch`](Self::begin_fetch):
    /// appends the page on success, enters the terminal error state on
    /// failure.
    pub fn complete_fetch(
        &mut self,
        result: Result<Page<Item>, ItemsError>,
    ) -> Result<(), ItemsError> {
        match result {
            Ok(page) => {
                self.pages.push(page);
                self.status = FeedStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = FeedStatus::Error;
                Err(e)
            }
        }
    }

    /// Loads the first page.
    pub async fn load_first(&mut self, client: &CachedClient) -> Result<bool, ItemsError> {
        self.fetch_next(client).await
    }

    /// The viewport-intersection trigger: fetches the next page unless a
    /// fetch is already in flight or the listing is exhausted. Returns
    /// whether a fetch actually happened.
    pub async fn on_last_row_visible(
        &mut self,
        client: &CachedClient,
    ) -> Result<bool, ItemsError> {
        self.fetch_next(client).await
    }

    async fn fetch_next(&mut self, client: &CachedClient) -> Result<bool, ItemsError> {
        let Some(page) = self.begin_fetch() else {
            return Ok(false);
        };
        tracing::debug!("fetching page {} (limit {})", page, self.limit);
        let result = client.get_page(page, self.limit).await;
        self.complete_fetch(result)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use items_api::types::{next_page_after, Page};

    use super::*;

    fn page_of(page: i64, limit: i64, total: i64) -> Page<Item> {
        Page {
            data: Vec::new(),
            total,
            page,
            limit,
            next_page: next_page_after(page, limit, total),
        }
    }

    #[test]
    fn fresh_feed_asks_for_page_one() {
        let mut feed = ItemFeed::new(10);
        assert_eq!(feed.status(), FeedStatus::Idle);
        assert_eq!(feed.begin_fetch(), Some(1));
        assert_eq!(feed.status(), FeedStatus::LoadingFirst);
    }

    #[test]
    fn reentrant_trigger_ignored_while_loading() {
        let mut feed = ItemFeed::new(10);
        assert_eq!(feed.begin_fetch(), Some(1));
        // Second trigger before the first settles gets nothing.
        assert_eq!(feed.begin_fetch(), None);
        assert_eq!(feed.status(), FeedStatus::LoadingFirst);
    }

    #[test]
    fn pages_advance_in_order() {
        let mut feed = ItemFeed::new(10);
        assert_eq!(feed.begin_fetch(), Some(1));
        feed.complete_fetch(Ok(page_of(1, 10, 25))).unwrap();
        assert_eq!(feed.status(), FeedStatus::Ready);

        assert_eq!(feed.begin_fetch(), Some(2));
        assert_eq!(feed.status(), FeedStatus::LoadingMore);
        feed.complete_fetch(Ok(page_of(2, 10, 25))).unwrap();

        assert_eq!(feed.begin_fetch(), Some(3));
        feed.complete_fetch(Ok(page_of(3, 10, 25))).unwrap();

        // 25 records at limit 10: exhausted after page 3.
        assert_eq!(feed.begin_fetch(), None);
        assert!(!feed.has_next_page());
    }

    #[test]
    fn error_is_terminal() {
        let mut feed = ItemFeed::new(10);
        assert_eq!(feed.begin_fetch(), Some(1));
        let err = feed.complete_fetch(Err(ItemsError::InvalidInput("boom".to_string())));
        assert!(err.is_err());
        assert_eq!(feed.status(), FeedStatus::Error);
        assert_eq!(feed.begin_fetch(), None);
    }

    #[test]
    fn empty_listing_is_no_data_not_a_crash() {
        let mut feed = ItemFeed::new(10);
        feed.begin_fetch();
        feed.complete_fetch(Ok(page_of(1, 10, 0))).unwrap();
        assert!(feed.is_empty());
        assert_eq!(feed.total(), 0);
        assert_eq!(feed.begin_fetch(), None);
    }
}
