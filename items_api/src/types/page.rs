//! Normalized pagination envelope.

use serde::{Deserialize, Serialize};

/// One fetched batch of records plus pagination metadata.
///
/// Both transport shapes are normalized into this struct, so callers
/// never see shape-specific fields.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    /// Total matching records across all pages, from `x-total-count`.
    pub total: i64,
    /// 1-indexed page number this batch corresponds to.
    pub page: i64,
    pub limit: i64,
    /// `page + 1` when more pages exist, `None` on the last page.
    pub next_page: Option<i64>,
}

impl<T> Page<T> {
    /// Total page count for a selector control, `ceil(total / limit)`.
    pub fn total_pages(&self) -> i64 {
        total_pages(self.total, self.limit)
    }
}

pub(crate) fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

/// The one derived invariant of the pagination contract:
/// `next_page = page + 1` iff `page * limit < total`, else `None`.
pub fn next_page_after(page: i64, limit: i64, total: i64) -> Option<i64> {
    if page < total_pages(total, limit) {
        Some(page + 1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_page_empty_resource() {
        assert_eq!(next_page_after(1, 10, 0), None);
    }

    #[test]
    fn next_page_exact_fit() {
        // page * limit == total: no further page
        assert_eq!(next_page_after(1, 10, 10), None);
        assert_eq!(next_page_after(3, 10, 30), None);
    }

    #[test]
    fn next_page_one_past_boundary() {
        assert_eq!(next_page_after(1, 10, 11), Some(2));
        assert_eq!(next_page_after(2, 10, 21), Some(3));
    }

    #[test]
    fn next_page_middle_of_listing() {
        assert_eq!(next_page_after(2, 10, 25), Some(3));
        assert_eq!(next_page_after(3, 10, 25), None);
    }

    #[test]
    fn next_page_limit_one() {
        assert_eq!(next_page_after(1, 1, 2), Some(2));
        assert_eq!(next_page_after(2, 1, 2), None);
    }

    #[test]
    fn next_page_matches_product_rule() {
        // next_page is Some iff page * limit < total
        for page in 1..=5i64 {
            for limit in 1..=5i64 {
                for total in 0..=30i64 {
                    let expect = if page * limit < total {
                        Some(page + 1)
                    } else {
                        None
                    };
                    assert_eq!(next_page_after(page, limit, total), expect);
                }
            }
        }
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
    }
}
