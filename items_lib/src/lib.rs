//! Library layer for the items client: cached API access, the two
//! listing strategies, and the creation form.
//!
//! Wraps the `items_api` crate with an in-memory page cache, client-side
//! validation, and the presenter state machines driving the listing and
//! creation flows.

pub mod cache;
pub mod client;
pub mod error;
pub mod feed;
pub mod form;
pub mod pager;
pub mod validation;

pub use items_api;
pub use items_api::types;
pub use items_api::{Client, PageQuery, ResponseShape};

pub use cache::PageCache;
pub use client::CachedClient;
pub use error::ItemsError;
pub use feed::{FeedStatus, ItemFeed};
pub use form::ItemForm;
pub use pager::ItemPager;
pub use validation::{Field, FieldError};
