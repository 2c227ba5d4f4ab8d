//! HTTP client for the items REST resource.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    query::PageQuery,
    types::{next_page_after, Item, ItemDraft, Page},
    Error,
};

/// How the transport encodes the body of a listing response.
///
/// The two shapes are normalized by explicit adapters selected here at
/// construction time; the body is never shape-sniffed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResponseShape {
    /// Body is a plain JSON array of items (production transport).
    #[default]
    Bare,
    /// Body is wrapped as `{"data": [...]}` (test-double transport).
    Wrapped,
}

/// HTTP client for the items resource.
///
/// Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout. The total record count comes from the `x-total-count`
/// response header; a missing header counts as zero.
pub struct Client {
    /// Base URL for the resource. Defaults to `http://localhost:3001`.
    base_api_url: String,
    shape: ResponseShape,
}

/// Wrapped-shape listing body. The test double may carry its own total;
/// when it does, that value wins over the header.
#[derive(Deserialize)]
struct WrappedBody<T> {
    data: Vec<T>,
    total: Option<i64>,
}

/// Creation payload: the draft plus both timestamps, stamped at the
/// same instant.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewItemBody<'a> {
    #[serde(flatten)]
    draft: &'a ItemDraft,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the default local items server.
    pub fn new() -> Self {
        Self {
            base_api_url: "http://localhost:3001".to_string(),
            shape: ResponseShape::Bare,
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            shape: ResponseShape::Bare,
        }
    }

    /// Selects the response-shape adapter for listing bodies.
    pub fn with_shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }

    fn get_url(&self, path: &str, query: Option<&PageQuery>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    fn http_client(&self) -> Result<reqwest::Client, Error> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })
    }

    /// Fetches one page of items.
    ///
    /// Issues `GET /items?_page=P&_limit=L` and normalizes the response
    /// into a [`Page`], whichever body shape the transport uses.
    pub async fn get_items(&self, query: &PageQuery) -> Result<Page<Item>, Error> {
        let url = self.get_url("/items", Some(query))?;
        let client = self.http_client()?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get items: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let header_total = resp
            .headers()
            .get("x-total-count")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<i64>().ok())
            .unwrap_or(0);

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let (data, total) = match self.shape {
            ResponseShape::Bare => {
                let data = serde_json::from_str::<Vec<Item>>(&body).map_err(|e| {
                    tracing::error!("No items array in response: {} | body: {}", e, truncate_body(&body));
                    Error::MalformedResponse
                })?;
                (data, header_total)
            }
            ResponseShape::Wrapped => {
                let wrapped = serde_json::from_str::<WrappedBody<Item>>(&body).map_err(|e| {
                    tracing::error!("No data field in response: {} | body: {}", e, truncate_body(&body));
                    Error::MalformedResponse
                })?;
                (wrapped.data, wrapped.total.unwrap_or(header_total))
            }
        };

        Ok(Page {
            data,
            total,
            page: query.page,
            limit: query.limit,
            next_page: next_page_after(query.page, query.limit, total),
        })
    }

    /// Creates a new item.
    ///
    /// Posts the draft with `createdAt` and `updatedAt` stamped to the
    /// current instant and returns the stored record verbatim.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<Item, Error> {
        let url = self.get_url("/items", None)?;
        let now = Utc::now();
        let payload = NewItemBody {
            draft,
            created_at: now,
            updated_at: now,
        };

        let client = self.http_client()?;
        let resp = client
            .post(url)
            .header("accept", "application/json, text/plain, */*")
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to post item: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Create failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        serde_json::from_str::<Item>(&body).map_err(|e| {
            tracing::error!("Failed to parse created item: {} | body: {}", e, truncate_body(&body));
            Error::MalformedResponse
        })
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back off to a char boundary so multibyte bodies slice cleanly.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
