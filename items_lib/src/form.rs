//! Creation-form state: field values, the tag buffer, and the submit
//! lifecycle.

use items_api::types::{Item, ItemDraft, Status};

use crate::client::CachedClient;
use crate::error::ItemsError;
use crate::validation::{self, FieldError};

/// State of the item-creation form.
///
/// Field values are bound directly; the tag list is auxiliary state fed
/// from a free-text buffer and synchronized into the draft. Validation
/// runs on submit and its failures are field-scoped, so the caller can
/// render each message next to the field it belongs to.
#[derive(Clone, Debug)]
pub struct ItemForm {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub status: Status,
    pub rating: f64,
    pub stock: i64,
    pub is_available: bool,
    tag_input: String,
    tags: Vec<String>,
    errors: Vec<FieldError>,
    submitting: bool,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price: 0.0,
            category: String::new(),
            status: Status::Active,
            rating: 0.0,
            stock: 0,
            is_available: true,
            tag_input: String::new(),
            tags: Vec::new(),
            errors: Vec::new(),
            submitting: false,
        }
    }
}

impl ItemForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current content of the free-text tag buffer.
    pub fn tag_input(&self) -> &str {
        &self.tag_input
    }

    pub fn set_tag_input(&mut self, text: impl Into<String>) {
        self.tag_input = text.into();
    }

    /// Committed tags, in entry order. Duplicates are permitted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Commits the tag buffer: appends the trimmed token to the tag list
    /// and clears the buffer, as one transition. A blank buffer commits
    /// nothing and is left untouched.
    pub fn commit_tag(&mut self) -> bool {
        let token = self.tag_input.trim();
        if token.is_empty() {
            return false;
        }
        self.tags.push(token.to_string());
        self.tag_input.clear();
        true
    }

    /// Removes the tag at `index`, returning it.
    pub fn remove_tag(&mut self, index: usize) -> Option<String> {
        if index < self.tags.len() {
            Some(self.tags.remove(index))
        } else {
            None
        }
    }

    /// Field-scoped errors from the most recent validation pass.
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Runs every field rule, storing the failures for display.
    /// Returns the draft when everything passes.
    fn validate(&mut self) -> Option<ItemDraft> {
        let mut errors = Vec::new();

        let name = validation::validate_name(&self.name).map_err(|e| errors.push(e)).ok();
        let description = validation::validate_description(&self.description)
            .map_err(|e| errors.push(e))
            .ok();
        let price = validation::validate_price(self.price)
            .map_err(|e| errors.push(e))
            .ok();
        let category = validation::validate_category(&self.category)
            .map_err(|e| errors.push(e))
            .ok();
        if let Err(e) = validation::validate_tags(&self.tags) {
            errors.push(e);
        }
        let rating = validation::validate_rating(self.rating)
            .map_err(|e| errors.push(e))
            .ok();
        let stock = validation::validate_stock(self.stock)
            .map_err(|e| errors.push(e))
            .ok();

        self.errors = errors;
        if !self.errors.is_empty() {
            return None;
        }

        Some(ItemDraft {
            name: name?,
            description: description?,
            price: price?,
            category: category?,
            status: self.status,
            tags: self.tags.clone(),
            rating: rating?,
            stock: stock?,
            is_available: self.is_available,
        })
    }

    /// Starts a submission: validates and flips the submitting flag.
    ///
    /// Fails without any network side effect when a submission is
    /// already in flight or a field rule is violated.
    pub fn begin_submit(&mut self) -> Result<ItemDraft, ItemsError> {
        if self.submitting {
            return Err(ItemsError::InvalidInput(
                "a submission is already in flight".to_string(),
            ));
        }
        match self.validate() {
            Some(draft) => {
                self.submitting = true;
                Ok(draft)
            }
            None => Err(ItemsError::Validation(self.errors.clone())),
        }
    }

    /// Settles a successful submission: the form returns to its
    /// defaults and the tag state clears.
    pub fn submit_succeeded(&mut self) {
        *self = Self::default();
    }

    /// Settles a failed submission: the form stays populated so the
    /// user can retry.
    pub fn submit_failed(&mut self) {
        self.submitting = false;
    }

    /// Submits the form through the cached client, which invalidates
    /// the listing cache on success.
    pub async fn submit(&mut self, client: &CachedClient) -> Result<Item, ItemsError> {
        let draft = self.begin_submit()?;
        match client.create_item(&draft).await {
            Ok(item) => {
                self.submit_succeeded();
                Ok(item)
            }
            Err(e) => {
                self.submit_failed();
                Err(e)
            }
        }
    }
}
