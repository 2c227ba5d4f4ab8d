//! Client-side validation: per-field draft rules and pagination guards.
//!
//! Field validators return a [`FieldError`] naming the field they belong
//! to, so the caller can display each message next to the field that
//! failed. Nothing here touches the network.

use items_api::types::Status;

use crate::error::ItemsError;

/// Form field a validation error is scoped to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Description,
    Price,
    Category,
    Status,
    Tags,
    Rating,
    Stock,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Field::Name => "name",
                Field::Description => "description",
                Field::Price => "price",
                Field::Category => "category",
                Field::Status => "status",
                Field::Tags => "tags",
                Field::Rating => "rating",
                Field::Stock => "stock",
            }
        )
    }
}

/// A validation failure scoped to a single form field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for FieldError {}

fn field_err(field: Field, message: &str) -> FieldError {
    FieldError {
        field,
        message: message.to_string(),
    }
}

fn required_text(field: Field, input: &str) -> Result<String, FieldError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(field_err(field, "must not be empty"));
    }
    Ok(trimmed.to_string())
}

/// Validate the item name: non-empty after trimming.
pub fn validate_name(input: &str) -> Result<String, FieldError> {
    required_text(Field::Name, input)
}

/// Validate the item description: non-empty after trimming.
pub fn validate_description(input: &str) -> Result<String, FieldError> {
    required_text(Field::Description, input)
}

/// Validate the category: non-empty after trimming.
pub fn validate_category(input: &str) -> Result<String, FieldError> {
    required_text(Field::Category, input)
}

/// Validate the price: a finite number strictly greater than zero.
pub fn validate_price(price: f64) -> Result<f64, FieldError> {
    if !price.is_finite() {
        return Err(field_err(Field::Price, "must be a number"));
    }
    if price <= 0.0 {
        return Err(field_err(Field::Price, "must be greater than 0"));
    }
    Ok(price)
}

/// Validate the rating: a finite number in `[0, 5]`.
pub fn validate_rating(rating: f64) -> Result<f64, FieldError> {
    if !rating.is_finite() {
        return Err(field_err(Field::Rating, "must be a number"));
    }
    if !(0.0..=5.0).contains(&rating) {
        return Err(field_err(Field::Rating, "must be between 0 and 5"));
    }
    Ok(rating)
}

/// Validate the stock count: a non-negative integer.
pub fn validate_stock(stock: i64) -> Result<i64, FieldError> {
    if stock < 0 {
        return Err(field_err(Field::Stock, "must not be negative"));
    }
    Ok(stock)
}

/// Validate the tag list: at least one tag is required.
pub fn validate_tags(tags: &[String]) -> Result<(), FieldError> {
    if tags.is_empty() {
        return Err(field_err(Field::Tags, "at least one tag is required"));
    }
    Ok(())
}

/// Validate a status string: case-insensitive `active` or `inactive`.
pub fn validate_status(input: &str) -> Result<Status, FieldError> {
    match input.trim().to_lowercase().as_str() {
        "active" => Ok(Status::Active),
        "inactive" => Ok(Status::Inactive),
        _ => Err(field_err(
            Field::Status,
            "must be one of: active, inactive",
        )),
    }
}

/// Validate page number (must be >= 1).
pub fn validate_page(page: i64) -> Result<i64, ItemsError> {
    if page < 1 {
        return Err(ItemsError::InvalidInput(
            "page must be >= 1".to_string(),
        ));
    }
    Ok(page)
}

/// Validate page size (must be >= 1).
pub fn validate_limit(limit: i64) -> Result<i64, ItemsError> {
    if limit < 1 {
        return Err(ItemsError::InvalidInput(
            "limit must be >= 1".to_string(),
        ));
    }
    Ok(limit)
}
