//! Error types for the library layer.

use std::fmt;

use crate::validation::FieldError;

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding serialization and validation failures.
#[derive(Debug)]
pub enum ItemsError {
    /// An error from the underlying API client.
    Api(items_api::Error),
    /// JSON serialization or deserialization failed.
    Serialization(serde_json::Error),
    /// One or more form fields failed client-side validation.
    /// These never reach the network layer.
    Validation(Vec<FieldError>),
    /// User-provided input failed a standalone check.
    InvalidInput(String),
}

impl fmt::Display for ItemsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::Validation(errors) => {
                let list = errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; ");
                write!(f, "Validation failed: {}", list)
            }
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for ItemsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<items_api::Error> for ItemsError {
    fn from(e: items_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for ItemsError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
