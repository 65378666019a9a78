//! # Catalog Error Types
//!
//! Typed error handling for the product catalog.
//! Store operations never fail on their own; these errors are produced by
//! request validation and by handlers reporting a missing record or route.

use thiserror::Error;

/// Core error type for catalog operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A required create field is absent, or a text field is null or empty
    #[error("Missing required fields")]
    MissingFields,

    /// Price is not a number or is negative
    #[error("Product price must be a positive number")]
    InvalidPrice,

    /// A supplied update field has the wrong type or is empty
    #[error("{field} must be a non-empty string")]
    InvalidField { field: &'static str },

    /// Request body is not a JSON object
    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// No product with this id in the store
    #[error("Product not found: {id}")]
    ProductNotFound { id: String },

    /// No handler matches the method and path
    #[error("Invalid route")]
    InvalidRoute,
}

impl CatalogError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::MissingFields => 400,
            CatalogError::InvalidPrice => 400,
            CatalogError::InvalidField { .. } => 400,
            CatalogError::MalformedBody(_) => 400,
            CatalogError::ProductNotFound { .. } => 404,
            CatalogError::InvalidRoute => 404,
        }
    }

    /// Client-facing message.
    ///
    /// Unlike `Display`, this never leaks request details such as the
    /// looked-up id or the JSON parser's diagnostic.
    pub fn message(&self) -> String {
        match self {
            CatalogError::MalformedBody(_) => "Malformed JSON body".to_string(),
            CatalogError::ProductNotFound { .. } => "Product not found".to_string(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
