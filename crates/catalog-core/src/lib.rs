//! # catalog-core
//!
//! Core types and the in-memory store for the product catalog.
//!
//! This crate provides:
//! - `Product`, the single catalog entity
//! - `NewProduct` and `ProductPatch`, validated create/update payloads
//! - `ProductStore`, the ordered in-memory collection with its id counter
//! - `CatalogError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use catalog_core::{NewProduct, ProductPatch, ProductStore};
//!
//! let mut store = ProductStore::new();
//!
//! let pen = store.create(NewProduct::new("Pen", "Blue ink", 1.5).unwrap());
//! assert_eq!(pen.id, 1);
//!
//! let pen = store
//!     .update_by_id(pen.id, ProductPatch::default().with_price(2.0))
//!     .unwrap();
//! assert_eq!(pen.product_price, 2.0);
//!
//! assert!(store.delete_by_id(pen.id).is_some());
//! assert!(store.get_by_id(pen.id).is_none());
//! ```

pub mod error;
pub mod product;
pub mod store;

// Re-exports for convenience
pub use error::{CatalogError, CatalogResult};
pub use product::{NewProduct, Product, ProductPatch};
pub use store::ProductStore;
