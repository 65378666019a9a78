//! # catalog-api
//!
//! HTTP API layer for product-catalog-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for product CRUD
//! - Environment-driven configuration
//!
//! ## Endpoints
//!
//! | Method | Path | Description | Errors |
//! |--------|------|-------------|--------|
//! | GET | `/products` | List products | |
//! | POST | `/products` | Create product | 400 JSON |
//! | GET | `/products/:id` | Get product | 404 JSON |
//! | PUT | `/products/:id` | Update product | 400 JSON (invalid field), 404 text |
//! | DELETE | `/products/:id` | Delete product | 404 text |
//!
//! Any other method/path answers 404 `Invalid route` in plain text.

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState, LogFormat, DEFAULT_PORT};
