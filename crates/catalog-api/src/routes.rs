//! # Routes
//!
//! Axum router configuration for the product API.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - GET    /products      - List products (also `/products/`)
///   - POST   /products      - Create product (also `/products/`)
///   - GET    /products/{id} - Get product by ID
///   - PUT    /products/{id} - Update product
///   - DELETE /products/{id} - Delete product
///
/// Any other path, or another method on one of these paths, answers
/// 404 `Invalid route`.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(product_routes())
        .fallback(handlers::invalid_route)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Product CRUD routes without middleware
fn product_routes() -> Router<AppState> {
    let collection = get(handlers::list_products)
        .post(handlers::create_product)
        .fallback(handlers::invalid_route);

    Router::new()
        .route("/products", collection.clone())
        .route("/products/", collection)
        .route(
            "/products/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product)
                .fallback(handlers::invalid_route),
        )
}

/// Create a minimal router for testing
#[cfg(test)]
pub fn create_test_router(state: AppState) -> Router {
    product_routes()
        .fallback(handlers::invalid_route)
        .with_state(state)
}
