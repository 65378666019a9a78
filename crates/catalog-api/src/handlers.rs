//! # Request Handlers
//!
//! Axum request handlers for the product API.
//!
//! Lookup and create failures answer with a JSON `{"message": ...}` body;
//! update and delete misses, and unknown routes, answer in plain text.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::{CatalogError, CatalogResult, NewProduct, Product, ProductPatch};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<&CatalogError> for ErrorResponse {
    fn from(err: &CatalogError) -> Self {
        Self::new(err.message())
    }
}

fn status_of(err: &CatalogError) -> StatusCode {
    StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn json_error(err: CatalogError) -> (StatusCode, Json<ErrorResponse>) {
    (status_of(&err), Json(ErrorResponse::from(&err)))
}

fn text_error(err: CatalogError) -> (StatusCode, String) {
    (status_of(&err), err.message())
}

fn not_found(id: &str) -> CatalogError {
    CatalogError::ProductNotFound { id: id.to_string() }
}

/// Parse a `:id` path segment.
///
/// Leading whitespace and a `+` sign are skipped, then the leading run of
/// digits is the id, so `1.5` and `1abc` both name product 1. No digits, a
/// negative number, or an overflowing one yields `None`, which can never
/// match a stored product, so callers report "not found".
fn parse_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_start();
    let unsigned = match trimmed.strip_prefix('-') {
        Some(_) => return None,
        None => trimmed.strip_prefix('+').unwrap_or(trimmed),
    };
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .map_or(unsigned, |end| &unsigned[..end]);
    digits.parse().ok()
}

/// True when the request declares a JSON body
fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Parse a request body as JSON.
///
/// A body without an `application/json` content type, or an empty one,
/// counts as `{}`.
fn parse_body(headers: &HeaderMap, body: &[u8]) -> CatalogResult<Value> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }
    serde_json::from_slice(body).map_err(|e| CatalogError::MalformedBody(e.to_string()))
}

// =============================================================================
// Handlers
// =============================================================================

/// List every product in insertion order
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    let store = state.store.read().await;
    Json(store.list().to_vec())
}

/// Get a single product
#[instrument(skip(state))]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    let store = state.store.read().await;

    parse_id(&id)
        .and_then(|product_id| store.get_by_id(product_id))
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            debug!("No product with id {}", id);
            json_error(not_found(&id))
        })
}

/// Create a product
#[instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Product>), (StatusCode, Json<ErrorResponse>)> {
    let new = parse_body(&headers, &body)
        .and_then(|value| NewProduct::from_json(&value))
        .map_err(|e| {
            warn!("Rejected product: {}", e);
            json_error(e)
        })?;

    let product = state.store.write().await.create(new);

    info!("Created product {}: {}", product.id, product.product_name);

    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product with a partial field set
#[instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Product>, Response> {
    let mut store = state.store.write().await;

    // Lookup comes first: an unknown id is a 404 whatever the body holds
    let Some(product_id) = parse_id(&id).filter(|product_id| store.contains(*product_id)) else {
        debug!("No product with id {}", id);
        return Err(text_error(not_found(&id)).into_response());
    };

    let patch = parse_body(&headers, &body)
        .and_then(|value| ProductPatch::from_json(&value))
        .map_err(|e| {
            warn!("Rejected update for product {}: {}", product_id, e);
            json_error(e).into_response()
        })?;

    if patch.is_empty() {
        debug!("Update for product {} changes no fields", product_id);
    }

    let product = store
        .update_by_id(product_id, patch)
        .ok_or_else(|| text_error(not_found(&id)).into_response())?;

    info!("Updated product {}", product.id);

    Ok(Json(product))
}

/// Delete a product, answering with the removed record
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let mut store = state.store.write().await;

    let product = parse_id(&id)
        .and_then(|product_id| store.delete_by_id(product_id))
        .ok_or_else(|| {
            debug!("No product with id {}", id);
            text_error(not_found(&id))
        })?;

    info!("Deleted product {}", product.id);

    Ok(Json(product))
}

/// Fallback for any method/path pair without a handler
pub async fn invalid_route(method: Method, uri: Uri) -> (StatusCode, String) {
    debug!("No route for {} {}", method, uri);
    text_error(CatalogError::InvalidRoute)
}
