//! # Product Types
//!
//! The single entity managed by the catalog, plus the validated payloads
//! used to create and update it.

use crate::error::{CatalogError, CatalogResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier, never changes after creation
    pub id: u64,

    /// Display name
    pub product_name: String,

    /// Short description
    pub product_description: String,

    /// Unit price, never negative
    pub product_price: f64,
}

impl Product {
    /// Build a product from an id and a validated payload
    pub fn from_new(id: u64, new: NewProduct) -> Self {
        Self {
            id,
            product_name: new.product_name,
            product_description: new.product_description,
            product_price: new.product_price,
        }
    }
}

/// Validated create payload.
///
/// Only constructible through [`NewProduct::new`] or [`NewProduct::from_json`],
/// so every instance has non-empty text fields and a non-negative price.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    product_name: String,
    product_description: String,
    product_price: f64,
}

impl NewProduct {
    /// Validate the three required fields
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
    ) -> CatalogResult<Self> {
        let product_name = name.into();
        let product_description = description.into();

        if product_name.is_empty() || product_description.is_empty() {
            return Err(CatalogError::MissingFields);
        }

        Ok(Self {
            product_name,
            product_description,
            product_price: check_price(price)?,
        })
    }

    /// Validate a parsed request body.
    ///
    /// Presence is checked for all three fields before the price is
    /// type-checked, so a body missing any field reports `MissingFields`
    /// even when the price is also wrong.
    pub fn from_json(body: &Value) -> CatalogResult<Self> {
        let fields = as_object(body)?;

        let name = supplied(fields, "product_name").and_then(non_empty_str);
        let description = supplied(fields, "product_description").and_then(non_empty_str);
        // only an absent price counts as missing; `null` fails the number check
        let price = fields.get("product_price");

        let (Some(name), Some(description), Some(price)) = (name, description, price) else {
            return Err(CatalogError::MissingFields);
        };

        let price = price.as_f64().ok_or(CatalogError::InvalidPrice)?;
        Self::new(name, description, price)
    }
}

/// Validated partial update.
///
/// There is no `id` field: the id of a stored product can't be overwritten
/// through a patch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub product_name: Option<String>,
    pub product_description: Option<String>,
    pub product_price: Option<f64>,
}

impl ProductPatch {
    /// Validate a parsed request body.
    ///
    /// Absent and `null` fields are left untouched. Unknown keys, including
    /// `id`, are ignored.
    pub fn from_json(body: &Value) -> CatalogResult<Self> {
        let fields = as_object(body)?;

        let product_name = supplied(fields, "product_name")
            .map(|v| {
                non_empty_str(v).ok_or(CatalogError::InvalidField {
                    field: "product_name",
                })
            })
            .transpose()?;

        let product_description = supplied(fields, "product_description")
            .map(|v| {
                non_empty_str(v).ok_or(CatalogError::InvalidField {
                    field: "product_description",
                })
            })
            .transpose()?;

        let product_price = supplied(fields, "product_price")
            .map(|v| v.as_f64().ok_or(CatalogError::InvalidPrice).and_then(check_price))
            .transpose()?;

        Ok(Self {
            product_name: product_name.map(str::to_string),
            product_description: product_description.map(str::to_string),
            product_price,
        })
    }

    /// Builder: set name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Builder: set price
    pub fn with_price(mut self, price: f64) -> Self {
        self.product_price = Some(price);
        self
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.product_name.is_none()
            && self.product_description.is_none()
            && self.product_price.is_none()
    }

    /// Merge supplied fields onto an existing product
    pub fn apply(self, product: &mut Product) {
        if let Some(name) = self.product_name {
            product.product_name = name;
        }
        if let Some(description) = self.product_description {
            product.product_description = description;
        }
        if let Some(price) = self.product_price {
            product.product_price = price;
        }
    }
}

fn as_object(body: &Value) -> CatalogResult<&Map<String, Value>> {
    body.as_object()
        .ok_or_else(|| CatalogError::MalformedBody("expected a JSON object".to_string()))
}

/// A field counts as supplied when present and not `null`
fn supplied<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|v| !v.is_null())
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.is_empty())
}

fn check_price(price: f64) -> CatalogResult<f64> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(CatalogError::InvalidPrice)
    }
}
