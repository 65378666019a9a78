//! # Product Store
//!
//! In-memory holder of every product record and the id counter.
//!
//! Records are kept in insertion order. Ids come from a counter that starts
//! at 1 and only ever increases, so ids are unique and never reused, even
//! after a delete. Lookups report absence with `None`; turning that into an
//! error response is the caller's job.

use crate::product::{NewProduct, Product, ProductPatch};

/// Ordered, in-memory product collection
#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Create an empty store; the first product gets id 1
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// All products, in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Find a product by id
    pub fn get_by_id(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Check if a product with this id exists
    pub fn contains(&self, id: u64) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Assign the next id, append, and return the stored record
    pub fn create(&mut self, new: NewProduct) -> Product {
        let product = Product::from_new(self.next_id, new);
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    /// Merge `patch` into the product with this id and return the result
    pub fn update_by_id(&mut self, id: u64, patch: ProductPatch) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        patch.apply(product);
        Some(product.clone())
    }

    /// Remove the product with this id and return it
    pub fn delete_by_id(&mut self, id: u64) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Get number of products
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if store is empty
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
