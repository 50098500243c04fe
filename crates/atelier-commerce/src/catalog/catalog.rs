//! The session product catalog.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::ProductId;

/// An ordered, immutable product sequence loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog from an already-decoded product list.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Decode a catalog from a JSON array of products.
    pub fn from_json(payload: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(payload)?;
        tracing::debug!(count = products.len(), "catalog loaded");
        Ok(Self { products })
    }

    /// Look up a product by id.
    pub fn get(&self, id: impl Into<ProductId>) -> Option<&Product> {
        let id = id.into();
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, erroring on a miss.
    pub fn require(&self, id: impl Into<ProductId>) -> Result<&Product, CommerceError> {
        let id = id.into();
        self.products
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.into_inner()))
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products in a category, preserving catalog order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| p.category.as_deref() == Some(category))
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
