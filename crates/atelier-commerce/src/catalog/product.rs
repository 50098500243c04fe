//! Product type.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Read-only to the stores: cart, wishlist, and compare each hold their own
/// clone and never mutate its fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Image reference (URL or asset path).
    pub image: String,
    /// Full description.
    pub description: String,
    /// Category for filtering.
    #[serde(default)]
    pub category: Option<String>,
    /// Average rating, 0.0 to 5.0.
    #[serde(default)]
    pub rating: Option<f32>,
    /// Units in stock.
    #[serde(default)]
    pub stock: Option<i64>,
    /// Advertised discount percentage.
    #[serde(default)]
    pub discount: Option<f32>,
    /// Price before the discount.
    #[serde(default)]
    pub old_price: Option<Money>,
}

impl Product {
    /// Create a product with the required fields.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image: String::new(),
            description: String::new(),
            category: None,
            rating: None,
            stock: None,
            discount: None,
            old_price: None,
        }
    }

    /// Set the image reference.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the pre-discount price.
    pub fn with_old_price(mut self, old_price: Money) -> Self {
        self.old_price = Some(old_price);
        self
    }

    /// Whether the product has stock available.
    ///
    /// Unknown stock counts as available; the catalog is a display mock,
    /// not an inventory system.
    pub fn in_stock(&self) -> bool {
        self.stock.map_or(true, |units| units > 0)
    }

    /// Whether the old price marks this product as on sale.
    pub fn is_on_sale(&self) -> bool {
        self.old_price
            .map(|old| old.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Discount percentage derived from old vs. current price.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.old_price.and_then(|old| {
            if old.amount_cents > self.price.amount_cents {
                let savings = old.amount_cents - self.price.amount_cents;
                Some((savings as f64 / old.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(1, "Walnut Desk", Money::new(24900, Currency::USD))
            .with_category("office");
        assert_eq!(product.id, ProductId::from(1i64));
        assert_eq!(product.name, "Walnut Desk");
        assert_eq!(product.category.as_deref(), Some("office"));
    }

    #[test]
    fn test_unknown_stock_is_available() {
        let product = Product::new(1, "Lamp", Money::new(3500, Currency::USD));
        assert!(product.in_stock());
    }

    #[test]
    fn test_zero_stock_is_unavailable() {
        let mut product = Product::new(1, "Lamp", Money::new(3500, Currency::USD));
        product.stock = Some(0);
        assert!(!product.in_stock());
    }

    #[test]
    fn test_sale_detection() {
        let product = Product::new(1, "Rug", Money::new(2000, Currency::USD))
            .with_old_price(Money::new(3000, Currency::USD));
        assert!(product.is_on_sale());
        let pct = product.discount_percentage().unwrap();
        assert!((pct - 33.33).abs() < 0.1);
    }

    #[test]
    fn test_not_on_sale_without_markdown() {
        let product = Product::new(1, "Rug", Money::new(3000, Currency::USD))
            .with_old_price(Money::new(3000, Currency::USD));
        assert!(!product.is_on_sale());
        assert_eq!(product.discount_percentage(), None);
    }
}
