//! Cart line items and the product references used to create them.

use serde::{Deserialize, Serialize};

use super::{ProductId, Quantity};

/// One product + quantity entry in the cart.
///
/// This is also the persisted shape: a JSON object with `id`, `name`,
/// `image`, `category` and `qty`. A stored item without `category` loads with
/// an empty category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    #[serde(default)]
    pub category: String,
    pub qty: Quantity,
}

impl CartItem {
    /// Build a new line item from a product reference.
    #[must_use]
    pub fn from_ref(product: ProductRef, qty: Quantity) -> Self {
        Self {
            id: product.id,
            name: product.name,
            image: product.image,
            category: product.category.unwrap_or_default(),
            qty,
        }
    }
}

/// What a caller knows about a product when asking for it to be quoted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRef {
    pub id: ProductId,
    pub name: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl ProductRef {
    /// Create a reference without a category.
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            category: None,
        }
    }

    /// Attach a category label.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}
