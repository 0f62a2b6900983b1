//! The quotation cart collection.
//!
//! A [`Cart`] is an ordered sequence of [`CartItem`]s with unique product ids.
//! Insertion order is what the table and the checkout message show, so it is
//! never re-sorted. Mutation is crate-private: callers change a cart only
//! through [`crate::CartRepository`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::{CartItem, ProductId, ProductRef, Quantity};

/// Reasons a sequence of items cannot form a cart.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Two items share the same product id.
    #[error("duplicate product id in cart: {0}")]
    DuplicateId(ProductId),
}

/// Ordered, id-unique collection of line items.
///
/// Serializes as a plain JSON array of items. Deserializing an array that
/// repeats an id fails, so a corrupted slot can never produce a cart that
/// breaks the uniqueness invariant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CartItem>", into = "Vec<CartItem>")]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a cart from items, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::DuplicateId`] if two items share an id.
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, CartError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CartError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Line items in cart order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Iterate over line items in cart order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartItem> {
        self.items.iter()
    }

    /// Number of line items (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a line item by product id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Whether a product is in the cart.
    #[must_use]
    pub fn contains(&self, id: &ProductId) -> bool {
        self.get(id).is_some()
    }

    /// Total units: the sum of every line item's quantity.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.qty.get())).sum()
    }

    /// Insert a product or increase the quantity of an existing line.
    pub(crate) fn upsert(&mut self, product: ProductRef, qty: Quantity) {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == product.id) {
            existing.qty = existing.qty.saturating_add(qty);
        } else {
            self.items.push(CartItem::from_ref(product, qty));
        }
    }

    /// Remove a line item. Returns whether anything was removed.
    pub(crate) fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| &item.id != id);
        self.items.len() != before
    }

    /// Overwrite a line item's quantity. Returns whether the id was present.
    pub(crate) fn set_quantity(&mut self, id: &ProductId, qty: Quantity) -> bool {
        match self.items.iter_mut().find(|item| &item.id == id) {
            Some(item) => {
                item.qty = qty;
                true
            }
            None => false,
        }
    }
}

impl TryFrom<Vec<CartItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<CartItem>) -> Result<Self, Self::Error> {
        Self::from_items(items)
    }
}

impl From<Cart> for Vec<CartItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartItem;
    type IntoIter = std::slice::Iter<'a, CartItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: &str) -> ProductRef {
        ProductRef::new(id, format!("Product {id}"), format!("{id}.png"))
    }

    fn qty(n: u32) -> Quantity {
        Quantity::at_least_one(n)
    }

    #[test]
    fn test_upsert_appends_in_order() {
        let mut cart = Cart::new();
        cart.upsert(product("B"), Quantity::ONE);
        cart.upsert(product("A"), Quantity::ONE);

        let ids: Vec<_> = cart.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn test_upsert_increments_existing() {
        let mut cart = Cart::new();
        cart.upsert(product("A"), Quantity::ONE);
        cart.upsert(product("A"), qty(2));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(&ProductId::from("A")).map(|i| i.qty.get()), Some(3));
    }

    #[test]
    fn test_total_units_sums_quantities() {
        let mut cart = Cart::new();
        cart.upsert(product("A"), qty(2));
        cart.upsert(product("B"), qty(3));
        assert_eq!(cart.total_units(), 5);
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut cart = Cart::new();
        cart.upsert(product("A"), Quantity::ONE);
        assert!(!cart.remove(&ProductId::from("missing")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_ids() {
        let json = r#"[
            {"id":"A","name":"a","image":"","qty":1},
            {"id":"A","name":"a","image":"","qty":2}
        ]"#;
        assert!(serde_json::from_str::<Cart>(json).is_err());
    }

    #[test]
    fn test_serializes_as_array() {
        let mut cart = Cart::new();
        cart.upsert(product("A"), Quantity::ONE);
        let json = serde_json::to_string(&cart).expect("serialize");
        assert!(json.starts_with('['));
        assert!(json.ends_with(']'));
    }
}
