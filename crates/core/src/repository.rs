//! Cart repository: commands and queries over the stored cart.
//!
//! The slot is the only copy of the cart. Every command reads it, applies
//! its change and writes the whole cart back before returning, and every
//! query reads it fresh. Two contexts sharing a slot therefore only lose an
//! update when their read-modify-write cycles actually interleave.
//!
//! Input problems never surface as errors. Quantities are clamped, unknown ids
//! are ignored, and storage trouble is absorbed by the storage adapter.

use crate::cart::Cart;
use crate::storage::CartStorage;
use crate::types::{ProductId, ProductRef, Quantity};

/// Command/query service over the quotation cart.
#[derive(Debug)]
pub struct CartRepository<S> {
    storage: S,
}

impl<S: CartStorage> CartRepository<S> {
    /// Open the repository over a storage adapter.
    pub const fn open(storage: S) -> Self {
        Self { storage }
    }

    /// Add a product, or increase its quantity if it is already in the cart.
    ///
    /// Returns the updated snapshot.
    pub fn add(&mut self, product: ProductRef, qty: Quantity) -> Cart {
        tracing::debug!(product_id = %product.id, qty = qty.get(), "Adding to cart");
        self.modify(|cart| cart.upsert(product, qty))
    }

    /// Add a single unit of a product.
    pub fn add_one(&mut self, product: ProductRef) -> Cart {
        self.add(product, Quantity::ONE)
    }

    /// Remove a product. Removing an id that is not in the cart changes nothing.
    pub fn remove(&mut self, id: &ProductId) -> Cart {
        self.modify(|cart| {
            let removed = cart.remove(id);
            tracing::debug!(product_id = %id, removed, "Removing from cart");
        })
    }

    /// Set a product's quantity from raw user input.
    ///
    /// The input goes through [`Quantity::parse_clamped`], so unparseable or
    /// sub-one values become 1. An unknown id leaves the cart as it was, but
    /// the cart is still persisted.
    pub fn update_qty(&mut self, id: &ProductId, raw: &str) -> Cart {
        self.set_qty(id, Quantity::parse_clamped(raw))
    }

    /// Set a product's quantity.
    pub fn set_qty(&mut self, id: &ProductId, qty: Quantity) -> Cart {
        self.modify(|cart| {
            let applied = cart.set_quantity(id, qty);
            tracing::debug!(product_id = %id, qty = qty.get(), applied, "Updating quantity");
        })
    }

    /// Delete the persisted cart.
    pub fn clear(&mut self) {
        tracing::debug!("Clearing cart");
        self.storage.clear();
    }

    /// Snapshot of the stored cart.
    #[must_use]
    pub fn get_all(&self) -> Cart {
        self.storage.load()
    }

    /// Total units in the cart (sum of quantities, not line count).
    #[must_use]
    pub fn count(&self) -> u64 {
        self.get_all().total_units()
    }

    /// Storage revision; advances on every persisted change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.storage.revision()
    }

    /// Borrow the storage adapter.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Unwrap into the storage adapter.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn modify(&mut self, change: impl FnOnce(&mut Cart)) -> Cart {
        let mut cart = self.storage.load();
        change(&mut cart);
        self.storage.save(&cart);
        cart
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use proptest::prelude::*;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore, SlotStorage};

    type MemoryRepository = CartRepository<SlotStorage<MemoryStore>>;

    fn repo() -> MemoryRepository {
        CartRepository::open(SlotStorage::with_default_key(MemoryStore::new()))
    }

    fn product(id: &str) -> ProductRef {
        ProductRef::new(id, format!("Product {id}"), format!("/img/{id}.png"))
    }

    fn id(value: &str) -> ProductId {
        ProductId::from(value)
    }

    fn quantities(cart: &Cart) -> Vec<(&str, u32)> {
        cart.iter().map(|i| (i.id.as_str(), i.qty.get())).collect()
    }

    #[test]
    fn test_add_existing_increments_quantity() {
        let mut repo = repo();
        repo.add_one(product("A"));
        let cart = repo.add(product("A"), Quantity::at_least_one(2));
        assert_eq!(quantities(&cart), [("A", 3)]);
    }

    #[test]
    fn test_add_defaults_category_to_empty() {
        let mut repo = repo();
        let cart = repo.add_one(product("A"));
        assert_eq!(cart.items().first().map(|i| i.category.as_str()), Some(""));
    }

    #[test]
    fn test_remove_missing_returns_unchanged_snapshot() {
        let mut repo = repo();
        repo.add_one(product("A"));
        let before = repo.get_all();
        let after = repo.remove(&id("missing"));
        assert_eq!(before, after);
    }

    #[test]
    fn test_remove_existing() {
        let mut repo = repo();
        repo.add_one(product("A"));
        repo.add_one(product("B"));
        let cart = repo.remove(&id("A"));
        assert_eq!(quantities(&cart), [("B", 1)]);
    }

    #[test]
    fn test_update_qty_non_numeric_clamps_to_one() {
        let mut repo = repo();
        repo.add(product("A"), Quantity::at_least_one(5));
        let cart = repo.update_qty(&id("A"), "abc");
        assert_eq!(quantities(&cart), [("A", 1)]);
    }

    #[test]
    fn test_update_qty_below_one_clamps_to_one() {
        let mut repo = repo();
        repo.add(product("A"), Quantity::at_least_one(5));
        assert_eq!(quantities(&repo.update_qty(&id("A"), "0")), [("A", 1)]);
        assert_eq!(quantities(&repo.update_qty(&id("A"), "-4")), [("A", 1)]);
    }

    #[test]
    fn test_update_qty_unknown_id_still_persists() {
        let mut repo = repo();
        repo.add_one(product("A"));
        let revision = repo.revision();
        let cart = repo.update_qty(&id("B"), "9");
        assert_eq!(quantities(&cart), [("A", 1)]);
        assert_eq!(repo.revision(), revision + 1);
    }

    #[test]
    fn test_count_is_total_units() {
        let mut repo = repo();
        repo.add(product("A"), Quantity::at_least_one(2));
        repo.add(product("B"), Quantity::at_least_one(3));
        assert_eq!(repo.count(), 5);
    }

    #[test]
    fn test_clear_empties_and_deletes_slot() {
        let mut repo = repo();
        repo.add_one(product("A"));
        repo.clear();
        assert!(repo.get_all().is_empty());
        assert_eq!(repo.count(), 0);
        assert!(repo.storage().store().raw(SlotStorage::<MemoryStore>::DEFAULT_KEY).is_none());
    }

    #[test]
    fn test_open_loads_persisted_cart() {
        let mut first = repo();
        first.add_one(product("A"));
        first.add_one(product("B"));
        let store = first.into_storage().into_store();

        let second = CartRepository::open(SlotStorage::with_default_key(store));
        assert_eq!(quantities(&second.get_all()), [("A", 1), ("B", 1)]);
    }

    #[test]
    fn test_commands_start_from_stored_cart() {
        let mut repo = repo();
        repo.add_one(product("A"));

        // Another context replaces the slot between commands.
        let key = SlotStorage::<MemoryStore>::DEFAULT_KEY;
        let mut storage = repo.into_storage();
        storage
            .store_mut()
            .set_item(key, r#"[{"id":"Z","name":"z","image":"","qty":4}]"#)
            .expect("memory write");
        let mut repo = CartRepository::open(storage);

        assert_eq!(quantities(&repo.get_all()), [("Z", 4)]);
        let cart = repo.add_one(product("B"));
        assert_eq!(quantities(&cart), [("Z", 4), ("B", 1)]);
    }

    #[derive(Debug, Clone)]
    enum Op {
        Add(u8, u32),
        Remove(u8),
        UpdateQty(u8, String),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..5, 1u32..10).prop_map(|(p, q)| Op::Add(p, q)),
            (0u8..6).prop_map(Op::Remove),
            (0u8..6, "[-0-9a-z ]{0,4}").prop_map(|(p, raw)| Op::UpdateQty(p, raw)),
        ]
    }

    proptest! {
        #[test]
        fn test_invariants_hold_for_any_sequence(ops in prop::collection::vec(op(), 0..40)) {
            let mut repo = repo();
            for op in ops {
                match op {
                    Op::Add(p, q) => {
                        repo.add(product(&p.to_string()), Quantity::at_least_one(q));
                    }
                    Op::Remove(p) => {
                        repo.remove(&id(&p.to_string()));
                    }
                    Op::UpdateQty(p, raw) => {
                        repo.update_qty(&id(&p.to_string()), &raw);
                    }
                }

                let cart = repo.get_all();
                let unique: HashSet<_> = cart.iter().map(|i| &i.id).collect();
                prop_assert_eq!(unique.len(), cart.len());
                prop_assert!(cart.iter().all(|i| i.qty.get() >= 1));
                prop_assert_eq!(repo.storage().load(), cart);
            }
        }
    }
}
