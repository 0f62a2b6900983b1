//! Storage ports and the JSON cart adapter.
//!
//! Persistence is split in two layers:
//!
//! - [`KeyValueStore`] is the raw slot port: string values under string keys,
//!   the shape of a browser's local storage. Hosts provide durable
//!   implementations; [`MemoryStore`] is the in-process one.
//! - [`CartStorage`] is what the repository depends on: load/save/clear of a
//!   whole [`Cart`]. [`SlotStorage`] implements it over any slot, handling the
//!   JSON format and the fail-open rules.

use std::collections::HashMap;

use crate::cart::Cart;

/// Errors raised by a slot backend.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// The backend could not be opened at all.
    #[error("failed to open slot store at {location}: {message}")]
    Open { location: String, message: String },

    /// Reading the slot failed.
    #[error("failed to read slot {key}: {message}")]
    Read { key: String, message: String },

    /// Writing the slot failed.
    #[error("failed to write slot {key}: {message}")]
    Write { key: String, message: String },

    /// Removing the slot failed.
    #[error("failed to remove slot {key}: {message}")]
    Remove { key: String, message: String },
}

/// A durable key-value slot store.
pub trait KeyValueStore {
    /// Read the value stored under `key`, or `None` if there is none.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Write`] if the value could not be stored.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the value stored under `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Remove`] if the backend refused the delete.
    fn remove_item(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory slot store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with one pre-populated slot.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = HashMap::new();
        slots.insert(key.into(), value.into());
        Self { slots }
    }

    /// Raw value of a slot, for inspection.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.slots.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        self.slots.remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

/// Whole-cart persistence port.
///
/// None of these operations fail from the caller's point of view: loading a
/// missing or malformed value yields an empty cart, and write failures are
/// the implementation's to report.
pub trait CartStorage {
    /// Load the persisted cart, or an empty cart if there is none.
    fn load(&self) -> Cart;

    /// Persist the full cart, replacing whatever was stored.
    fn save(&mut self, cart: &Cart);

    /// Delete the persisted cart.
    fn clear(&mut self);

    /// Monotonic counter bumped by every `save` and `clear`.
    ///
    /// Views that mirror the cart resync when this advances.
    fn revision(&self) -> u64;
}

/// JSON cart storage over a single slot.
#[derive(Debug)]
pub struct SlotStorage<K> {
    store: K,
    key: String,
    revision: u64,
}

impl<K: KeyValueStore> SlotStorage<K> {
    /// Key used when none is configured.
    pub const DEFAULT_KEY: &'static str = "ppv_quote_cart";

    /// Wrap a slot store, keeping the cart under `key`.
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            revision: 0,
        }
    }

    /// Wrap a slot store using [`Self::DEFAULT_KEY`].
    pub fn with_default_key(store: K) -> Self {
        Self::new(store, Self::DEFAULT_KEY)
    }

    /// The slot key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Borrow the underlying slot store.
    #[must_use]
    pub const fn store(&self) -> &K {
        &self.store
    }

    /// Mutably borrow the underlying slot store.
    pub fn store_mut(&mut self) -> &mut K {
        &mut self.store
    }

    /// Unwrap into the underlying slot store.
    pub fn into_store(self) -> K {
        self.store
    }
}

impl<K: KeyValueStore> CartStorage for SlotStorage<K> {
    fn load(&self) -> Cart {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Cart::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Cart slot unreadable, starting empty");
                return Cart::new();
            }
        };

        match serde_json::from_str::<Option<Cart>>(&raw) {
            Ok(cart) => cart.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Malformed cart in slot, starting empty");
                Cart::new()
            }
        }
    }

    fn save(&mut self, cart: &Cart) {
        match serde_json::to_string(cart) {
            Ok(json) => {
                if let Err(e) = self.store.set_item(&self.key, &json) {
                    tracing::warn!(error = %e, "Failed to persist cart");
                }
            }
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
        self.revision += 1;
    }

    fn clear(&mut self) {
        if let Err(e) = self.store.remove_item(&self.key) {
            tracing::warn!(error = %e, "Failed to clear cart slot");
        }
        self.revision += 1;
    }

    fn revision(&self) -> u64 {
        self.revision
    }
}
