//! Quotecart Core - quotation cart domain library.
//!
//! This crate owns the quotation cart model and the rules that keep it
//! consistent. It is used by:
//! - `quotecart-storefront` - Page adapter layer (badge, table, checkout, scanner)
//! - `quotecart-cli` - Terminal host backed by a durable file slot
//!
//! # Architecture
//!
//! The core crate contains only types, traits and in-memory logic - no
//! filesystem access, no network clients. Durable storage is plugged in
//! through the [`storage::KeyValueStore`] port.
//!
//! # Modules
//!
//! - [`types`] - Product identity, quantities and cart line items
//! - [`cart`] - The ordered, id-unique cart collection
//! - [`storage`] - Slot port, JSON storage adapter, in-memory slot
//! - [`repository`] - Command/query service over the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod repository;
pub mod storage;
pub mod types;

pub use cart::{Cart, CartError};
pub use repository::CartRepository;
pub use storage::{CartStorage, KeyValueStore, MemoryStore, SlotStorage, StorageError};
pub use types::*;
