//! Core types for the quotation cart.
//!
//! This module provides type-safe wrappers for the cart's domain concepts.

pub mod id;
pub mod item;
pub mod quantity;

pub use id::ProductId;
pub use item::{CartItem, ProductRef};
pub use quantity::Quantity;
