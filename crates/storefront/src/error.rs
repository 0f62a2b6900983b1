//! Unified error type for host-side setup.
//!
//! The quotation logic itself is fail-open and never returns these; they come
//! from opening storage, reading configuration, rendering, and checkout
//! attempts made outside a page (e.g. from the terminal client).

use quotecart_core::StorageError;
use thiserror::Error;

use crate::checkout::CheckoutError;
use crate::config::ConfigError;

/// Storefront-level error type.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Slot storage could not be opened or written.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration was invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// A template failed to render.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Checkout was not possible.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
