//! Quotecart Storefront - quotation page adapter layer.
//!
//! Connects the cart repository to a page: the header badge, the quotation
//! table, the checkout deep link and the add-to-quote controls on product
//! listings. The page itself is reached only through the [`page::Page`] port,
//! so the same logic drives a browser host, the terminal client, or tests.
//!
//! Data flow:
//!
//! ```text
//! listing click -> scanner -> repository.add -> storage.save -> badge sync
//! table event   -> repository command -> full table re-render
//! checkout      -> repository snapshot -> message -> deep link
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod badge;
pub mod checkout;
pub mod config;
pub mod error;
pub mod file_store;
pub mod page;
pub mod quote_page;
pub mod scanner;
pub mod scheduler;
pub mod table;

pub use checkout::{CheckoutError, ContactForm, DeepLink};
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use file_store::FileStore;
pub use page::{MemoryPage, Page};
pub use quote_page::{Disposition, PageEvent, PageSettings, QuotePage};
pub use scheduler::{DeferredTask, ManualScheduler, Scheduler};

use quotecart_core::{CartRepository, SlotStorage};

/// Repository over the durable file slot named in `config`.
///
/// # Errors
///
/// Returns [`StorefrontError::Storage`] if the data directory cannot be opened.
pub fn open_repository(config: &StorefrontConfig) -> Result<CartRepository<SlotStorage<FileStore>>> {
    let store = FileStore::open(&config.data_dir)?;
    Ok(CartRepository::open(SlotStorage::new(
        store,
        config.storage_key.clone(),
    )))
}
