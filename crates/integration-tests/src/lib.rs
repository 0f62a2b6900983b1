//! Integration tests for Quotecart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quotecart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `quote_flow` - Listing, table and badge behavior over a durable slot
//! - `checkout_messages` - Message text and deep links end to end
//! - `persistence` - Slot contents, corrupt data and reopen behavior

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::time::Duration;

use quotecart_core::{CartRepository, SlotStorage};
use quotecart_storefront::{
    FileStore, ManualScheduler, MemoryPage, QuotePage, StorefrontConfig, StorefrontError,
};

/// Quotation page over a file slot, driven by a manual scheduler.
pub type FilePage = QuotePage<SlotStorage<FileStore>, MemoryPage, ManualScheduler>;

/// Configuration rooted at `dir`, everything else defaulted.
///
/// # Errors
///
/// Returns an error if the defaults fail validation.
pub fn config_in(dir: &Path) -> Result<StorefrontConfig, StorefrontError> {
    let dir = dir.to_string_lossy().into_owned();
    Ok(StorefrontConfig::from_lookup(|key| {
        (key == "QUOTE_DATA_DIR").then(|| dir.clone())
    })?)
}

/// Open a page over the slot in `config`.
///
/// # Errors
///
/// Returns an error if the data directory cannot be opened.
pub fn open_page(config: &StorefrontConfig, page: MemoryPage) -> Result<FilePage, StorefrontError> {
    let repo: CartRepository<SlotStorage<FileStore>> =
        quotecart_storefront::open_repository(config)?;
    Ok(QuotePage::new(
        repo,
        page,
        ManualScheduler::new(),
        config.page_settings(),
    ))
}

/// Delay used when a test wants the confirmation revert to be observable.
pub const TEST_CONFIRM_DELAY: Duration = Duration::from_millis(1500);
