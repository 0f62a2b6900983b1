//! Checkout commands.
//!
//! The terminal has no browsing context to open, so the deep link is printed
//! for the user (or a wrapper script) to follow.

use quotecart_core::{CartRepository, CartStorage};
use quotecart_storefront::checkout::EMPTY_CART_NOTICE;
use quotecart_storefront::{CheckoutError, ContactForm, DeepLink, StorefrontError};

/// Print the direct-message deep link.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to quote.
#[allow(clippy::print_stdout)]
pub fn direct<S: CartStorage>(
    repo: &CartRepository<S>,
    link: &DeepLink,
) -> Result<(), StorefrontError> {
    let url = link.direct(&repo.get_all()).inspect_err(report_empty)?;
    println!("{url}");
    Ok(())
}

/// Print the form-message deep link.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if there is nothing to quote.
#[allow(clippy::print_stdout)]
pub fn with_form<S: CartStorage>(
    repo: &CartRepository<S>,
    link: &DeepLink,
    form: &ContactForm,
) -> Result<(), StorefrontError> {
    let url = link.with_form(&repo.get_all(), form).inspect_err(report_empty)?;
    println!("{url}");
    Ok(())
}

#[allow(clippy::print_stderr)]
fn report_empty(err: &CheckoutError) {
    match err {
        CheckoutError::EmptyCart => eprintln!("{EMPTY_CART_NOTICE}"),
    }
}
