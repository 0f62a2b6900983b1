//! Checkout message construction.
//!
//! Both message variants are read by a human operator, so their labels, field
//! order and line structure are a stable format. Changing any label text or
//! the order of fields is a compatibility break.
//!
//! Direct:
//!
//! ```text
//! QUOTATION REQUEST
//!
//! Products:
//! 1. Snack A (Qty: 2)
//! 2. Drink B (Qty: 1)
//!
//! Please provide pricing and availability. Thank you!
//! ```
//!
//! Form-augmented:
//!
//! ```text
//! QUOTATION REQUEST
//!
//! Name: Ali
//! Company: N/A
//! Email: ali@example.com
//! Phone: 0123
//! Location: N/A
//!
//! Products:
//! 1. Snack A (Qty: 2)
//!
//! Details: N/A
//! ```

use std::fmt::Write as _;

use quotecart_core::Cart;
use serde::Deserialize;
use url::Url;

/// First line of every message.
pub const HEADER: &str = "QUOTATION REQUEST";
/// Closing sentence of the direct message.
pub const CLOSING: &str = "Please provide pricing and availability. Thank you!";
/// Stand-in for optional form fields left blank.
pub const NOT_PROVIDED: &str = "N/A";
/// Notice shown when a form checkout is attempted on an empty cart.
pub const EMPTY_CART_NOTICE: &str = "Your quotation is empty. Please add products first.";

/// Checkout failures.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    /// There is nothing to ask a quotation for.
    #[error("quotation cart is empty")]
    EmptyCart,
}

/// Contact form fields submitted with a form checkout.
///
/// Blank fields count as absent. Absent `company`, `location` and `details`
/// are written as `N/A`; the other fields are written empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub details: String,
}

fn or_not_provided(value: &str) -> &str {
    if value.is_empty() { NOT_PROVIDED } else { value }
}

/// Enumerated product list, one line per item in cart order.
fn product_lines(cart: &Cart) -> String {
    let mut lines = String::from("Products:\n");
    for (index, item) in cart.iter().enumerate() {
        let _ = writeln!(lines, "{}. {} (Qty: {})", index + 1, item.name, item.qty);
    }
    lines
}

/// Build the direct message.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart has no items.
pub fn direct_message(cart: &Cart) -> Result<String, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    Ok(format!("{HEADER}\n\n{}\n{CLOSING}", product_lines(cart)))
}

/// Build the form-augmented message.
///
/// # Errors
///
/// Returns [`CheckoutError::EmptyCart`] if the cart has no items.
pub fn form_message(cart: &Cart, form: &ContactForm) -> Result<String, CheckoutError> {
    if cart.is_empty() {
        return Err(CheckoutError::EmptyCart);
    }

    let mut msg = format!("{HEADER}\n\n");
    let _ = writeln!(msg, "Name: {}", form.name);
    let _ = writeln!(msg, "Company: {}", or_not_provided(&form.company));
    let _ = writeln!(msg, "Email: {}", form.email);
    let _ = writeln!(msg, "Phone: {}", form.phone);
    let _ = writeln!(msg, "Location: {}", or_not_provided(&form.location));
    msg.push('\n');
    msg.push_str(&product_lines(cart));
    let _ = write!(msg, "\nDetails: {}", or_not_provided(&form.details));
    Ok(msg)
}

/// Messaging deep link to a fixed recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    base: Url,
    recipient: String,
}

impl DeepLink {
    /// Create a deep link builder.
    #[must_use]
    pub fn new(base: Url, recipient: impl Into<String>) -> Self {
        Self {
            base,
            recipient: recipient.into(),
        }
    }

    /// The recipient identifier.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// URL that opens the messaging app with `body` pre-filled.
    ///
    /// The body is percent-encoded in full.
    #[must_use]
    pub fn url_for(&self, body: &str) -> String {
        format!(
            "{}/{}?text={}",
            self.base.as_str().trim_end_matches('/'),
            self.recipient,
            urlencoding::encode(body)
        )
    }

    /// Deep link for the direct message.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no items.
    pub fn direct(&self, cart: &Cart) -> Result<String, CheckoutError> {
        direct_message(cart).map(|body| self.url_for(&body))
    }

    /// Deep link for the form-augmented message.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if the cart has no items.
    pub fn with_form(&self, cart: &Cart, form: &ContactForm) -> Result<String, CheckoutError> {
        form_message(cart, form).map(|body| self.url_for(&body))
    }
}
