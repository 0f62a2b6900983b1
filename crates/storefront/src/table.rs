//! Quotation table rendering.
//!
//! The table is a pure function of a cart snapshot: every render rebuilds all
//! rows from scratch. Rows are produced by an askama template, so product text
//! and ids are HTML-escaped on the way in.
//!
//! Row controls carry the product id in `data-id`; the host turns a change on
//! `.quote-qty-input` into [`crate::PageEvent::QuantityChanged`] and a click on
//! `.quote-delete-btn` into [`crate::PageEvent::DeleteClicked`].

use askama::Template;
use quotecart_core::{Cart, CartItem};

use crate::page::{Anchor, Display, Page};

/// Text of the price cell; pricing is resolved by the operator.
pub const PRICE_PLACEHOLDER: &str = "Quote Price";
/// Text of the line total cell.
pub const TOTAL_PLACEHOLDER: &str = "RM 0.00";

/// Row display data for the template.
struct RowView<'a> {
    id: &'a str,
    name: &'a str,
    image: &'a str,
    qty: u32,
}

impl<'a> From<&'a CartItem> for RowView<'a> {
    fn from(item: &'a CartItem) -> Self {
        Self {
            id: item.id.as_str(),
            name: &item.name,
            image: &item.image,
            qty: item.qty.get(),
        }
    }
}

/// Table rows fragment.
#[derive(Template)]
#[template(path = "quote/rows.html")]
struct QuoteRowsTemplate<'a> {
    rows: Vec<RowView<'a>>,
    price_placeholder: &'a str,
    total_placeholder: &'a str,
}

/// What a render pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableRender {
    /// The page has no table body; nothing was touched.
    Skipped,
    /// The cart is empty; the empty-state panel is showing.
    Empty,
    /// Rows were rendered.
    Rows(usize),
}

/// Render the table rows for a cart as escaped HTML.
///
/// # Errors
///
/// Returns the template error if rendering fails.
pub fn render_rows(cart: &Cart) -> askama::Result<String> {
    QuoteRowsTemplate {
        rows: cart.iter().map(RowView::from).collect(),
        price_placeholder: PRICE_PLACEHOLDER,
        total_placeholder: TOTAL_PLACEHOLDER,
    }
    .render()
}

/// Render the quotation table region from a cart snapshot.
///
/// An empty cart shows the empty-state panel and hides the table and checkout
/// panel; a non-empty cart does the reverse. Pages without a table body are
/// skipped entirely; other missing anchors are skipped individually.
pub fn render_quotation_table(page: &mut impl Page, cart: &Cart) -> TableRender {
    if !page.has_anchor(Anchor::QuoteTableBody) {
        tracing::debug!("No quotation table on page");
        return TableRender::Skipped;
    }

    if cart.is_empty() {
        page.set_display(Anchor::QuoteTable, Display::None);
        page.set_display(Anchor::EmptyState, Display::Block);
        page.set_display(Anchor::Checkout, Display::None);
        page.set_inner_html(Anchor::QuoteTableBody, "");
        return TableRender::Empty;
    }

    page.set_display(Anchor::QuoteTable, Display::Table);
    page.set_display(Anchor::EmptyState, Display::None);
    page.set_display(Anchor::Checkout, Display::Flex);

    match render_rows(cart) {
        Ok(html) => {
            page.set_inner_html(Anchor::QuoteTableBody, &html);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to render quotation rows");
            page.set_inner_html(Anchor::QuoteTableBody, "");
        }
    }
    TableRender::Rows(cart.len())
}
