//! Add-to-quote scanner.
//!
//! Walks the product listing cards once and swaps each card's default
//! "Get Quote" link for an "Add to Quote" control. Activation of those
//! controls is handled by [`crate::QuotePage`].
//!
//! Re-scanning is idempotent: every wired card gets a processed marker, and
//! cards that are marked or no longer hold the default link are skipped. Cards
//! inserted after the scan are not wired unless the host scans again.

use quotecart_core::{ProductRef, Quantity};

use crate::page::{AddControl, Page, ProductCard};

/// Outcome of a scan pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Cards wired during this pass.
    pub wired: usize,
    /// Cards already wired by an earlier pass.
    pub already_bound: usize,
    /// Cards without a default quote link or heading.
    pub skipped: usize,
}

/// Wire every eligible product card on the page.
pub fn scan(page: &mut impl Page) -> ScanReport {
    let mut report = ScanReport::default();

    for key in page.product_cards() {
        let Some(card) = page.product_card(key) else {
            continue;
        };

        if card.bound {
            report.already_bound += 1;
            continue;
        }
        if !card.has_quote_link || heading(&card).is_none() {
            report.skipped += 1;
            continue;
        }

        if page.replace_quote_link(key, AddControl::Idle) {
            page.mark_bound(key);
            report.wired += 1;
        } else {
            report.skipped += 1;
        }
    }

    tracing::debug!(
        wired = report.wired,
        already_bound = report.already_bound,
        skipped = report.skipped,
        "Scanned product cards"
    );
    report
}

fn heading(card: &ProductCard) -> Option<&str> {
    non_empty(card.heading.as_deref())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Derive the product reference a card stands for.
///
/// The id is the explicit product id attribute, falling back to the heading.
/// Returns `None` for a card without a heading or with a blank one.
#[must_use]
pub fn product_ref(card: &ProductCard) -> Option<ProductRef> {
    let name = heading(card)?;
    let id = non_empty(card.product_id.as_deref()).unwrap_or(name);
    let image = card.image_src.as_deref().map_or("", str::trim);

    let mut product = ProductRef::new(id, name, image);
    if let Some(category) = card.category.as_deref() {
        product = product.with_category(category.trim());
    }
    Some(product)
}

/// Quantity added by one activation.
pub const ADD_QUANTITY: Quantity = Quantity::ONE;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;

    #[test]
    fn test_scan_wires_cards_with_quote_link() {
        let mut page = MemoryPage::new()
            .with_card(ProductCard::new("Snack A"))
            .with_card(ProductCard::new("Drink B").without_quote_link())
            .with_card(ProductCard::default());

        let report = scan(&mut page);
        assert_eq!(report.wired, 1);
        assert_eq!(report.skipped, 2);

        let keys = page.product_cards();
        let first = *keys.first().expect("card");
        assert_eq!(page.add_control(first), Some(AddControl::Idle));
        assert!(page.product_card(first).is_some_and(|c| c.bound && !c.has_quote_link));
    }

    #[test]
    fn test_double_scan_produces_no_duplicate_bindings() {
        let mut page = MemoryPage::new()
            .with_card(ProductCard::new("Snack A"))
            .with_card(ProductCard::new("Drink B"));

        let first = scan(&mut page);
        let second = scan(&mut page);

        assert_eq!(first.wired, 2);
        assert_eq!(second.wired, 0);
        assert_eq!(second.already_bound, 2);
    }

    #[test]
    fn test_rescan_wires_only_new_cards() {
        let mut page = MemoryPage::new().with_card(ProductCard::new("Snack A"));
        scan(&mut page);
        page.insert_card(ProductCard::new("Late Card"));

        let report = scan(&mut page);
        assert_eq!(report.wired, 1);
        assert_eq!(report.already_bound, 1);
    }

    #[test]
    fn test_product_ref_prefers_explicit_id() {
        let card = ProductCard::new("  Snack A ")
            .with_product_id("snack-a")
            .with_image("https://example.com/a.png")
            .with_category(" Snacks ");
        let product = product_ref(&card).expect("heading present");

        assert_eq!(product.id.as_str(), "snack-a");
        assert_eq!(product.name, "Snack A");
        assert_eq!(product.image, "https://example.com/a.png");
        assert_eq!(product.category.as_deref(), Some("Snacks"));
    }

    #[test]
    fn test_product_ref_falls_back_to_heading() {
        let card = ProductCard::new("Drink B").with_product_id("");
        let product = product_ref(&card).expect("heading present");
        assert_eq!(product.id.as_str(), "Drink B");
        assert_eq!(product.image, "");
        assert_eq!(product.category, None);
    }

    #[test]
    fn test_product_ref_requires_heading() {
        assert!(product_ref(&ProductCard::new("x").without_heading()).is_none());
        assert!(product_ref(&ProductCard::new("   ").with_product_id("snack-a")).is_none());
    }

    #[test]
    fn test_scan_skips_blank_heading() {
        let mut page = MemoryPage::new().with_card(ProductCard::new(" \n\t "));

        let report = scan(&mut page);
        assert_eq!(report.wired, 0);
        assert_eq!(report.skipped, 1);

        let key = *page.product_cards().first().expect("card");
        assert_eq!(page.add_control(key), None);
        assert!(page.product_card(key).is_some_and(|c| !c.bound && c.has_quote_link));
    }
}
