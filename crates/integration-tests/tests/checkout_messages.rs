//! Checkout deep links produced from a real page session.

use quotecart_core::ProductId;
use quotecart_integration_tests::{FilePage, config_in, open_page};
use quotecart_storefront::checkout::{self, EMPTY_CART_NOTICE};
use quotecart_storefront::page::{Anchor, Display, ProductCard};
use quotecart_storefront::{ContactForm, Disposition, MemoryPage, Page, PageEvent};
use tempfile::TempDir;

fn decoded_text(url: &str) -> String {
    let (_, query) = url.split_once("?text=").expect("text parameter");
    urlencoding::decode(query).expect("utf-8 body").into_owned()
}

fn session_with_two_products() -> (TempDir, FilePage) {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path()).expect("config");
    let mut page = open_page(
        &config,
        MemoryPage::quotation_page()
            .with_card(ProductCard::new("Snack A").with_product_id("A"))
            .with_card(ProductCard::new("Drink B").with_product_id("B")),
    )
    .expect("page");
    page.init();
    for card in page.page().product_cards() {
        page.handle(PageEvent::AddToQuote { card });
    }
    page.handle(PageEvent::QuantityChanged {
        id: ProductId::from("B"),
        raw: "3".into(),
    });
    (dir, page)
}

#[test]
fn test_direct_checkout_opens_deep_link() {
    let (_dir, mut page) = session_with_two_products();

    let disposition = page.handle(PageEvent::CheckoutDirect);
    assert_eq!(disposition, Disposition::PREVENT_DEFAULT);

    let opened = page.page().opened_urls();
    assert_eq!(opened.len(), 1);
    let url = opened.first().expect("opened url");
    assert!(url.starts_with("https://wa.me/60147592229?text="));
    assert_eq!(
        decoded_text(url),
        "QUOTATION REQUEST\n\nProducts:\n1. Snack A (Qty: 1)\n2. Drink B (Qty: 3)\n\n\
         Please provide pricing and availability. Thank you!"
    );
}

#[test]
fn test_form_checkout_fills_missing_fields() {
    let (_dir, mut page) = session_with_two_products();

    page.handle(PageEvent::ShowCheckoutForm);
    assert_eq!(
        page.page().display(Anchor::CheckoutFormSection),
        Some(Display::Block)
    );
    assert!(page.page().was_scrolled(Anchor::CheckoutFormSection));

    let form = ContactForm {
        name: "Ali".into(),
        email: "ali@example.com".into(),
        phone: "0123".into(),
        ..ContactForm::default()
    };
    page.handle(PageEvent::FormSubmitted(form));

    let url = page.page().opened_urls().first().expect("opened url").clone();
    assert_eq!(
        decoded_text(&url),
        "QUOTATION REQUEST\n\nName: Ali\nCompany: N/A\nEmail: ali@example.com\n\
         Phone: 0123\nLocation: N/A\n\nProducts:\n1. Snack A (Qty: 1)\n\
         2. Drink B (Qty: 3)\n\nDetails: N/A"
    );
}

#[test]
fn test_empty_cart_checkouts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = config_in(dir.path()).expect("config");
    let mut page = open_page(&config, MemoryPage::quotation_page()).expect("page");
    page.init();

    page.handle(PageEvent::CheckoutDirect);
    assert!(page.page().opened_urls().is_empty());
    assert!(page.page().alerts().is_empty());

    page.handle(PageEvent::FormSubmitted(ContactForm::default()));
    assert!(page.page().opened_urls().is_empty());
    assert_eq!(page.page().alerts(), &[EMPTY_CART_NOTICE.to_string()]);
}

#[test]
fn test_deep_link_respects_configured_base() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().to_string_lossy().into_owned();
    let config = quotecart_storefront::StorefrontConfig::from_lookup(|key| match key {
        "QUOTE_DATA_DIR" => Some(path.clone()),
        "QUOTE_MESSAGING_URL" => Some("https://chat.example.com/send/".into()),
        "QUOTE_RECIPIENT" => Some("15550100".into()),
        _ => None,
    })
    .expect("config");

    let mut repo = quotecart_storefront::open_repository(&config).expect("repo");
    repo.add_one(quotecart_core::ProductRef::new("A", "Tea & Co", "a.png"));

    let cart = repo.get_all();
    let url = config.deep_link().direct(&cart).expect("link");
    assert!(url.starts_with("https://chat.example.com/send/15550100?text="));
    assert!(url.contains("Tea%20%26%20Co"));
    assert_eq!(
        decoded_text(&url),
        checkout::direct_message(&cart).expect("message")
    );
}
