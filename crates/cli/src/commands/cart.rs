//! Cart commands and queries.

use quotecart_core::{CartRepository, CartStorage, ProductId, ProductRef, Quantity};
use quotecart_storefront::table;

/// Add a product.
pub fn add<S: CartStorage>(
    repo: &mut CartRepository<S>,
    id: String,
    name: String,
    image: String,
    category: Option<String>,
    qty: u32,
) {
    let mut product = ProductRef::new(id, name, image);
    product.category = category;
    repo.add(product, Quantity::at_least_one(qty));
    count(repo);
}

/// Remove a product.
pub fn remove<S: CartStorage>(repo: &mut CartRepository<S>, id: &str) {
    repo.remove(&ProductId::from(id));
    count(repo);
}

/// Set a product's quantity from raw input.
pub fn update_qty<S: CartStorage>(repo: &mut CartRepository<S>, id: &str, value: &str) {
    repo.update_qty(&ProductId::from(id), value);
    count(repo);
}

/// Empty the cart.
pub fn clear<S: CartStorage>(repo: &mut CartRepository<S>) {
    repo.clear();
    count(repo);
}

/// Print the cart.
#[allow(clippy::print_stdout)]
pub fn list<S: CartStorage>(repo: &CartRepository<S>, json: bool) {
    let cart = repo.get_all();
    if json {
        match serde_json::to_string_pretty(&cart) {
            Ok(out) => println!("{out}"),
            Err(e) => tracing::error!(error = %e, "Failed to serialize cart"),
        }
        return;
    }

    if cart.is_empty() {
        println!("(empty)");
        return;
    }
    for (index, item) in cart.iter().enumerate() {
        let category = if item.category.is_empty() {
            String::new()
        } else {
            format!(" [{}]", item.category)
        };
        println!(
            "{}. {} (Qty: {}) id={}{category}",
            index + 1,
            item.name,
            item.qty,
            item.id
        );
    }
}

/// Print the total unit count.
#[allow(clippy::print_stdout)]
pub fn count<S: CartStorage>(repo: &CartRepository<S>) {
    println!("{}", repo.count());
}

/// Print the table rows markup.
///
/// # Errors
///
/// Returns the template error if rendering fails.
#[allow(clippy::print_stdout)]
pub fn render<S: CartStorage>(repo: &CartRepository<S>) -> quotecart_storefront::Result<()> {
    let html = table::render_rows(&repo.get_all())?;
    print!("{html}");
    Ok(())
}
