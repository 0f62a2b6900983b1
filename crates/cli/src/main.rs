//! Quotecart CLI - the quotation cart from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Add two units of a product
//! qc add --id snack-a --name "Snack A" --image https://example.com/a.png --qty 2
//!
//! # Change a quantity (same clamping as the page's quantity input)
//! qc qty snack-a 5
//!
//! # Show the cart
//! qc list
//!
//! # Print the deep link for a direct quotation request
//! qc checkout
//!
//! # Print the deep link for a form quotation request
//! qc submit --name "Ali" --email ali@example.com --phone 0123
//! ```
//!
//! # Commands
//!
//! - `add`, `remove`, `qty`, `clear` - Cart commands
//! - `list`, `count`, `render` - Cart queries
//! - `checkout`, `submit` - Build the outbound deep link
//!
//! Configuration comes from the `QUOTE_*` environment variables (see
//! `quotecart_storefront::config`). Logs go to stderr; set `RUST_LOG` to
//! raise verbosity.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use quotecart_storefront::{ContactForm, StorefrontConfig};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "qc")]
#[command(author, version, about = "Quotation cart client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a product (or more units of it)
    Add {
        /// Product id
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Image URL
        #[arg(short, long, default_value = "")]
        image: String,

        /// Category label
        #[arg(short, long)]
        category: Option<String>,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        qty: u32,
    },
    /// Remove a product
    Remove {
        /// Product id
        id: String,
    },
    /// Set a product's quantity
    Qty {
        /// Product id
        id: String,

        /// New quantity; non-numeric or below 1 becomes 1
        value: String,
    },
    /// Empty the cart
    Clear,
    /// List cart items in order
    List {
        /// Print the persisted JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Print the total number of units
    Count,
    /// Print the quotation table rows as HTML
    Render,
    /// Print the deep link for a direct quotation request
    Checkout,
    /// Print the deep link for a quotation request with contact details
    Submit {
        #[arg(long, default_value = "")]
        name: String,

        #[arg(long, default_value = "")]
        company: String,

        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        phone: String,

        #[arg(long, default_value = "")]
        location: String,

        #[arg(long, default_value = "")]
        details: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> quotecart_storefront::Result<()> {
    let config = StorefrontConfig::from_env()?;
    let mut repo = quotecart_storefront::open_repository(&config)?;

    match cli.command {
        Commands::Add {
            id,
            name,
            image,
            category,
            qty,
        } => commands::cart::add(&mut repo, id, name, image, category, qty),
        Commands::Remove { id } => commands::cart::remove(&mut repo, &id),
        Commands::Qty { id, value } => commands::cart::update_qty(&mut repo, &id, &value),
        Commands::Clear => commands::cart::clear(&mut repo),
        Commands::List { json } => commands::cart::list(&repo, json),
        Commands::Count => commands::cart::count(&repo),
        Commands::Render => commands::cart::render(&repo)?,
        Commands::Checkout => commands::checkout::direct(&repo, &config.deep_link())?,
        Commands::Submit {
            name,
            company,
            email,
            phone,
            location,
            details,
        } => {
            let form = ContactForm {
                name,
                company,
                email,
                phone,
                location,
                details,
            };
            commands::checkout::with_form(&repo, &config.deep_link(), &form)?;
        }
    }
    Ok(())
}
