//! # Seed & Demo Runner
//!
//! Populates an in-memory store with a small catalog and walks one customer
//! through a full purchase.
//!
//! ## Usage
//! ```bash
//! # Default run (buys 3 copies of the first book)
//! cargo run -p bookstore-service --bin seed
//!
//! # Custom quantity
//! cargo run -p bookstore-service --bin seed -- --quantity 5
//!
//! # Specify config file
//! cargo run -p bookstore-service --bin seed -- --config ./shop.toml
//! ```
//!
//! ## Generated Data
//! - One category per entry in `CATALOG`, each with a handful of books
//! - Prices from $8.99, stock 10 to 40
//! - One customer, `demoUser`

use std::env;
use std::path::PathBuf;

use bookstore_core::{Money, NewBook, NewCategory, NewUser, PaymentMethod, Role};
use bookstore_service::{telemetry, BookShoppingService, ShopConfig};
use bookstore_store::StoreHandle;

/// Categories and their books (title, author).
const CATALOG: &[(&str, &[(&str, &str)])] = &[
    (
        "Science",
        &[
            ("A Brief History of Time", "Stephen Hawking"),
            ("Cosmos", "Carl Sagan"),
            ("The Selfish Gene", "Richard Dawkins"),
        ],
    ),
    (
        "Fiction",
        &[
            ("Dune", "Frank Herbert"),
            ("Emma", "Jane Austen"),
            ("Beloved", "Toni Morrison"),
        ],
    ),
    (
        "History",
        &[
            ("SPQR", "Mary Beard"),
            ("The Guns of August", "Barbara Tuchman"),
        ],
    ),
];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    telemetry::init_tracing();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut quantity: i64 = 3;
    let mut config_path: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--quantity" | "-q" => {
                if i + 1 < args.len() {
                    quantity = args[i + 1].parse().unwrap_or(3);
                    i += 1;
                }
            }
            "--config" | "-c" => {
                if i + 1 < args.len() {
                    config_path = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Bookstore Seed & Demo");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -q, --quantity <N>   Copies to buy in the demo purchase (default: 3)");
                println!("  -c, --config <PATH>  Shop config file (default: platform config dir)");
                println!("  -h, --help           Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let config = ShopConfig::load_or_default(config_path);

    println!("📚 Bookstore Seed & Demo");
    println!("========================");
    println!("Settlement delay: {} ms", config.payment.settle_delay_ms);
    println!("Success rate:     {:.0}%", config.payment.success_rate * 100.0);
    println!();

    let service = BookShoppingService::with_config(StoreHandle::default(), config);

    // Catalog
    let mut books = Vec::new();
    for (category_idx, (name, titles)) in CATALOG.iter().enumerate() {
        let category = service.create_category(NewCategory {
            name: name.to_string(),
            description: format!("{} books", name),
        });

        for (book_idx, (title, author)) in titles.iter().enumerate() {
            let seed = category_idx * 10 + book_idx;
            let book = service.create_book(NewBook {
                title: title.to_string(),
                author: author.to_string(),
                publisher: "Demo Press".to_string(),
                isbn: format!("978000000{:04}", seed),
                price: Money::from_cents(899 + (seed as i64 % 7) * 250),
                stock_quantity: 10 + (seed as i64 % 4) * 10,
                description: String::new(),
                category_id: category.id,
            })?;
            books.push(book);
        }
    }
    println!("✓ Seeded {} categories, {} books", CATALOG.len(), books.len());

    // Customer
    let user = service.register_user(NewUser {
        username: "demoUser".to_string(),
        password: "demo".to_string(),
        email: "demo@example.com".to_string(),
        full_name: "Demo User".to_string(),
        address: "1 Library Lane".to_string(),
        phone: "555-0100".to_string(),
        role: Role::User,
    })?;
    println!("✓ Registered {}", user.username);

    // Purchase
    let first = &books[0];
    service.add_to_cart(user.id, first.id, quantity)?;
    let summary = service.checkout(user.id)?;
    println!(
        "✓ Checked out {} order(s), total {}",
        summary.orders.len(),
        summary.total_amount
    );
    println!("{}", serde_json::to_string_pretty(&summary)?);

    let order = &summary.orders[0];
    let settlement =
        service.process_payment(order.id, PaymentMethod::CreditCard, summary.total_amount)?;
    println!("  Payment {} pending...", settlement.payment_id());

    let status = settlement.wait().await?;
    println!("✓ Payment {}", status);

    service.create_review(user.id, first.id, 5, "Could not put it down.")?;
    println!(
        "✓ {} now has {} review(s), {} in stock",
        first.title,
        service.get_book_reviews(first.id).len(),
        service
            .get_book(first.id)
            .map(|b| b.stock_quantity)
            .unwrap_or_default()
    );

    println!();
    println!("✓ Demo complete!");

    Ok(())
}
