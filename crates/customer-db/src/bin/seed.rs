//! # Seed Data Generator
//!
//! Populates a development database with sample customers.
//!
//! ## Usage
//! ```bash
//! # Seed 25 customers (default)
//! cargo run -p customer-db --bin seed
//!
//! # Custom amount and database path
//! cargo run -p customer-db --bin seed -- --count 100 --db ./customers_dev.db
//! ```
//!
//! Records go through the real `CustomerService`, so the seeded data
//! respects every uniqueness rule the API enforces.

use std::env;

use tracing::info;
use tracing_subscriber::EnvFilter;

use customer_core::{Customer, CustomerService};
use customer_db::{Database, DbConfig};

/// First/last name pools for sample customers.
const FIRST_NAMES: &[&str] = &[
    "Ann", "Bo", "Cam", "Dana", "Eli", "Fay", "Gus", "Hana", "Ivo", "June", "Kai", "Lena",
];

const LAST_NAMES: &[&str] = &[
    "Lee", "Kim", "Doe", "Park", "Vega", "Chen", "Ruiz", "Silva", "Novak", "Okafor", "Haas", "Ito",
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 25;
    let mut db_path = String::from("./customers_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(25);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Customer API Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of customers to generate (default: 25)");
                println!("  -d, --db <PATH>    Database file path (default: ./customers_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    // Full names must stay unique, so the pools bound the total
    let max = FIRST_NAMES.len() * LAST_NAMES.len();
    if count > max {
        info!(requested = count, max, "Capping seed count to the name pool");
        count = max;
    }

    info!(db = %db_path, count, "Seeding customer database");

    let db = Database::new(DbConfig::new(&db_path)).await?;

    let existing = db.customers().count().await?;
    if existing > 0 {
        info!(existing, "Database already seeded, skipping");
        return Ok(());
    }

    let service = CustomerService::new(db.customers());

    let mut generated = 0;
    for i in 0..count {
        let customer = generate_customer(i);
        match service.add(customer).await {
            Ok(saved) => {
                generated += 1;
                info!(id = ?saved.id, full_name = %saved.full_name, "Seeded customer");
            }
            Err(e) => {
                eprintln!("Failed to seed customer {}: {}", i, e);
            }
        }
    }

    info!(generated, "Seed complete");

    Ok(())
}

/// Generates a single sample customer.
///
/// Every third customer has no phone number, so the optional field
/// shows up in seeded data too.
fn generate_customer(seed: usize) -> Customer {
    let first = FIRST_NAMES[seed % FIRST_NAMES.len()];
    let last = LAST_NAMES[(seed / FIRST_NAMES.len()) % LAST_NAMES.len()];

    let full_name = format!("{} {}", first, last);
    let email = format!(
        "{}.{}@example.com",
        first.to_lowercase(),
        last.to_lowercase()
    );

    let phone = if seed % 3 == 2 {
        None
    } else {
        Some(format!("+1555{:07}", seed))
    };

    Customer::new(full_name, email, phone)
}
