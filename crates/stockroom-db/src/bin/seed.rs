//! # Seed Data Generator
//!
//! Populates the database with sample products for development. Stock is
//! brought in through Purchase movements so every unit has a ledger row.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/stockroom.db
//! ```

use std::env;

use stockroom_core::{MovementRequest, NewProduct};
use stockroom_db::migrations::migration_status;
use stockroom_db::{Database, DbConfig, MovementService};

/// Product families for sample data.
const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Almacén",
        &[
            "Harina 000",
            "Azúcar",
            "Arroz largo fino",
            "Fideos spaghetti",
            "Yerba mate",
            "Aceite girasol",
            "Sal fina",
            "Lentejas",
        ],
    ),
    (
        "Lácteos",
        &[
            "Leche entera",
            "Leche descremada",
            "Yogur natural",
            "Queso cremoso",
            "Manteca",
            "Dulce de leche",
        ],
    ),
    (
        "Bebidas",
        &[
            "Agua mineral",
            "Gaseosa cola",
            "Jugo de naranja",
            "Soda",
            "Café molido",
            "Té negro",
        ],
    ),
    (
        "Limpieza",
        &[
            "Detergente",
            "Lavandina",
            "Jabón en polvo",
            "Esponja",
        ],
    ),
];

/// Package variants with a price multiplier.
const SIZES: &[(&str, f64)] = &[("500g", 1.0), ("1kg", 1.8), ("Pack x6", 5.2)];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: usize = 50;
    let mut db_path = String::from("./stockroom_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
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
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./stockroom_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Stockroom Seed Data Generator");
    println!("================================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;
    let (total, applied) = migration_status(db.pool()).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied ({}/{})", applied, total);

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Generating products...");

    let movements = MovementService::new(db.clone());
    let start = std::time::Instant::now();
    let mut generated = 0;
    let mut units = 0;

    'outer: for (category_idx, (category, names)) in CATEGORIES.iter().enumerate() {
        for (name_idx, name) in names.iter().enumerate() {
            for (size_idx, (size, multiplier)) in SIZES.iter().enumerate() {
                if generated >= count {
                    break 'outer;
                }

                let seed = category_idx * 100 + name_idx * 10 + size_idx;
                let product = generate_product(category, name, size, *multiplier, seed);

                let created = match db.products().create(&product).await {
                    Ok(created) => created,
                    Err(e) => {
                        eprintln!("Failed to insert {}: {}", product.name, e);
                        continue;
                    }
                };

                // Some products stay out of stock
                let initial_stock = (seed * 7) % 41;
                if initial_stock > 0 {
                    let request = MovementRequest::new("Compra", initial_stock as i64);
                    if let Err(e) = movements.apply_movement(created.id, &request).await {
                        eprintln!("Failed to stock {}: {}", created.name, e);
                    } else {
                        units += initial_stock;
                    }
                }

                generated += 1;

                if generated % 25 == 0 {
                    println!("  Generated {} products...", generated);
                }
            }
        }
    }

    let elapsed = start.elapsed();
    println!();
    println!("✓ Generated {} products in {:?}", generated, elapsed);
    println!("  Stocked {} units through purchase movements", units);

    println!();
    println!("Most recent products:");
    for product in db.products().list_recent(5).await? {
        println!("  #{:<4} {:<32} stock {}", product.id, product.name, product.stock);
    }

    db.close().await;

    println!();
    println!("✓ Seed complete!");

    Ok(())
}

/// Builds a product with a deterministic price.
fn generate_product(category: &str, name: &str, size: &str, multiplier: f64, seed: usize) -> NewProduct {
    // Base price 1.50 - 9.49
    let base = 1.5 + ((seed * 17) % 800) as f64 / 100.0;
    let price = (base * multiplier * 100.0).round() / 100.0;

    // Cleaning products are listed without a price
    let price = if category == "Limpieza" && seed % 2 == 0 {
        None
    } else {
        Some(price)
    };

    NewProduct::new(format!("{} {}", name, size), price)
}
