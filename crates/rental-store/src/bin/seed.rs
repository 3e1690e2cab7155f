//! # Inventory Seed Generator
//!
//! Writes a sample inventory file for development.
//!
//! ## Usage
//! ```bash
//! # Write the default inventory (./textfiles/inventory.txt)
//! cargo run -p rental-store --bin seed
//!
//! # Specify the output path
//! cargo run -p rental-store --bin seed -- --out ./data/inventory.txt
//! ```
//!
//! ## Generated Records
//! One `id;name;category` record per line across all three categories,
//! ready for `FileCatalogStore`.

use std::env;
use std::fs;
use std::path::PathBuf;

use rental_store::{CatalogStore, FileCatalogStore};

/// Sample catalog covering every category.
const SAMPLE_INVENTORY: &[(&str, &str)] = &[
    ("Caterpillar bulldozer", "Heavy"),
    ("Volvo excavator", "Heavy"),
    ("Liebherr mobile crane", "Heavy"),
    ("KMR chainsaw", "Regular"),
    ("Bosch jackhammer", "Regular"),
    ("Makita angle grinder", "Regular"),
    ("Kärcher steam cleaner", "Specialized"),
    ("Hilti concrete scanner", "Specialized"),
    ("Trimble laser level", "Specialized"),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut out_path = PathBuf::from("./textfiles/inventory.txt");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--out" | "-o" => {
                if i + 1 < args.len() {
                    out_path = PathBuf::from(&args[i + 1]);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Equipment Rental Inventory Seed Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -o, --out <PATH>   Inventory file path (default: ./textfiles/inventory.txt)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Equipment Rental Inventory Seed Generator");
    println!("============================================");
    println!("Inventory: {}", out_path.display());
    println!();

    if out_path.exists() {
        println!("⚠ Inventory file already exists");
        println!("  Skipping seed to avoid overwriting records.");
        println!("  Delete the file to regenerate.");
        return Ok(());
    }

    if let Some(parent) = out_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut contents = String::new();
    for (index, (name, category)) in SAMPLE_INVENTORY.iter().enumerate() {
        contents.push_str(&format!("{};{};{}\n", index + 1, name, category));
    }
    fs::write(&out_path, contents)?;

    println!("✓ Wrote {} records", SAMPLE_INVENTORY.len());

    // Verify the file parses cleanly end to end
    println!();
    println!("Verifying catalog...");
    let store = FileCatalogStore::new(&out_path);
    let lines = store.read_lines()?;
    let listing: Vec<_> = rental_core::catalog::parse_records(lines.iter().map(String::as_str))
        .collect::<Result<_, _>>()?;
    println!("  Parsed {} equipment entries", listing.len());

    println!();
    println!("✓ Seed complete!");

    Ok(())
}
