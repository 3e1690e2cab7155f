//! # rental-store: Storage Layer for Equipment Rental
//!
//! This crate provides the two backing stores of the rental system and the
//! session repository that orchestrates them.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Equipment Rental Data Flow                      │
//! │                                                                     │
//! │  Presentation action (browse / detail / add / checkout / reset)     │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                  rental-store (THIS CRATE)                    │ │
//! │  │                                                               │ │
//! │  │   ┌────────────────┐  ┌─────────────────────┐  ┌───────────┐ │ │
//! │  │   │ CatalogStore   │  │ EquipmentRepository │  │InvoiceSink│ │ │
//! │  │   │ (catalog.rs)   │  │   (repository.rs)   │  │(invoice.rs)│ │ │
//! │  │   │                │  │                     │  │           │ │ │
//! │  │   │ inventory.txt ─┼─►│ list / get / add /  │─►│invoice.txt│ │ │
//! │  │   │ one line per   │  │ price / finalize /  │  │ rendered  │ │ │
//! │  │   │ equipment      │  │ reset               │  │ document  │ │ │
//! │  │   └────────────────┘  └─────────────────────┘  └───────────┘ │ │
//! │  │                                │                              │ │
//! │  └────────────────────────────────┼──────────────────────────────┘ │
//! │                                   ▼                                 │
//! │                     rental-core (pure business logic)               │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`config`] - Store configuration (paths, currency symbol)
//! - [`catalog`] - Catalog store trait and file/memory implementations
//! - [`invoice`] - Invoice sink trait, document rendering, file/memory sinks
//! - [`repository`] - The per-session equipment repository
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use rental_store::{EquipmentRepository, FileCatalogStore, FileInvoiceSink, StoreConfig};
//!
//! # fn main() -> Result<(), rental_store::StoreError> {
//! let config = StoreConfig::default();
//! let mut repo = EquipmentRepository::new(
//!     FileCatalogStore::new(&config.inventory_path),
//!     FileInvoiceSink::new(&config.invoice_path, config.currency),
//! );
//!
//! let listing = repo.list_equipment()?;
//! let picked = listing[0].clone().with_rental_days(4);
//! repo.add_equipment(Some(picked))?;
//! let totals = repo.finalize_invoice()?;
//! println!("invoiced {}{}", totals.total_price, config.currency);
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod config;
pub mod error;
pub mod invoice;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use catalog::{CatalogStore, FileCatalogStore, MemoryCatalogStore};
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use invoice::{FileInvoiceSink, InvoiceSink, MemoryInvoiceSink};
pub use repository::EquipmentRepository;
