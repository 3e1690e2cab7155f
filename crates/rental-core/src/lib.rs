//! # rental-core: Pure Business Logic for Equipment Rental
//!
//! This crate is the **heart** of the rental system. It contains all business
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                  Equipment Rental Architecture                      │
//! │                                                                     │
//! │  ┌───────────────────────────────────────────────────────────────┐ │
//! │  │                 Presentation Layer (external)                 │ │
//! │  │    Browse ──► View Detail ──► Add to Cart ──► Checkout        │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │                 rental-store (Storage Layer)                  │ │
//! │  │    EquipmentRepository, inventory file, invoice sink          │ │
//! │  └───────────────────────────────┬───────────────────────────────┘ │
//! │                                  │                                  │
//! │  ┌───────────────────────────────▼───────────────────────────────┐ │
//! │  │               ★ rental-core (THIS CRATE) ★                    │ │
//! │  │                                                               │ │
//! │  │   ┌───────────┐ ┌───────────┐ ┌───────────┐ ┌────────────┐   │ │
//! │  │   │   types   │ │  catalog  │ │  pricing  │ │    cart    │   │ │
//! │  │   │ Equipment │ │  record   │ │  price &  │ │  session   │   │ │
//! │  │   │ Category  │ │  parsing  │ │  loyalty  │ │  contents  │   │ │
//! │  │   └───────────┘ └───────────┘ └───────────┘ └────────────┘   │ │
//! │  │                                                               │ │
//! │  │   NO I/O • NO FILES • NO NETWORK • PURE FUNCTIONS             │ │
//! │  └───────────────────────────────────────────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Equipment, EquipmentCategory, InvoiceTotals)
//! - [`catalog`] - Catalog record parsing (strict, fail-fast)
//! - [`pricing`] - Price and loyalty point computation
//! - [`cart`] - In-session cart state
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every pricing call is deterministic - same input = same output
//! 2. **No I/O**: File, database and network access is FORBIDDEN here
//! 3. **Integer Money**: All prices are whole currency units (i64), no floats
//! 4. **Explicit Errors**: All errors are typed, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use rental_core::pricing;
//! use rental_core::types::EquipmentCategory;
//!
//! // Four days of heavy equipment: flat fee + 4 premium days
//! let price = pricing::compute_price(EquipmentCategory::Heavy, 4).unwrap();
//! assert_eq!(price, 340);
//!
//! // Loyalty points depend only on the category
//! let points = pricing::compute_loyalty_points(EquipmentCategory::Heavy).unwrap();
//! assert_eq!(points, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rental_core::Equipment` instead of
// `use rental_core::types::Equipment`

pub use cart::Cart;
pub use error::{CoreError, CoreResult, ParseError};
pub use types::{Equipment, EquipmentCategory, InvoiceTotals};

// =============================================================================
// Crate-Level Constants
// =============================================================================
// The fixed pricing model. Values are whole currency units.

/// Flat fee charged once per rental for Heavy and Regular equipment.
pub const ONE_TIME_RENTAL_FEE: i64 = 100;

/// Daily fee during the premium window (and for every Heavy day).
pub const PREMIUM_DAILY_FEE: i64 = 60;

/// Daily fee after the premium window has been exhausted.
pub const REGULAR_DAILY_FEE: i64 = 40;

/// Number of days Regular equipment is billed at the premium rate.
///
/// ## Note
/// Rentals shorter than the window still bill the full window plus a
/// negative remainder. That is the legacy pricing behavior and it is
/// preserved deliberately (see `pricing` module tests).
pub const REGULAR_PREMIUM_WINDOW_DAYS: i64 = 2;

/// Number of days Specialized equipment is billed at the premium rate.
pub const SPECIALIZED_PREMIUM_WINDOW_DAYS: i64 = 3;

/// Loyalty points earned per Heavy equipment rental.
pub const HEAVY_LOYALTY_POINTS: i64 = 2;

/// Loyalty points earned per rental of any other category.
pub const OTHER_LOYALTY_POINTS: i64 = 1;
