//! # Error Types
//!
//! Domain-specific error types for rental-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                 │
//! │                                                                     │
//! │  rental-core errors (this file)                                     │
//! │  ├── ParseError  - Malformed catalog records                        │
//! │  └── CoreError   - Business rule violations                         │
//! │                                                                     │
//! │  rental-store errors (separate crate)                               │
//! │  └── StoreError  - Inventory / invoice file failures                │
//! │                                                                     │
//! │  Flow: ParseError → CoreError → StoreError → presentation layer     │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (id, token, day count)
//! 3. Errors are enum variants, never String
//! 4. The core fails loudly and leaves state unmutated on failure

use thiserror::Error;

// =============================================================================
// Parse Error
// =============================================================================

/// Catalog record parse failures.
///
/// Parsing is strict and fail-fast: the first malformed record aborts the
/// whole listing. Malformed records are never silently skipped, because
/// billing correctness depends on catalog integrity.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The id field is not a positive integer token.
    ///
    /// ## When This Occurs
    /// - The record has a non-numeric first field (`"bulldozer;Heavy"`)
    /// - The id is zero or negative (`"0;bulldozer;Heavy"`)
    /// - The record is an empty line
    #[error("invalid equipment id in catalog record: '{record}'")]
    InvalidId { record: String },

    /// The category field does not exactly match a known category name.
    ///
    /// Matching is case-sensitive: `Heavy`, `Regular`, `Specialized`.
    #[error("invalid equipment category in catalog record: '{token}'")]
    InvalidCategory { token: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or bad caller input.
/// Callers must be able to distinguish "bad request" (`InvalidArgument`)
/// from "no such record" (`NotFound`).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Caller supplied a non-positive equipment id.
    #[error("invalid id: {id}. Id should be a positive integer")]
    InvalidArgument { id: i64 },

    /// The id was valid but no catalog record matches it.
    #[error("could not find the equipment based on the given id: {id}")]
    NotFound { id: i64 },

    /// An operation that requires an equipment value received none.
    #[error("equipment is required")]
    NullInput,

    /// Rental duration is below the one-day minimum.
    ///
    /// ## When This Occurs
    /// - Pricing an equipment whose rent days were never configured (0)
    /// - Caller passes a negative day count
    #[error("invalid rent days: {days}. Renting days should be at least 1")]
    InvalidDuration { days: i64 },

    /// The category name is outside the closed category set.
    ///
    /// Produced by [`EquipmentCategory::from_name`] for unrecognized
    /// tokens. The pricing matches themselves are exhaustive over the
    /// closed enum, so this kind exists for the parsing boundary and for
    /// forward compatibility.
    ///
    /// [`EquipmentCategory::from_name`]: crate::types::EquipmentCategory::from_name
    #[error("unknown equipment category: '{name}'")]
    UnknownCategory { name: String },

    /// Finalize was called with nothing in the cart.
    #[error("could not find equipment to invoice")]
    EmptyCart,

    /// Catalog parse error (wraps ParseError).
    #[error("catalog parse error: {0}")]
    Parse(#[from] ParseError),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
