//! # Domain Types
//!
//! Core domain types used throughout the rental system.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                │
//! │                                                                     │
//! │  ┌───────────────────┐   ┌───────────────────┐   ┌───────────────┐ │
//! │  │    Equipment      │   │ EquipmentCategory │   │ InvoiceTotals │ │
//! │  │  ───────────────  │   │  ───────────────  │   │ ───────────── │ │
//! │  │  id (i64, > 0)    │   │  Heavy            │   │ total_price   │ │
//! │  │  name             │   │  Regular          │   │ total_loyalty │ │
//! │  │  category         │   │  Specialized      │   │   _points     │ │
//! │  │  rental_days      │   └───────────────────┘   └───────────────┘ │
//! │  │  price            │                                             │
//! │  │  loyalty_points   │                                             │
//! │  └───────────────────┘                                             │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Equipment Lifecycle
//! An `Equipment` is **catalog-only** (price, loyalty points and rent days
//! all zero) until it is added to the cart and priced. Once priced, price
//! and loyalty points are deterministic functions of
//! `(category, rental_days)` and are recomputed, never accumulated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

// =============================================================================
// Equipment Category
// =============================================================================

/// The category of a rentable equipment.
///
/// A closed set: it is never extended at runtime. Pricing and loyalty
/// points branch on this via exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentCategory {
    /// Big machinery: flat fee plus the premium rate for every day.
    Heavy,
    /// Everyday equipment: flat fee, two premium days, regular rate after.
    Regular,
    /// Niche equipment: no flat fee, three premium days, regular rate after.
    Specialized,
}

impl EquipmentCategory {
    /// Resolves a category from its exact, case-sensitive name.
    ///
    /// This is the only place a category token crosses from text into the
    /// closed enum; everything past this point matches exhaustively.
    ///
    /// ## Example
    /// ```rust
    /// use rental_core::types::EquipmentCategory;
    ///
    /// assert_eq!(
    ///     EquipmentCategory::from_name("Heavy").unwrap(),
    ///     EquipmentCategory::Heavy
    /// );
    /// assert!(EquipmentCategory::from_name("heavy").is_err());
    /// assert!(EquipmentCategory::from_name("Hea").is_err());
    /// ```
    pub fn from_name(name: &str) -> CoreResult<Self> {
        match name {
            "Heavy" => Ok(EquipmentCategory::Heavy),
            "Regular" => Ok(EquipmentCategory::Regular),
            "Specialized" => Ok(EquipmentCategory::Specialized),
            _ => Err(CoreError::UnknownCategory {
                name: name.to_string(),
            }),
        }
    }

    /// The canonical name, as it appears in catalog records.
    pub fn name(&self) -> &'static str {
        match self {
            EquipmentCategory::Heavy => "Heavy",
            EquipmentCategory::Regular => "Regular",
            EquipmentCategory::Specialized => "Specialized",
        }
    }
}

impl fmt::Display for EquipmentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EquipmentCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentCategory::from_name(s)
    }
}

// =============================================================================
// Equipment
// =============================================================================

/// A piece of rentable equipment.
///
/// ## Field Invariants
/// - `id` is positive and unique within a catalog load, immutable after
///   creation from catalog data
/// - `name` is non-empty for well-formed catalogs
/// - `rental_days == 0` means "not yet configured for rental"
/// - `price` and `loyalty_points` are computed, never user-supplied;
///   both stay 0 until the entity is priced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    /// Catalog identifier.
    pub id: i64,

    /// Display name shown on the invoice.
    pub name: String,

    /// Category driving the pricing model.
    pub category: EquipmentCategory,

    /// Requested rental duration in days (0 until the customer picks one).
    pub rental_days: i64,

    /// Computed rental price (0 until priced).
    pub price: i64,

    /// Computed loyalty points (0 until priced).
    pub loyalty_points: i64,
}

impl Equipment {
    /// Creates a catalog-only equipment: id, name and category come from
    /// the catalog record, everything else starts at zero.
    pub fn from_catalog(id: i64, name: impl Into<String>, category: EquipmentCategory) -> Self {
        Equipment {
            id,
            name: name.into(),
            category,
            rental_days: 0,
            price: 0,
            loyalty_points: 0,
        }
    }

    /// Returns a copy with the rental duration set.
    ///
    /// ## Usage
    /// The customer picks a duration on the detail view before the entity
    /// goes into the cart. Price and loyalty points are left untouched;
    /// pricing happens later and recomputes from scratch.
    pub fn with_rental_days(mut self, days: i64) -> Self {
        self.rental_days = days;
        self
    }

    /// Whether this entity has been priced.
    #[inline]
    pub fn is_priced(&self) -> bool {
        self.price != 0 || self.loyalty_points != 0
    }
}

// =============================================================================
// Invoice Totals
// =============================================================================

/// Summed totals over a priced item list, as printed on the invoice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line prices.
    pub total_price: i64,

    /// Sum of all loyalty points earned.
    pub total_loyalty_points: i64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_name_exact_match() {
        assert_eq!(
            EquipmentCategory::from_name("Heavy").unwrap(),
            EquipmentCategory::Heavy
        );
        assert_eq!(
            EquipmentCategory::from_name("Regular").unwrap(),
            EquipmentCategory::Regular
        );
        assert_eq!(
            EquipmentCategory::from_name("Specialized").unwrap(),
            EquipmentCategory::Specialized
        );
    }

    #[test]
    fn test_category_from_name_is_case_sensitive() {
        let err = EquipmentCategory::from_name("heavy").unwrap_err();
        assert!(matches!(err, CoreError::UnknownCategory { name } if name == "heavy"));
    }

    #[test]
    fn test_category_name_round_trip() {
        for category in [
            EquipmentCategory::Heavy,
            EquipmentCategory::Regular,
            EquipmentCategory::Specialized,
        ] {
            assert_eq!(
                EquipmentCategory::from_name(category.name()).unwrap(),
                category
            );
        }
    }

    #[test]
    fn test_from_catalog_zeroes_rental_fields() {
        let equipment =
            Equipment::from_catalog(1, "Caterpillar bulldozer", EquipmentCategory::Heavy);

        assert_eq!(equipment.id, 1);
        assert_eq!(equipment.name, "Caterpillar bulldozer");
        assert_eq!(equipment.category, EquipmentCategory::Heavy);
        assert_eq!(equipment.rental_days, 0);
        assert_eq!(equipment.price, 0);
        assert_eq!(equipment.loyalty_points, 0);
        assert!(!equipment.is_priced());
    }

    #[test]
    fn test_with_rental_days_leaves_price_untouched() {
        let equipment =
            Equipment::from_catalog(1, "Caterpillar bulldozer", EquipmentCategory::Heavy)
                .with_rental_days(4);

        assert_eq!(equipment.rental_days, 4);
        assert_eq!(equipment.price, 0);
        assert_eq!(equipment.loyalty_points, 0);
    }
}
