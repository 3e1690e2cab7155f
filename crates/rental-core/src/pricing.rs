//! # Pricing Engine
//!
//! Pure functions computing rental price and loyalty points from
//! `(category, rental_days)`. No side effects, no hidden state.
//!
//! ## Pricing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Fixed Pricing Model                            │
//! │                                                                     │
//! │  One-time rental fee:  100      Premium daily fee:  60              │
//! │  Regular daily fee:     40                                          │
//! │                                                                     │
//! │  Heavy        = 100 + days × 60                                     │
//! │  Regular      = 100 + 2 × 60 + (days − 2) × 40                      │
//! │  Specialized  =       3 × 60 + (days − 3) × 40                      │
//! │                                                                     │
//! │  Loyalty: Heavy → 2 points, Regular/Specialized → 1 point           │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Legacy Below-Window Behavior
//! For Regular rentals shorter than 2 days and Specialized rentals shorter
//! than 3 days, the `(days − window)` term goes negative and the price
//! drops below the full-window price. That is the inherited behavior and
//! it is preserved exactly; the tests pin it so nobody "fixes" it by
//! accident.

use crate::error::CoreResult;
use crate::types::{Equipment, EquipmentCategory, InvoiceTotals};
use crate::validation::validate_rental_days;
use crate::{
    HEAVY_LOYALTY_POINTS, ONE_TIME_RENTAL_FEE, OTHER_LOYALTY_POINTS, PREMIUM_DAILY_FEE,
    REGULAR_DAILY_FEE, REGULAR_PREMIUM_WINDOW_DAYS, SPECIALIZED_PREMIUM_WINDOW_DAYS,
};

/// Computes the rental price for a category and duration.
///
/// ## Failure Modes
/// - `rental_days < 1` → [`CoreError::InvalidDuration`]
///
/// ## Example
/// ```rust
/// use rental_core::pricing::compute_price;
/// use rental_core::types::EquipmentCategory;
///
/// assert_eq!(compute_price(EquipmentCategory::Heavy, 4).unwrap(), 340);
/// assert_eq!(compute_price(EquipmentCategory::Regular, 2).unwrap(), 220);
/// assert!(compute_price(EquipmentCategory::Heavy, 0).is_err());
/// ```
pub fn compute_price(category: EquipmentCategory, rental_days: i64) -> CoreResult<i64> {
    validate_rental_days(rental_days)?;

    let price = match category {
        EquipmentCategory::Heavy => ONE_TIME_RENTAL_FEE + rental_days * PREMIUM_DAILY_FEE,
        EquipmentCategory::Regular => {
            ONE_TIME_RENTAL_FEE
                + REGULAR_PREMIUM_WINDOW_DAYS * PREMIUM_DAILY_FEE
                + (rental_days - REGULAR_PREMIUM_WINDOW_DAYS) * REGULAR_DAILY_FEE
        }
        EquipmentCategory::Specialized => {
            SPECIALIZED_PREMIUM_WINDOW_DAYS * PREMIUM_DAILY_FEE
                + (rental_days - SPECIALIZED_PREMIUM_WINDOW_DAYS) * REGULAR_DAILY_FEE
        }
    };

    Ok(price)
}

/// Computes the loyalty points earned for renting one equipment of the
/// given category. Points depend on the category alone, not the duration.
pub fn compute_loyalty_points(category: EquipmentCategory) -> CoreResult<i64> {
    let points = match category {
        EquipmentCategory::Heavy => HEAVY_LOYALTY_POINTS,
        EquipmentCategory::Regular | EquipmentCategory::Specialized => OTHER_LOYALTY_POINTS,
    };

    Ok(points)
}

/// Prices an equipment: returns a new value with `price` and
/// `loyalty_points` recomputed from its current `(category, rental_days)`.
///
/// ## Idempotence
/// Repeated pricing with the same inputs yields the same result; nothing
/// is accumulated. Re-invoking after `rental_days` or `category` changed
/// recomputes from scratch.
///
/// ## Failure Modes
/// Propagates [`CoreError::InvalidDuration`] when the rent days were never
/// configured (still 0) or are otherwise below 1. On failure the input is
/// untouched (nothing is mutated; the caller keeps its value).
pub fn price_equipment(equipment: &Equipment) -> CoreResult<Equipment> {
    let mut priced = equipment.clone();
    priced.price = compute_price(equipment.category, equipment.rental_days)?;
    priced.loyalty_points = compute_loyalty_points(equipment.category)?;
    Ok(priced)
}

/// Sums price and loyalty points over a priced item list.
///
/// Used by invoice finalization and by the invoice document renderer, so
/// the printed totals and the returned totals can never disagree.
pub fn invoice_totals(items: &[Equipment]) -> InvoiceTotals {
    items.iter().fold(InvoiceTotals::default(), |acc, item| {
        InvoiceTotals {
            total_price: acc.total_price + item.price,
            total_loyalty_points: acc.total_loyalty_points + item.loyalty_points,
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
