//! # Validation Module
//!
//! Input validation rules guarding the business operations.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                              │
//! │                                                                     │
//! │  Layer 1: Presentation (external)                                   │
//! │  ├── Form/query format checks                                       │
//! │  └── Immediate user feedback                                        │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 2: THIS MODULE - business rule validation                    │
//! │  ├── Equipment id must be a positive integer                        │
//! │  └── Rental duration must be at least one day                       │
//! │           │                                                         │
//! │           ▼                                                         │
//! │  Layer 3: Catalog parsing (strict, fail-fast)                       │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult};

/// Validates an equipment id supplied by a caller.
///
/// ## Rules
/// - Must be a positive integer
///
/// ## Example
/// ```rust
/// use rental_core::validation::validate_equipment_id;
///
/// assert!(validate_equipment_id(1).is_ok());
/// assert!(validate_equipment_id(0).is_err());
/// ```
pub fn validate_equipment_id(id: i64) -> CoreResult<()> {
    if id <= 0 {
        return Err(CoreError::InvalidArgument { id });
    }

    Ok(())
}

/// Validates a rental duration before pricing is applied.
///
/// ## Rules
/// - Must be at least 1 day; 0 is the "not yet configured" state and is
///   rejected here, so unconfigured equipment can never be priced
pub fn validate_rental_days(days: i64) -> CoreResult<()> {
    if days < 1 {
        return Err(CoreError::InvalidDuration { days });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
