//! # Cart
//!
//! In-memory ordered collection of equipment added to the current session.
//!
//! ## Ownership Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                        Cart Ownership                               │
//! │                                                                     │
//! │  EquipmentRepository (rental-store)                                 │
//! │       │ owns exactly one                                            │
//! │       ▼                                                             │
//! │  Cart ── append-only during a session                               │
//! │       ── cleared atomically on finalize or explicit reset           │
//! │       ── same id may appear twice (shopping-cart semantics)         │
//! │                                                                     │
//! │  One repository instance = one active session. Mutation goes        │
//! │  through `&mut self`, so exclusivity is enforced by the borrow      │
//! │  checker instead of locks.                                          │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Equipment;

/// The current customer's cart: an ordered, append-only sequence of
/// equipment entries. Entries are not deduplicated by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<Equipment>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// Appends an equipment to the cart.
    ///
    /// ## Failure Modes
    /// - `None` → [`CoreError::NullInput`]; the cart is left unchanged
    pub fn add(&mut self, equipment: Option<Equipment>) -> CoreResult<()> {
        match equipment {
            Some(equipment) => {
                self.items.push(equipment);
                Ok(())
            }
            None => Err(CoreError::NullInput),
        }
    }

    /// Current cart size (snapshot count, for observability and tests).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The cart entries, in insertion order.
    pub fn items(&self) -> &[Equipment] {
        &self.items
    }

    /// Empties the cart. Used on finalize and on error-recovery paths.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
