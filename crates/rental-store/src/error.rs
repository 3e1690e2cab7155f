//! # Store Error Types
//!
//! Error types for the storage layer.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                │
//! │                                                                     │
//! │  std::io::Error (inventory or invoice file)                         │
//! │       │                                                             │
//! │       ▼                                                             │
//! │  StoreError (this module) ← Says which collaborator failed          │
//! │       │                                                             │
//! │       │        CoreError / ParseError (rental-core)                 │
//! │       │             │                                               │
//! │       │◄────────────┘  business failures pass through unchanged     │
//! │       ▼                                                             │
//! │  Presentation layer maps any failure to a generic error view        │
//! │                                                                     │
//! │  No retries, no silent recovery: every failure surfaces.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use rental_core::CoreError;

/// Storage layer errors.
///
/// I/O failures are split by collaborator so the logs say whether the
/// catalog store or the invoice sink fell over; business failures from
/// rental-core pass through transparently so callers can still match on
/// the structured error kinds.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The catalog store could not be read.
    ///
    /// ## When This Occurs
    /// - Inventory file missing or unreadable
    /// - Permissions problem on the inventory path
    #[error("failed to read catalog store: {0}")]
    CatalogIo(#[source] std::io::Error),

    /// The invoice sink could not be written or cleared.
    #[error("failed to write invoice sink: {0}")]
    InvoiceIo(#[source] std::io::Error),

    /// Business rule violation (wraps the core error taxonomy).
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rental_core::ParseError;

    #[test]
    fn test_core_error_passes_through_transparently() {
        let err: StoreError = CoreError::EmptyCart.into();
        assert_eq!(err.to_string(), "could not find equipment to invoice");
        assert!(matches!(err, StoreError::Core(CoreError::EmptyCart)));
    }

    #[test]
    fn test_parse_error_chains_into_store_error() {
        let parse_err = ParseError::InvalidId {
            record: "x;y;z".to_string(),
        };
        let err: StoreError = CoreError::from(parse_err).into();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Parse(ParseError::InvalidId { .. }))
        ));
    }

    #[test]
    fn test_io_errors_name_the_collaborator() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = StoreError::CatalogIo(io);
        assert!(err.to_string().starts_with("failed to read catalog store"));
    }
}
