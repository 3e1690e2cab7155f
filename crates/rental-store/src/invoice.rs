//! # Invoice Sink
//!
//! Accepts a finalized list of priced equipment and persists a
//! human-readable invoice document.
//!
//! ## Document Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     Rendered Invoice                                │
//! │                                                                     │
//! │  === INVOICE ===                                                    │
//! │  Rent details                                                       │
//! │  Caterpillar bulldozer: 340€        ← one line per cart entry,      │
//! │  KMR chainsaw: 220€                    in cart order                │
//! │  Total price: 560€                                                  │
//! │  Number of bonus points earned: 3                                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use rental_core::pricing::invoice_totals;
use rental_core::Equipment;

use crate::error::{StoreError, StoreResult};

/// Destination for finalized invoices.
///
/// Implementations persist the rendered document and expose a clear
/// operation that must succeed even when no document exists yet.
pub trait InvoiceSink {
    /// Renders and persists an invoice for the given priced items,
    /// replacing any previous document.
    fn write_invoice(&mut self, items: &[Equipment]) -> StoreResult<()>;

    /// Empties any existing invoice document. Not an error when there is
    /// nothing to clear.
    fn clear_invoice(&mut self) -> StoreResult<()>;
}

/// Renders the invoice document for a list of priced items.
///
/// The totals come from [`rental_core::pricing::invoice_totals`], the same
/// function finalization reports to its caller, so the printed totals can
/// never drift from the returned ones.
pub fn render_invoice(items: &[Equipment], currency: char) -> String {
    let totals = invoice_totals(items);

    let mut document = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(document, "=== INVOICE ===");
    let _ = writeln!(document, "Rent details");
    for item in items {
        let _ = writeln!(document, "{}: {}{}", item.name, item.price, currency);
    }
    let _ = writeln!(document, "Total price: {}{}", totals.total_price, currency);
    let _ = writeln!(
        document,
        "Number of bonus points earned: {}",
        totals.total_loyalty_points
    );

    document
}

// =============================================================================
// File-Backed Sink
// =============================================================================

/// Invoice sink writing the rendered document to a text file.
#[derive(Debug, Clone)]
pub struct FileInvoiceSink {
    path: PathBuf,
    currency: char,
}

impl FileInvoiceSink {
    /// Creates a sink writing to the given invoice file.
    pub fn new(path: impl Into<PathBuf>, currency: char) -> Self {
        FileInvoiceSink {
            path: path.into(),
            currency,
        }
    }

    /// The invoice file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl InvoiceSink for FileInvoiceSink {
    fn write_invoice(&mut self, items: &[Equipment]) -> StoreResult<()> {
        debug!(path = %self.path.display(), lines = items.len(), "Writing invoice");

        let document = render_invoice(items, self.currency);
        fs::write(&self.path, document).map_err(StoreError::InvoiceIo)
    }

    fn clear_invoice(&mut self) -> StoreResult<()> {
        // Clearing a document that was never written is not a failure
        if !self.path.exists() {
            return Ok(());
        }

        debug!(path = %self.path.display(), "Clearing invoice");
        fs::write(&self.path, "").map_err(StoreError::InvoiceIo)
    }
}

// =============================================================================
// Memory-Backed Sink
// =============================================================================

/// Invoice sink capturing the rendered document in memory, for tests.
#[derive(Debug, Clone)]
pub struct MemoryInvoiceSink {
    document: Option<String>,
    currency: char,
}

impl Default for MemoryInvoiceSink {
    fn default() -> Self {
        MemoryInvoiceSink::new()
    }
}

impl MemoryInvoiceSink {
    /// Creates an empty sink rendering with the default currency symbol.
    pub fn new() -> Self {
        MemoryInvoiceSink {
            document: None,
            currency: '€',
        }
    }

    /// The last persisted document, if any.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }
}

impl InvoiceSink for MemoryInvoiceSink {
    fn write_invoice(&mut self, items: &[Equipment]) -> StoreResult<()> {
        self.document = Some(render_invoice(items, self.currency));
        Ok(())
    }

    fn clear_invoice(&mut self) -> StoreResult<()> {
        self.document = None;
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
