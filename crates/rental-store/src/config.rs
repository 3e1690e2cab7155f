//! # Store Configuration
//!
//! Paths and display settings for the two backing stores.

use std::path::PathBuf;

/// Storage layer configuration.
///
/// ## Example
/// ```rust
/// use rental_store::StoreConfig;
///
/// let config = StoreConfig::new("./textfiles/inventory.txt")
///     .invoice_path("./textfiles/invoice.txt")
///     .currency('€');
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the inventory file (the catalog store).
    pub inventory_path: PathBuf,

    /// Path to the invoice file (the invoice sink).
    pub invoice_path: PathBuf,

    /// Currency symbol printed after every amount on the invoice.
    /// Single fixed symbol; no localization.
    pub currency: char,
}

impl StoreConfig {
    /// Creates a configuration with the given inventory path and default
    /// invoice path and currency.
    pub fn new(inventory_path: impl Into<PathBuf>) -> Self {
        StoreConfig {
            inventory_path: inventory_path.into(),
            invoice_path: PathBuf::from("./textfiles/invoice.txt"),
            currency: '€',
        }
    }

    /// Sets the invoice file path.
    pub fn invoice_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.invoice_path = path.into();
        self
    }

    /// Sets the currency symbol.
    pub fn currency(mut self, currency: char) -> Self {
        self.currency = currency;
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new("./textfiles/inventory.txt")
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
