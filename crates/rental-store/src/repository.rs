//! # Equipment Repository
//!
//! Orchestrates one rental session: catalog listing, lookup, cart
//! mutation, pricing and invoice finalization.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                     One Customer Session                            │
//! │                                                                     │
//! │  list_equipment ──► get_equipment_by_id ──► with_rental_days        │
//! │                                                  │                  │
//! │                                                  ▼                  │
//! │                                            add_equipment            │
//! │                                                  │ (repeat)         │
//! │                                                  ▼                  │
//! │  finalize_invoice: price every entry ─► invoice sink ─► clear cart  │
//! │                                                                     │
//! │  reset_session: clear cart + best-effort clear sink (error paths)   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Exclusivity
//! One repository instance serves one active session. Mutating operations
//! take `&mut self`; callers needing multiple concurrent sessions create
//! one repository per session.

use tracing::{debug, info, warn};

use rental_core::catalog::parse_records;
use rental_core::pricing::{invoice_totals, price_equipment};
use rental_core::validation::validate_equipment_id;
use rental_core::{Cart, CoreError, Equipment, InvoiceTotals, ParseError};

use crate::catalog::CatalogStore;
use crate::error::StoreResult;
use crate::invoice::InvoiceSink;

/// One customer session over a catalog store and an invoice sink.
///
/// ## Usage
/// ```rust
/// use rental_store::{EquipmentRepository, MemoryCatalogStore, MemoryInvoiceSink};
///
/// # fn main() -> Result<(), rental_store::StoreError> {
/// let mut repo = EquipmentRepository::new(
///     MemoryCatalogStore::new(["1;Caterpillar bulldozer;Heavy"]),
///     MemoryInvoiceSink::new(),
/// );
///
/// let picked = repo.get_equipment_by_id(1)?.with_rental_days(4);
/// repo.add_equipment(Some(picked))?;
/// let totals = repo.finalize_invoice()?;
/// assert_eq!(totals.total_price, 340);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct EquipmentRepository<C, S> {
    catalog: C,
    sink: S,
    cart: Cart,
}

impl<C: CatalogStore, S: InvoiceSink> EquipmentRepository<C, S> {
    /// Creates a repository with an empty cart.
    pub fn new(catalog: C, sink: S) -> Self {
        EquipmentRepository {
            catalog,
            sink,
            cart: Cart::new(),
        }
    }

    /// Lists the catalog.
    ///
    /// Re-reads and re-parses the catalog store on every call - the store
    /// is the source of truth, never cached equipment objects. Parse
    /// failures propagate unchanged: the first malformed record aborts the
    /// listing with no partial results.
    pub fn list_equipment(&self) -> StoreResult<Vec<Equipment>> {
        let lines = self.catalog.read_lines()?;

        let listing: Result<Vec<Equipment>, ParseError> =
            parse_records(lines.iter().map(String::as_str)).collect();
        let listing = listing.map_err(CoreError::from)?;

        debug!(count = listing.len(), "Catalog listing parsed");
        Ok(listing)
    }

    /// Looks up a catalog entry by id.
    ///
    /// ## Failure Modes
    /// - `id <= 0` → [`CoreError::InvalidArgument`] (bad request)
    /// - no matching record → [`CoreError::NotFound`] (valid request, no hit)
    ///
    /// The two kinds stay distinct so callers can tell them apart.
    pub fn get_equipment_by_id(&self, id: i64) -> StoreResult<Equipment> {
        validate_equipment_id(id)?;

        let equipment = self
            .list_equipment()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or(CoreError::NotFound { id })?;

        Ok(equipment)
    }

    /// Adds an equipment to the session cart.
    ///
    /// ## Failure Modes
    /// - `None` → [`CoreError::NullInput`]; the cart is left unchanged
    pub fn add_equipment(&mut self, equipment: Option<Equipment>) -> StoreResult<()> {
        self.cart.add(equipment)?;
        debug!(cart_len = self.cart.len(), "Equipment added to cart");
        Ok(())
    }

    /// Prices an equipment from its current `(category, rental_days)`.
    ///
    /// Stateless recomputation: repeated calls with the same fields give
    /// the same result, and a changed duration or category recomputes from
    /// scratch. The cart is never touched here.
    ///
    /// ## Failure Modes
    /// - `None` → [`CoreError::NullInput`]
    /// - propagates [`CoreError::InvalidDuration`] / [`CoreError::UnknownCategory`]
    pub fn apply_pricing(&self, equipment: Option<&Equipment>) -> StoreResult<Equipment> {
        let equipment = equipment.ok_or(CoreError::NullInput)?;
        let priced = price_equipment(equipment)?;
        Ok(priced)
    }

    /// Finalizes the session: prices every cart entry, persists the
    /// invoice, clears the cart and returns the session totals.
    ///
    /// Each line reflects its rent details *at finalize time*, not at add
    /// time. Pricing happens into a fresh list before anything is written
    /// or cleared, so a failure leaves the cart (and any previous invoice)
    /// untouched. On success the cart is emptied: finalizing twice without
    /// new additions fails with [`CoreError::EmptyCart`].
    pub fn finalize_invoice(&mut self) -> StoreResult<InvoiceTotals> {
        if self.cart.is_empty() {
            return Err(CoreError::EmptyCart.into());
        }

        let priced: Vec<Equipment> = self
            .cart
            .items()
            .iter()
            .map(price_equipment)
            .collect::<Result<_, _>>()?;

        self.sink.write_invoice(&priced)?;

        let totals = invoice_totals(&priced);
        info!(
            lines = priced.len(),
            total_price = totals.total_price,
            total_loyalty_points = totals.total_loyalty_points,
            "Invoice finalized"
        );

        self.cart.clear();
        Ok(totals)
    }

    /// Resets the session: clears the cart and best-effort clears any
    /// persisted invoice document.
    ///
    /// Used on error-recovery paths and explicit reset. Always succeeds;
    /// a sink failure during cleanup is logged, not surfaced.
    pub fn reset_session(&mut self) {
        self.cart.clear();

        if let Err(error) = self.sink.clear_invoice() {
            warn!(%error, "Failed to clear invoice during session reset");
        }

        debug!("Session reset");
    }

    /// Current cart size (snapshot count, for observability and tests).
    pub fn cart_len(&self) -> usize {
        self.cart.len()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryCatalogStore;
    use crate::error::StoreError;
    use crate::invoice::MemoryInvoiceSink;
    use rental_core::EquipmentCategory;

    const TEST_CATALOG: &[&str] = &[
        "1;Caterpillar bulldozer;Heavy",
        "2;KMR chainsaw;Regular",
        "3;Kärcher steam cleaner;Specialized",
    ];

    fn repository(
        lines: &[&str],
    ) -> EquipmentRepository<MemoryCatalogStore, MemoryInvoiceSink> {
        EquipmentRepository::new(
            MemoryCatalogStore::new(lines.iter().copied()),
            MemoryInvoiceSink::new(),
        )
    }

    #[test]
    fn test_list_equipment_yields_catalog_only_entities() {
        let repo = repository(TEST_CATALOG);

        let listing = repo.list_equipment().unwrap();

        assert_eq!(listing.len(), 3);
        for equipment in &listing {
            assert_eq!(equipment.rental_days, 0);
            assert_eq!(equipment.price, 0);
            assert_eq!(equipment.loyalty_points, 0);
        }
        assert_eq!(listing[0].name, "Caterpillar bulldozer");
        assert_eq!(listing[0].category, EquipmentCategory::Heavy);
    }

    #[test]
    fn test_list_equipment_propagates_parse_failures() {
        let repo = repository(&["1;Caterpillar bulldozer;Hea"]);

        let err = repo.list_equipment().unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::Parse(ParseError::InvalidCategory { .. }))
        ));
    }

    #[test]
    fn test_get_equipment_by_id() {
        let repo = repository(TEST_CATALOG);

        let equipment = repo.get_equipment_by_id(2).unwrap();
        assert_eq!(equipment.id, 2);
        assert_eq!(equipment.name, "KMR chainsaw");
    }

    #[test]
    fn test_get_equipment_by_id_distinguishes_bad_request_from_missing() {
        let repo = repository(TEST_CATALOG);

        assert!(matches!(
            repo.get_equipment_by_id(0).unwrap_err(),
            StoreError::Core(CoreError::InvalidArgument { id: 0 })
        ));
        assert!(matches!(
            repo.get_equipment_by_id(10).unwrap_err(),
            StoreError::Core(CoreError::NotFound { id: 10 })
        ));
    }

    #[test]
    fn test_add_equipment_none_fails_and_cart_unchanged() {
        let mut repo = repository(TEST_CATALOG);

        let err = repo.add_equipment(None).unwrap_err();

        assert!(matches!(err, StoreError::Core(CoreError::NullInput)));
        assert_eq!(repo.cart_len(), 0);
    }

    #[test]
    fn test_apply_pricing_none_fails() {
        let repo = repository(TEST_CATALOG);

        assert!(matches!(
            repo.apply_pricing(None).unwrap_err(),
            StoreError::Core(CoreError::NullInput)
        ));
    }

    #[test]
    fn test_apply_pricing_is_stateless_recomputation() {
        let repo = repository(TEST_CATALOG);
        let equipment = repo.get_equipment_by_id(1).unwrap().with_rental_days(4);

        let once = repo.apply_pricing(Some(&equipment)).unwrap();
        let twice = repo.apply_pricing(Some(&once)).unwrap();

        assert_eq!(once.price, 340);
        assert_eq!(once.loyalty_points, 2);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apply_pricing_propagates_invalid_duration() {
        let repo = repository(TEST_CATALOG);
        let unconfigured = repo.get_equipment_by_id(1).unwrap();

        assert!(matches!(
            repo.apply_pricing(Some(&unconfigured)).unwrap_err(),
            StoreError::Core(CoreError::InvalidDuration { days: 0 })
        ));
    }

    #[test]
    fn test_finalize_invoice_empty_cart_fails() {
        let mut repo = repository(TEST_CATALOG);

        assert!(matches!(
            repo.finalize_invoice().unwrap_err(),
            StoreError::Core(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_finalize_invoice_prices_persists_and_clears() {
        let mut repo = repository(TEST_CATALOG);
        let picked = repo.get_equipment_by_id(1).unwrap().with_rental_days(4);
        repo.add_equipment(Some(picked)).unwrap();
        assert_eq!(repo.cart_len(), 1);

        let totals = repo.finalize_invoice().unwrap();

        assert_eq!(totals.total_price, 340);
        assert_eq!(totals.total_loyalty_points, 2);
        assert_eq!(repo.cart_len(), 0);
        assert!(repo
            .sink
            .document()
            .unwrap()
            .contains("Caterpillar bulldozer: 340€"));

        // Second finalize with no new additions: cart is gone
        assert!(matches!(
            repo.finalize_invoice().unwrap_err(),
            StoreError::Core(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_finalize_prices_at_finalize_time() {
        // Rent details set after add would be lost if pricing were frozen
        // at add time; entries are re-priced during finalization instead.
        let mut repo = repository(TEST_CATALOG);
        let picked = repo.get_equipment_by_id(2).unwrap().with_rental_days(5);
        repo.add_equipment(Some(picked)).unwrap();

        let totals = repo.finalize_invoice().unwrap();

        // Regular, 5 days: 100 + 120 + 3 × 40
        assert_eq!(totals.total_price, 340);
        assert_eq!(totals.total_loyalty_points, 1);
    }

    #[test]
    fn test_finalize_failure_leaves_cart_intact() {
        let mut repo = repository(TEST_CATALOG);
        // Unconfigured rent days: pricing will fail during finalize
        let unconfigured = repo.get_equipment_by_id(1).unwrap();
        repo.add_equipment(Some(unconfigured)).unwrap();

        let err = repo.finalize_invoice().unwrap_err();

        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidDuration { days: 0 })
        ));
        assert_eq!(repo.cart_len(), 1);
        assert!(repo.sink.document().is_none());
    }

    #[test]
    fn test_reset_session_clears_cart_and_sink() {
        let mut repo = repository(TEST_CATALOG);
        let picked = repo.get_equipment_by_id(1).unwrap().with_rental_days(4);
        repo.add_equipment(Some(picked.clone())).unwrap();
        repo.finalize_invoice().unwrap();
        repo.add_equipment(Some(picked)).unwrap();

        repo.reset_session();

        assert_eq!(repo.cart_len(), 0);
        assert!(repo.sink.document().is_none());
    }

    #[test]
    fn test_end_to_end_session_with_file_stores() {
        use crate::catalog::FileCatalogStore;
        use crate::invoice::FileInvoiceSink;

        let dir = tempfile::tempdir().unwrap();
        let inventory_path = dir.path().join("inventory.txt");
        let invoice_path = dir.path().join("invoice.txt");
        std::fs::write(&inventory_path, "1;Caterpillar bulldozer;Heavy\n").unwrap();

        let mut repo = EquipmentRepository::new(
            FileCatalogStore::new(&inventory_path),
            FileInvoiceSink::new(&invoice_path, '€'),
        );

        let picked = repo.get_equipment_by_id(1).unwrap().with_rental_days(4);
        repo.add_equipment(Some(picked)).unwrap();
        let totals = repo.finalize_invoice().unwrap();

        assert_eq!(totals.total_price, 340);
        let document = std::fs::read_to_string(&invoice_path).unwrap();
        assert!(document.contains("Total price: 340€"));
        assert!(document.contains("Number of bonus points earned: 2"));

        repo.reset_session();
        assert_eq!(std::fs::read_to_string(&invoice_path).unwrap(), "");
    }

    #[test]
    fn test_end_to_end_session() {
        // Catalog → listing → pick → add → finalize → emptied cart
        let mut repo = repository(&["1;Caterpillar bulldozer;Heavy"]);

        let listing = repo.list_equipment().unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].id, 1);
        assert_eq!(listing[0].price, 0);

        let picked = listing[0].clone().with_rental_days(4);
        repo.add_equipment(Some(picked)).unwrap();

        let totals = repo.finalize_invoice().unwrap();
        assert_eq!(totals.total_price, 340);
        assert_eq!(totals.total_loyalty_points, 2);
        assert_eq!(repo.cart_len(), 0);

        let document = repo.sink.document().unwrap();
        assert_eq!(
            document,
            "=== INVOICE ===\n\
             Rent details\n\
             Caterpillar bulldozer: 340€\n\
             Total price: 340€\n\
             Number of bonus points earned: 2\n"
        );
    }
}
