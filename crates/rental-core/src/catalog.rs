//! # Catalog Parsing
//!
//! Parses raw catalog records into validated equipment entities.
//!
//! ## Record Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Record Layout                            │
//! │                                                                     │
//! │  1;Caterpillar bulldozer;Heavy                                      │
//! │  │ │                     │                                          │
//! │  │ │                     └── category: exact enum name              │
//! │  │ └── name: free text                                              │
//! │  └── id: positive integer                                           │
//! │                                                                     │
//! │  Semicolon-delimited, one record per line, UTF-8.                   │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Strictness
//! Parsing fails fast: the first malformed record aborts the whole listing
//! and no partial results reach the caller. Billing correctness depends on
//! catalog integrity, so malformed records are never silently skipped.

use crate::error::ParseError;
use crate::types::{Equipment, EquipmentCategory};

/// Parses a single `id;name;category` record.
///
/// Parsed equipment is catalog-only: rent days, price and loyalty points
/// all start at zero.
///
/// ## Failure Modes
/// - Id token missing, non-numeric, zero or negative → [`ParseError::InvalidId`]
/// - Category token missing or not an exact category name →
///   [`ParseError::InvalidCategory`]
///
/// Fields past the third are ignored. A missing name or category field is
/// treated as an empty token, so short records still fail with a typed
/// error instead of panicking.
///
/// ## Example
/// ```rust
/// use rental_core::catalog::parse_record;
/// use rental_core::types::EquipmentCategory;
///
/// let equipment = parse_record("1;Caterpillar bulldozer;Heavy").unwrap();
/// assert_eq!(equipment.id, 1);
/// assert_eq!(equipment.category, EquipmentCategory::Heavy);
/// assert_eq!(equipment.price, 0);
/// ```
pub fn parse_record(record: &str) -> Result<Equipment, ParseError> {
    let mut fields = record.split(';');

    // split always yields at least one item, the id token
    let id_token = fields.next().unwrap_or_default();
    let id: i64 = id_token.parse().map_err(|_| ParseError::InvalidId {
        record: record.to_string(),
    })?;
    if id <= 0 {
        return Err(ParseError::InvalidId {
            record: record.to_string(),
        });
    }

    let name = fields.next().unwrap_or_default();
    let category_token = fields.next().unwrap_or_default();

    let category =
        EquipmentCategory::from_name(category_token).map_err(|_| ParseError::InvalidCategory {
            token: category_token.to_string(),
        })?;

    Ok(Equipment::from_catalog(id, name, category))
}

/// Parses a sequence of catalog records lazily, one result per record.
///
/// ## Usage
/// Callers that need the whole listing collect into a `Result`, which
/// aborts on the first malformed record with no partial results:
///
/// ```rust
/// use rental_core::catalog::parse_records;
/// use rental_core::error::ParseError;
/// use rental_core::types::Equipment;
///
/// let lines = ["1;Caterpillar bulldozer;Heavy", "2;KMR chainsaw;Regular"];
/// let listing: Result<Vec<Equipment>, ParseError> =
///     parse_records(lines.iter().copied()).collect();
/// assert_eq!(listing.unwrap().len(), 2);
/// ```
pub fn parse_records<'a, I>(records: I) -> impl Iterator<Item = Result<Equipment, ParseError>> + 'a
where
    I: IntoIterator<Item = &'a str>,
    I::IntoIter: 'a,
{
    records.into_iter().map(parse_record)
}

// =============================================================================
// Unit Tests
// =============================================================================
