//! # Catalog Store
//!
//! Supplies raw catalog records to the repository. The store hands over
//! plain text lines; validation and parsing stay in rental-core.
//!
//! ## Always-Fresh View
//! The repository re-reads the store on every listing call. There is no
//! caching layer: the catalog view is always current, at a repeated-read
//! cost that is acceptable at this scale.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{StoreError, StoreResult};

/// Source of raw catalog records, queried once per listing request.
pub trait CatalogStore {
    /// Returns the current catalog contents, one record per line.
    fn read_lines(&self) -> StoreResult<Vec<String>>;
}

// =============================================================================
// File-Backed Store
// =============================================================================

/// Catalog store backed by a UTF-8 text file, one `id;name;category`
/// record per line.
#[derive(Debug, Clone)]
pub struct FileCatalogStore {
    path: PathBuf,
}

impl FileCatalogStore {
    /// Creates a store reading from the given inventory file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCatalogStore { path: path.into() }
    }

    /// The inventory file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogStore for FileCatalogStore {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        debug!(path = %self.path.display(), "Reading inventory file");

        let contents = fs::read_to_string(&self.path).map_err(StoreError::CatalogIo)?;
        Ok(contents.lines().map(str::to_string).collect())
    }
}

// =============================================================================
// Memory-Backed Store
// =============================================================================

/// Catalog store serving a fixed line list. Used by tests and demos the
/// way an in-memory database stands in for the real one.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogStore {
    lines: Vec<String>,
}

impl MemoryCatalogStore {
    /// Creates a store over the given records.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemoryCatalogStore {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl CatalogStore for MemoryCatalogStore {
    fn read_lines(&self) -> StoreResult<Vec<String>> {
        Ok(self.lines.clone())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_file_store_reads_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("inventory.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "1;Caterpillar bulldozer;Heavy").unwrap();
        writeln!(file, "2;KMR chainsaw;Regular").unwrap();

        let store = FileCatalogStore::new(&path);
        let lines = store.read_lines().unwrap();

        assert_eq!(
            lines,
            vec![
                "1;Caterpillar bulldozer;Heavy".to_string(),
                "2;KMR chainsaw;Regular".to_string(),
            ]
        );
    }

    #[test]
    fn test_file_store_missing_file_is_catalog_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileCatalogStore::new(dir.path().join("nope.txt"));

        let err = store.read_lines().unwrap_err();
        assert!(matches!(err, StoreError::CatalogIo(_)));
    }

    #[test]
    fn test_memory_store_serves_fixed_lines() {
        let store = MemoryCatalogStore::new(["1;Caterpillar bulldozer;Heavy"]);
        assert_eq!(store.read_lines().unwrap().len(), 1);
    }
}
