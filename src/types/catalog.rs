//! Product catalog types
//!
//! The catalog is read-only reference data for a run. Entries are indexed by
//! title once, when the catalog is built, so every sale is a single map lookup.
//!
//! # Duplicate Handling
//!
//! If several entries share a title, only the first occurrence is kept.
//! Subsequent entries with the same title are ignored.

use super::field::FieldValue;
use log::{debug, warn};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// A single product in the price list
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    /// Product title, matched exactly (case-sensitive) against sale products
    pub title: String,

    /// Unit price
    pub price: FieldValue<Decimal>,
}

/// Title-indexed product catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Map of product title to its first catalog entry
    entries: HashMap<String, CatalogEntry>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Catalog {
            entries: HashMap::new(),
        }
    }

    /// Build a catalog from entries in document order
    ///
    /// The first entry for a given title wins; later duplicates are dropped.
    pub fn from_entries(entries: impl IntoIterator<Item = CatalogEntry>) -> Self {
        let mut catalog = Catalog::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    /// Insert an entry unless its title is already present
    ///
    /// # Returns
    ///
    /// `true` if the entry was stored, `false` if an earlier entry with the
    /// same title already exists
    pub fn insert(&mut self, entry: CatalogEntry) -> bool {
        if self.entries.contains_key(&entry.title) {
            debug!("Ignoring duplicate catalog entry for '{}'", entry.title);
            return false;
        }
        if entry.price.present().is_none() {
            warn!("Catalog entry '{}' has no usable price", entry.title);
        }
        self.entries.insert(entry.title.clone(), entry);
        true
    }

    /// Look up the entry whose title exactly equals `title`
    pub fn get(&self, title: &str) -> Option<&CatalogEntry> {
        self.entries.get(title)
    }

    /// Number of distinct titles in the catalog
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
