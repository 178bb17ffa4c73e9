//! JSON document loader
//!
//! Reads an input document into generic JSON objects and converts them into
//! domain types. Delegates format concerns to the json_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, malformed JSON, other I/O errors) are
//!   returned as [`LoadError`] so the caller decides whether to continue
//! - Individual catalog entries that can never match (no usable title) are
//!   logged and skipped
//! - Problems with individual sales fields are kept in the records and
//!   reported later by the reconciler
//!
//! The file handle is owned by [`load_records`] and released before it
//! returns, on success and on every error path.

use crate::io::json_format::{convert_catalog_object, convert_sale_object};
use crate::types::{Catalog, LoadError, SaleRecord};
use log::{debug, warn};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Decoded input document: a sequence of JSON objects, unmodified
pub type JsonRecords = Vec<Map<String, Value>>;

/// Load a JSON document expected to hold an array of objects
///
/// # Arguments
///
/// * `path` - Path to the JSON file
///
/// # Returns
///
/// * `Ok(JsonRecords)` - The decoded objects, in document order
/// * `Err(LoadError)` - The file is missing, unreadable, or not an array of objects
///
/// # Examples
///
/// ```no_run
/// use sales_reconciler::io::json_reader::load_records;
/// use std::path::Path;
///
/// match load_records(Path::new("catalog.json")) {
///     Ok(records) => println!("Loaded {} records", records.len()),
///     Err(e) => eprintln!("Failed to load: {}", e),
/// }
/// ```
pub fn load_records(path: &Path) -> Result<JsonRecords, LoadError> {
    let display = path.display().to_string();

    let file = File::open(path).map_err(|e| LoadError::from_io(&display, &e))?;
    let reader = BufReader::new(file);

    let records: JsonRecords =
        serde_json::from_reader(reader).map_err(|e| LoadError::from_json(&display, &e))?;

    debug!("Loaded {} records from {}", records.len(), display);
    Ok(records)
}

/// Load the product catalog from `path`
///
/// Entries without a usable title are skipped with a warning. Duplicate
/// titles resolve to the first occurrence in the document.
pub fn load_catalog(path: &Path) -> Result<Catalog, LoadError> {
    let records = load_records(path)?;
    let mut catalog = Catalog::new();

    for (index, object) in records.iter().enumerate() {
        match convert_catalog_object(object) {
            Ok(entry) => {
                catalog.insert(entry);
            }
            Err(e) => warn!(
                "{}: skipping catalog entry {}: {}",
                path.display(),
                index + 1,
                e
            ),
        }
    }

    Ok(catalog)
}

/// Load the sales ledger from `path`, preserving document order
pub fn load_sales(path: &Path) -> Result<Vec<SaleRecord>, LoadError> {
    let records = load_records(path)?;
    Ok(records.iter().map(convert_sale_object).collect())
}
