//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `catalog`: Catalog entries and the title index used for lookups
//! - `sale`: Sales ledger records
//! - `field`: Explicit presence model for optional JSON fields
//! - `reconciliation`: Breakdown rows and the reconciliation result
//! - `money`: Currency display formatting
//! - `error`: Error types for loading, reconciling and reporting

pub mod catalog;
pub mod error;
pub mod field;
pub mod money;
pub mod reconciliation;
pub mod sale;

pub use catalog::{Catalog, CatalogEntry};
pub use error::{AppError, LoadError, RecordError};
pub use field::FieldValue;
pub use money::Currency;
pub use reconciliation::{BreakdownRow, ReconciliationResult};
pub use sale::SaleRecord;
