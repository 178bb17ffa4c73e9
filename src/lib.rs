//! Sales Reconciler Library
//! # Overview
//!
//! This library reconciles a JSON sales ledger against a JSON product catalog,
//! computing the total sales cost and a per-line breakdown while collecting
//! data-quality problems instead of stopping on them.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (catalog, sales records, results, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic:
//!   - [`crate::core::reconciler`] - Joins sales against the catalog and accumulates the total
//! - [`io`] - JSON loading and report rendering
//! - [`pipeline`] - One complete run: load, reconcile, report
//!
//! # Error Handling
//!
//! Errors come in two tiers:
//!
//! - **Fatal**: a file is missing, unreadable or not a JSON array of objects.
//!   The run stops and no report is written.
//! - **Recoverable**: a sale is missing a field, names an unknown product, or
//!   matches a product without a usable price. The sale is skipped, the error
//!   is listed in the report, and processing continues.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::core::{reconcile, ReconcileOptions, Reconciler, ZeroQuantityPolicy};
pub use pipeline::{run, RunConfig, RunOutcome};
pub use types::{
    AppError, BreakdownRow, Catalog, CatalogEntry, Currency, FieldValue, LoadError,
    ReconciliationResult, RecordError, SaleRecord,
};
