//! Core business logic module
//!
//! This module contains the reconciliation logic:
//! - `reconciler` - Joins sales against the catalog and accumulates the total

pub mod reconciler;

pub use reconciler::{reconcile, ReconcileOptions, Reconciler, ZeroQuantityPolicy};
