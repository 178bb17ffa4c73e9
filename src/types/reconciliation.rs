//! Reconciliation output types

use super::error::RecordError;
use rust_decimal::Decimal;

/// One priced sale in the report breakdown
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    /// Product name as it appears in the sales record
    pub product: String,

    /// Units sold
    pub quantity: Decimal,

    /// Unit price taken from the catalog
    pub unit_price: Decimal,

    /// quantity × unit_price, rounded to 2 decimal places for display
    pub subtotal: Decimal,
}

/// Result of reconciling a sales ledger against a catalog
///
/// `rows` and `errors` both preserve the order of the sales records that
/// produced them. Every sales record contributes to exactly one of the two.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReconciliationResult {
    /// Sum of all subtotals, rounded once to 2 decimal places
    pub total_cost: Decimal,

    /// Sum of all subtotals at full precision
    pub unrounded_total: Decimal,

    /// One row per successfully priced sale
    pub rows: Vec<BreakdownRow>,

    /// One error per sale that could not be priced
    pub errors: Vec<RecordError>,
}

impl ReconciliationResult {
    /// Error messages in input order
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
