//! Sales reconciliation
//!
//! This module provides the Reconciler that joins a sales ledger against a
//! product catalog and produces the total, the per-line breakdown and the list
//! of record-level errors.
//!
//! The reconciler enforces these rules:
//! - Sales are processed in input order; rows and errors keep that order
//! - Each sale yields exactly one breakdown row or exactly one error
//! - Record-level problems never stop processing
//! - The running total accumulates unrounded subtotals and is rounded once at the end
//! - Only the subtotal shown in each row is rounded to 2 decimal places

use crate::io::json_format::{PRODUCT_FIELD, QUANTITY_FIELD};
use crate::types::{
    BreakdownRow, Catalog, FieldValue, ReconciliationResult, RecordError, SaleRecord,
};
use clap::ValueEnum;
use log::{debug, info};
use rust_decimal::Decimal;

/// Number of decimal places used for subtotals and the final total
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// How a sale with a quantity of exactly zero is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ZeroQuantityPolicy {
    /// Zero counts as a missing quantity and is reported as an error
    #[default]
    Missing,

    /// Zero is a valid quantity and produces a row with a zero subtotal
    Valid,
}

/// Options controlling reconciliation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileOptions {
    pub zero_quantity: ZeroQuantityPolicy,
}

/// Joins sales records against a catalog
///
/// The reconciler holds no state between calls: reconciling the same inputs
/// twice yields identical results.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reconciler {
    options: ReconcileOptions,
}

/// Reconcile with default options
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use sales_reconciler::core::reconcile;
/// use sales_reconciler::types::{Catalog, CatalogEntry, FieldValue, SaleRecord};
///
/// let catalog = Catalog::from_entries(vec![CatalogEntry {
///     title: "Pen".to_string(),
///     price: FieldValue::Present(Decimal::new(15, 1)),
/// }]);
/// let sales = vec![SaleRecord::new("Pen", Decimal::new(4, 0))];
///
/// let result = reconcile(&catalog, &sales);
/// assert_eq!(result.total_cost, Decimal::new(600, 2));
/// assert!(result.errors.is_empty());
/// ```
pub fn reconcile(catalog: &Catalog, sales: &[SaleRecord]) -> ReconciliationResult {
    Reconciler::default().reconcile(catalog, sales)
}

impl Reconciler {
    /// Create a Reconciler with the given options
    pub fn new(options: ReconcileOptions) -> Self {
        Reconciler { options }
    }

    /// Reconcile `sales` against `catalog`
    ///
    /// # Arguments
    ///
    /// * `catalog` - Title-indexed price list
    /// * `sales` - Sales records in input order
    ///
    /// # Returns
    ///
    /// A `ReconciliationResult` with the rounded total, the breakdown rows and
    /// one error per sale that could not be priced. This method never fails.
    pub fn reconcile(&self, catalog: &Catalog, sales: &[SaleRecord]) -> ReconciliationResult {
        let mut running_total = Decimal::ZERO;
        let mut rows = Vec::with_capacity(sales.len());
        let mut errors = Vec::new();

        for (index, sale) in sales.iter().enumerate() {
            let outcome = self.price_sale(catalog, sale).and_then(|(row, subtotal)| {
                let total = running_total
                    .checked_add(subtotal)
                    .ok_or_else(|| RecordError::arithmetic_overflow(&row.product))?;
                Ok((row, total))
            });

            match outcome {
                Ok((row, total)) => {
                    running_total = total;
                    rows.push(row);
                }
                Err(e) => {
                    debug!("Sale {}: {}", index + 1, e);
                    errors.push(e);
                }
            }
        }

        info!(
            "Reconciled {} sales: {} priced, {} errors",
            sales.len(),
            rows.len(),
            errors.len()
        );

        ReconciliationResult {
            total_cost: running_total.round_dp(MONEY_DECIMAL_PLACES),
            unrounded_total: running_total,
            rows,
            errors,
        }
    }

    /// Price a single sale
    ///
    /// # Returns
    ///
    /// * `Ok((BreakdownRow, Decimal))` - The display row and the unrounded subtotal
    /// * `Err(RecordError)` - Why the sale contributes nothing to the total
    fn price_sale(
        &self,
        catalog: &Catalog,
        sale: &SaleRecord,
    ) -> Result<(BreakdownRow, Decimal), RecordError> {
        let (product, quantity) = self.extract_fields(sale)?;

        let entry = catalog
            .get(product)
            .ok_or_else(|| RecordError::product_not_found(product))?;

        let unit_price = match entry.price {
            FieldValue::Present(price) => price,
            FieldValue::Absent => return Err(RecordError::missing_price(product)),
            FieldValue::Null | FieldValue::Invalid => {
                return Err(RecordError::invalid_price(product))
            }
        };

        let subtotal = quantity
            .checked_mul(unit_price)
            .ok_or_else(|| RecordError::arithmetic_overflow(product))?;

        let row = BreakdownRow {
            product: product.to_string(),
            quantity,
            unit_price,
            subtotal: subtotal.round_dp(MONEY_DECIMAL_PLACES),
        };

        Ok((row, subtotal))
    }

    /// Validate and extract the product name and quantity of a sale
    ///
    /// Missing fields take precedence over fields with the wrong type, so a
    /// record lacking either field always reports `MissingField`.
    fn extract_fields<'a>(&self, sale: &'a SaleRecord) -> Result<(&'a str, Decimal), RecordError> {
        let product_missing = match &sale.product {
            FieldValue::Present(name) => name.is_empty(),
            other => other.is_missing(),
        };
        let quantity_missing = match &sale.quantity {
            FieldValue::Present(quantity) => {
                quantity.is_zero() && self.options.zero_quantity == ZeroQuantityPolicy::Missing
            }
            other => other.is_missing(),
        };
        if product_missing || quantity_missing {
            return Err(RecordError::MissingField);
        }

        let product = match &sale.product {
            FieldValue::Present(name) => name.as_str(),
            _ => return Err(RecordError::invalid_field(PRODUCT_FIELD)),
        };
        let quantity = match sale.quantity {
            FieldValue::Present(quantity) => quantity,
            _ => return Err(RecordError::invalid_field(QUANTITY_FIELD)),
        };

        Ok((product, quantity))
    }
}
