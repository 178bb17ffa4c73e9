//! Sales ledger types

use super::field::FieldValue;
use rust_decimal::Decimal;

/// One sale event from the sales ledger
///
/// Both fields come from loosely-typed JSON, so neither is guaranteed to be
/// usable. Input order is significant: the reconciler preserves it in its
/// rows and errors.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Product name, matched against catalog titles
    pub product: FieldValue<String>,

    /// Number of units sold
    pub quantity: FieldValue<Decimal>,
}

impl SaleRecord {
    /// Create a record with both fields present
    pub fn new(product: &str, quantity: Decimal) -> Self {
        SaleRecord {
            product: FieldValue::Present(product.to_string()),
            quantity: FieldValue::Present(quantity),
        }
    }
}
