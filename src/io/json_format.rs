//! JSON format handling for catalog and sales records
//!
//! This module centralizes all input format concerns, providing:
//! - The field names used by each document
//! - Conversion from generic JSON objects to domain types
//! - Conversion from JSON numbers to decimals
//!
//! All functions are pure (no I/O) for easy testing.
//!
//! Field name casing differs between the two documents (`title`/`price` in the
//! catalog, `Product`/`Quantity` in the sales ledger) and must match exactly.

use crate::types::{CatalogEntry, FieldValue, SaleRecord};
use rust_decimal::Decimal;
use serde_json::{Map, Number, Value};
use std::str::FromStr;

/// Catalog field holding the product title
pub const TITLE_FIELD: &str = "title";
/// Catalog field holding the unit price
pub const PRICE_FIELD: &str = "price";
/// Sales field holding the product name
pub const PRODUCT_FIELD: &str = "Product";
/// Sales field holding the quantity sold
pub const QUANTITY_FIELD: &str = "Quantity";

/// Convert a JSON number to a Decimal
///
/// The conversion goes through the number's shortest textual form, so a
/// literal such as `19.99` becomes exactly `19.99` rather than the nearest
/// binary float. Numbers outside the decimal range yield `None`.
pub fn decimal_from_number(number: &Number) -> Option<Decimal> {
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

/// Read a numeric field from a JSON object
pub fn decimal_field(object: &Map<String, Value>, key: &str) -> FieldValue<Decimal> {
    match object.get(key) {
        None => FieldValue::Absent,
        Some(Value::Null) => FieldValue::Null,
        Some(Value::Number(number)) => match decimal_from_number(number) {
            Some(decimal) => FieldValue::Present(decimal),
            None => FieldValue::Invalid,
        },
        Some(_) => FieldValue::Invalid,
    }
}

/// Read a string field from a JSON object
pub fn string_field(object: &Map<String, Value>, key: &str) -> FieldValue<String> {
    match object.get(key) {
        None => FieldValue::Absent,
        Some(Value::Null) => FieldValue::Null,
        Some(Value::String(text)) => FieldValue::Present(text.clone()),
        Some(_) => FieldValue::Invalid,
    }
}

/// Convert a catalog JSON object to a CatalogEntry
///
/// The price is carried as-is (absent, null, invalid or present); deciding
/// what an unusable price means is left to the reconciler.
///
/// # Returns
///
/// Result containing either:
/// - Ok(CatalogEntry) - Entry with a usable title
/// - Err(String) - The title is missing or not a string, so the entry can never match
pub fn convert_catalog_object(object: &Map<String, Value>) -> Result<CatalogEntry, String> {
    let title = match string_field(object, TITLE_FIELD) {
        FieldValue::Present(title) => title,
        FieldValue::Absent | FieldValue::Null => {
            return Err(format!("missing '{}' field", TITLE_FIELD));
        }
        FieldValue::Invalid => {
            return Err(format!("'{}' field is not a string", TITLE_FIELD));
        }
    };

    Ok(CatalogEntry {
        title,
        price: decimal_field(object, PRICE_FIELD),
    })
}

/// Convert a sales JSON object to a SaleRecord
///
/// Never fails: problems with individual fields are represented in the
/// record and reported during reconciliation.
pub fn convert_sale_object(object: &Map<String, Value>) -> SaleRecord {
    SaleRecord {
        product: string_field(object, PRODUCT_FIELD),
        quantity: decimal_field(object, QUANTITY_FIELD),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("Expected JSON object, got {}", other),
        }
    }

    #[rstest]
    #[case::integer(json!(4), Decimal::new(4, 0))]
    #[case::float(json!(1.5), Decimal::new(15, 1))]
    #[case::no_binary_noise(json!(19.99), Decimal::new(1999, 2))]
    #[case::negative(json!(-2.25), Decimal::new(-225, 2))]
    #[case::scientific(json!(1e21), Decimal::from_str("1000000000000000000000").unwrap())]
    fn test_decimal_from_number(#[case] value: Value, #[case] expected: Decimal) {
        let Value::Number(number) = value else {
            panic!("Expected a number");
        };
        assert_eq!(decimal_from_number(&number), Some(expected));
    }

    #[test]
    fn test_decimal_from_number_out_of_range() {
        let Value::Number(number) = json!(1e300) else {
            panic!("Expected a number");
        };
        assert_eq!(decimal_from_number(&number), None);
    }

    #[rstest]
    #[case::absent(json!({}), FieldValue::Absent)]
    #[case::null(json!({"price": null}), FieldValue::Null)]
    #[case::string(json!({"price": "1.5"}), FieldValue::Invalid)]
    #[case::boolean(json!({"price": true}), FieldValue::Invalid)]
    #[case::present(json!({"price": 2.5}), FieldValue::Present(Decimal::new(25, 1)))]
    fn test_decimal_field(#[case] value: Value, #[case] expected: FieldValue<Decimal>) {
        assert_eq!(decimal_field(&object(value), "price"), expected);
    }

    #[test]
    fn test_convert_catalog_object_valid() {
        let entry = convert_catalog_object(&object(json!({"title": "Pen", "price": 1.5}))).unwrap();
        assert_eq!(entry.title, "Pen");
        assert_eq!(entry.price, FieldValue::Present(Decimal::new(15, 1)));
    }

    #[test]
    fn test_convert_catalog_object_keeps_missing_price() {
        let entry = convert_catalog_object(&object(json!({"title": "Pen"}))).unwrap();
        assert_eq!(entry.price, FieldValue::Absent);
    }

    #[rstest]
    #[case::missing_title(json!({"price": 1.0}), "missing 'title' field")]
    #[case::null_title(json!({"title": null, "price": 1.0}), "missing 'title' field")]
    #[case::numeric_title(json!({"title": 7, "price": 1.0}), "not a string")]
    fn test_convert_catalog_object_errors(#[case] value: Value, #[case] expected_error: &str) {
        let result = convert_catalog_object(&object(value));
        assert!(result.is_err());
        assert!(result.unwrap_err().contains(expected_error));
    }

    #[test]
    fn test_convert_sale_object_uses_capitalized_keys() {
        let record = convert_sale_object(&object(json!({"Product": "Pen", "Quantity": 4})));
        assert_eq!(record, SaleRecord::new("Pen", Decimal::new(4, 0)));

        let lowercase = convert_sale_object(&object(json!({"product": "Pen", "quantity": 4})));
        assert_eq!(lowercase.product, FieldValue::Absent);
        assert_eq!(lowercase.quantity, FieldValue::Absent);
    }
}
