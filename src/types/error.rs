//! Error types for the sales reconciler
//!
//! This module defines all error types that can occur during a run.
//! Errors are designed to be descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **Load Errors** ([`LoadError`]): file not found, malformed JSON, other I/O failures.
//!   These are fatal and abort the run before a report is written.
//! - **Record Errors** ([`RecordError`]): missing fields, unknown products, missing prices.
//!   These are recoverable; they are collected in the result and processing continues.
//! - **Application Errors** ([`AppError`]): everything that aborts a run, including
//!   failing to write the report file.

use thiserror::Error;

/// Fatal error raised while loading an input document
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// The document is not well-formed JSON, or is not an array of objects
    #[error("JSON decode error in {path} at line {line}, column {column}: {message}")]
    Decode {
        /// The path of the malformed document
        path: String,
        /// Line where decoding failed (1-based)
        line: usize,
        /// Column where decoding failed (1-based)
        column: usize,
        /// Description of the decoding error
        message: String,
    },

    /// Any other I/O error occurred while reading the file
    #[error("I/O error reading {path}: {message}")]
    Io {
        /// The path being read
        path: String,
        /// Description of the I/O error
        message: String,
    },
}

impl LoadError {
    /// Create a LoadError from an I/O error, classifying missing files
    pub fn from_io(path: &str, error: &std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => LoadError::FileNotFound {
                path: path.to_string(),
            },
            _ => LoadError::Io {
                path: path.to_string(),
                message: error.to_string(),
            },
        }
    }

    /// Create a LoadError from a serde_json error
    ///
    /// Errors that originate from the underlying reader are reported as I/O
    /// failures; syntax, data and premature-EOF errors become decode failures.
    pub fn from_json(path: &str, error: &serde_json::Error) -> Self {
        if error.is_io() {
            return LoadError::Io {
                path: path.to_string(),
                message: error.to_string(),
            };
        }

        LoadError::Decode {
            path: path.to_string(),
            line: error.line(),
            column: error.column(),
            message: error.to_string(),
        }
    }
}

/// Recoverable problem with a single sales record
///
/// The `Display` output of each variant is the message shown in the report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The product or quantity field is absent, null, empty or zero
    #[error("missing product or quantity field")]
    MissingField,

    /// A field is present but holds a value of the wrong type
    #[error("invalid value for field '{field}'")]
    InvalidField {
        /// Name of the offending field as it appears in the input
        field: String,
    },

    /// No catalog entry has a title equal to the product name
    #[error("product '{product}' not found")]
    ProductNotFound {
        /// The product name from the sales record
        product: String,
    },

    /// The matching catalog entry has no price field
    #[error("no price for '{product}'")]
    MissingPrice {
        /// The product name from the sales record
        product: String,
    },

    /// The matching catalog entry has a null or non-numeric price
    #[error("invalid price for '{product}'")]
    InvalidPrice {
        /// The product name from the sales record
        product: String,
    },

    /// quantity × price does not fit in a decimal
    #[error("arithmetic overflow computing subtotal for '{product}'")]
    ArithmeticOverflow {
        /// The product name from the sales record
        product: String,
    },
}

// Helper functions for creating common errors

impl RecordError {
    /// Create an InvalidField error
    pub fn invalid_field(field: &str) -> Self {
        RecordError::InvalidField {
            field: field.to_string(),
        }
    }

    /// Create a ProductNotFound error
    pub fn product_not_found(product: &str) -> Self {
        RecordError::ProductNotFound {
            product: product.to_string(),
        }
    }

    /// Create a MissingPrice error
    pub fn missing_price(product: &str) -> Self {
        RecordError::MissingPrice {
            product: product.to_string(),
        }
    }

    /// Create an InvalidPrice error
    pub fn invalid_price(product: &str) -> Self {
        RecordError::InvalidPrice {
            product: product.to_string(),
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(product: &str) -> Self {
        RecordError::ArithmeticOverflow {
            product: product.to_string(),
        }
    }
}

/// Error that aborts a reconciliation run
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// One of the input documents could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The report could not be printed to the console
    #[error("Failed to print report: {message}")]
    Console {
        /// Description of the I/O error
        message: String,
    },

    /// The report file could not be written
    #[error("Failed to write report to {path}: {message}")]
    ReportWrite {
        /// Path of the report file
        path: String,
        /// Description of the I/O error
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        LoadError::FileNotFound { path: "catalog.json".to_string() },
        "File not found: catalog.json"
    )]
    #[case::decode(
        LoadError::Decode { path: "sales.json".to_string(), line: 3, column: 7, message: "expected value".to_string() },
        "JSON decode error in sales.json at line 3, column 7: expected value"
    )]
    #[case::io(
        LoadError::Io { path: "sales.json".to_string(), message: "Permission denied".to_string() },
        "I/O error reading sales.json: Permission denied"
    )]
    fn test_load_error_display(#[case] error: LoadError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::missing_field(RecordError::MissingField, "missing product or quantity field")]
    #[case::invalid_field(RecordError::invalid_field("Quantity"), "invalid value for field 'Quantity'")]
    #[case::product_not_found(RecordError::product_not_found("Eraser"), "product 'Eraser' not found")]
    #[case::missing_price(RecordError::missing_price("Pen"), "no price for 'Pen'")]
    #[case::invalid_price(RecordError::invalid_price("Pen"), "invalid price for 'Pen'")]
    #[case::overflow(
        RecordError::arithmetic_overflow("Pen"),
        "arithmetic overflow computing subtotal for 'Pen'"
    )]
    fn test_record_error_display(#[case] error: RecordError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::not_found(std::io::ErrorKind::NotFound, true)]
    #[case::permission_denied(std::io::ErrorKind::PermissionDenied, false)]
    fn test_io_error_classification(#[case] kind: std::io::ErrorKind, #[case] not_found: bool) {
        let io_error = std::io::Error::new(kind, "boom");
        let error = LoadError::from_io("data.json", &io_error);
        assert_eq!(matches!(error, LoadError::FileNotFound { .. }), not_found);
        assert_eq!(matches!(error, LoadError::Io { .. }), !not_found);
    }

    #[test]
    fn test_json_error_conversion_keeps_position() {
        let json_error = serde_json::from_str::<serde_json::Value>("[\n  {\"title\": }\n]")
            .expect_err("input is malformed");
        let error = LoadError::from_json("catalog.json", &json_error);

        match error {
            LoadError::Decode { path, line, .. } => {
                assert_eq!(path, "catalog.json");
                assert_eq!(line, 2);
            }
            other => panic!("Expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_app_error_wraps_load_error_transparently() {
        let error: AppError = LoadError::FileNotFound {
            path: "missing.json".to_string(),
        }
        .into();
        assert_eq!(error.to_string(), "File not found: missing.json");
    }
}
