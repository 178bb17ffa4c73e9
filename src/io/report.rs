//! Report rendering and output
//!
//! Renders a [`ReconciliationResult`] into the plain-text sales report. The
//! same text is printed to the console and persisted to the report file, so
//! rendering is kept pure and separate from writing.
//!
//! # Layout
//!
//! ```txt
//! Se presentaron errores:
//! * product 'Eraser' not found
//!
//! Resultado de las ventas:
//!
//! Producto                                  Cantidad  Precio Unitario    Subtotal
//! --------------------------------------------------------------------------------
//! Pen                                          4            1.5            6.0
//! --------------------------------------------------------------------------------
//! * Costo Total: $6.00
//! * Tiempo Transcurrido: 0.000012 segundos
//! ```
//!
//! The error block only appears when at least one record failed.

use crate::types::{AppError, BreakdownRow, Currency, ReconciliationResult};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default name of the persisted report, relative to the working directory
pub const DEFAULT_REPORT_FILE: &str = "SalesResults.txt";

const PRODUCT_WIDTH: usize = 40;
const QUANTITY_WIDTH: usize = 10;
const AMOUNT_WIDTH: usize = 15;
const RULE_WIDTH: usize = 80;

/// Render the full report text
///
/// # Arguments
///
/// * `result` - The reconciliation result to render
/// * `elapsed` - Time spent reconciling
pub fn render_report(result: &ReconciliationResult, elapsed: Duration) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, result, elapsed);
    out
}

fn write_report(
    out: &mut String,
    result: &ReconciliationResult,
    elapsed: Duration,
) -> std::fmt::Result {
    if result.has_errors() {
        writeln!(out, "Se presentaron errores:")?;
        for error in &result.errors {
            writeln!(out, "* {}", error)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Resultado de las ventas:")?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<pw$} {:^qw$} {:^aw$} {:^aw$}",
        "Producto",
        "Cantidad",
        "Precio Unitario",
        "Subtotal",
        pw = PRODUCT_WIDTH,
        qw = QUANTITY_WIDTH,
        aw = AMOUNT_WIDTH,
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for row in &result.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    writeln!(out, "* Costo Total: {}", Currency(result.total_cost))?;
    writeln!(
        out,
        "* Tiempo Transcurrido: {:.6} segundos",
        elapsed.as_secs_f64()
    )?;
    Ok(())
}

/// Format a single breakdown row as a table line
pub fn format_row(row: &BreakdownRow) -> String {
    // Decimals are stringified first so alignment applies to the full text.
    format!(
        "{:<pw$} {:^qw$} {:^aw$} {:^aw$}",
        row.product,
        row.quantity.to_string(),
        row.unit_price.to_string(),
        row.subtotal.to_string(),
        pw = PRODUCT_WIDTH,
        qw = QUANTITY_WIDTH,
        aw = AMOUNT_WIDTH,
    )
}

/// Write the rendered report to `path`
///
/// Any existing file is truncated; the contents are written in one call.
pub fn write_report_file(path: &Path, contents: &str) -> Result<(), AppError> {
    fs::write(path, contents).map_err(|e| AppError::ReportWrite {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordError;
    use rust_decimal::Decimal;

    fn pen_row() -> BreakdownRow {
        BreakdownRow {
            product: "Pen".to_string(),
            quantity: Decimal::new(4, 0),
            unit_price: Decimal::new(15, 1),
            subtotal: Decimal::new(60, 1),
        }
    }

    #[test]
    fn test_format_row_alignment() {
        let line = format_row(&pen_row());

        assert!(line.starts_with(&format!("{:<40} ", "Pen")));
        assert_eq!(line.len(), 40 + 1 + 10 + 1 + 15 + 1 + 15);
        assert_eq!(&line[41..51], "    4     ");
        assert_eq!(&line[52..67], "      1.5      ");
        assert_eq!(&line[68..83], "      6.0      ");
    }

    #[test]
    fn test_render_report_without_errors() {
        let result = ReconciliationResult {
            total_cost: Decimal::new(600, 2),
            unrounded_total: Decimal::new(60, 1),
            rows: vec![pen_row()],
            errors: vec![],
        };

        let report = render_report(&result, Duration::from_millis(1500));

        assert!(!report.contains("Se presentaron errores"));
        assert!(report.starts_with("\nResultado de las ventas:\n\nProducto"));
        assert!(report.contains(&format_row(&pen_row())));
        assert!(report.contains("* Costo Total: $6.00\n"));
        assert!(report.ends_with("* Tiempo Transcurrido: 1.500000 segundos\n"));
        assert_eq!(report.matches(&"-".repeat(80)).count(), 2);
    }

    #[test]
    fn test_render_report_lists_errors_first() {
        let result = ReconciliationResult {
            errors: vec![
                RecordError::product_not_found("Eraser"),
                RecordError::MissingField,
            ],
            ..Default::default()
        };

        let report = render_report(&result, Duration::ZERO);

        assert!(report.starts_with(
            "Se presentaron errores:\n\
             * product 'Eraser' not found\n\
             * missing product or quantity field\n\
             \nResultado de las ventas:\n"
        ));
        assert!(report.contains("* Costo Total: $0.00\n"));
    }

    #[test]
    fn test_write_report_file_overwrites_previous_content() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join(DEFAULT_REPORT_FILE);
        fs::write(&path, "stale content that is much longer than the new report")
            .expect("Failed to seed report file");

        write_report_file(&path, "fresh\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }

    #[test]
    fn test_write_report_file_reports_failure() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("missing").join(DEFAULT_REPORT_FILE);

        let error = write_report_file(&path, "report").unwrap_err();
        assert!(matches!(error, AppError::ReportWrite { .. }));
    }
}
