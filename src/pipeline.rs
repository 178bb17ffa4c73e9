//! Reconciliation run pipeline
//!
//! Orchestrates a single run by coordinating between the loaders (JSON
//! input), the Reconciler (business logic) and the report module (output).
//!
//! # Flow
//!
//! 1. Load the catalog and the sales ledger; both loads are attempted and every
//!    failure is logged, then the first failure aborts the run
//! 2. Reconcile, timing only the reconciliation itself
//! 3. Render the report once, print it to the console, then overwrite the
//!    report file with the same text
//!
//! No report file is written when either load fails.

use crate::core::{ReconcileOptions, Reconciler};
use crate::io::json_reader::{load_catalog, load_sales};
use crate::io::report::{render_report, write_report_file, DEFAULT_REPORT_FILE};
use crate::types::{AppError, ReconciliationResult};
use log::{error, info};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Everything a run needs to know
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Path of the catalog JSON document
    pub catalog_path: PathBuf,
    /// Path of the sales JSON document
    pub sales_path: PathBuf,
    /// Path of the report file to overwrite
    pub report_path: PathBuf,
    pub options: ReconcileOptions,
}

impl RunConfig {
    /// Create a config writing the report to `SalesResults.txt` with default options
    pub fn new(catalog_path: impl Into<PathBuf>, sales_path: impl Into<PathBuf>) -> Self {
        RunConfig {
            catalog_path: catalog_path.into(),
            sales_path: sales_path.into(),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            options: ReconcileOptions::default(),
        }
    }
}

/// What a successful run produced
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub result: ReconciliationResult,
    /// Time spent reconciling
    pub elapsed: Duration,
    /// The rendered report, as printed and persisted
    pub report: String,
}

/// Execute a complete run
///
/// # Arguments
///
/// * `config` - Input paths, report path and reconciliation options
/// * `console` - Writer receiving the rendered report (stdout in the CLI)
///
/// # Returns
///
/// * `Ok(RunOutcome)` if the report was printed and persisted
/// * `Err(AppError)` if an input could not be loaded or the report could not be written
///
/// # Examples
///
/// ```no_run
/// use sales_reconciler::pipeline::{run, RunConfig};
///
/// let config = RunConfig::new("catalog.json", "sales.json");
/// let mut stdout = std::io::stdout();
///
/// match run(&config, &mut stdout) {
///     Ok(outcome) => eprintln!("{} errors", outcome.result.errors.len()),
///     Err(e) => eprintln!("Fatal error: {}", e),
/// }
/// ```
pub fn run(config: &RunConfig, console: &mut dyn Write) -> Result<RunOutcome, AppError> {
    let catalog = load_catalog(&config.catalog_path)
        .inspect_err(|e| error!("Failed to load catalog: {}", e));
    let sales =
        load_sales(&config.sales_path).inspect_err(|e| error!("Failed to load sales: {}", e));
    let (catalog, sales) = (catalog?, sales?);

    let reconciler = Reconciler::new(config.options);
    let started = Instant::now();
    let result = reconciler.reconcile(&catalog, &sales);
    let elapsed = started.elapsed();

    let report = render_report(&result, elapsed);

    console
        .write_all(report.as_bytes())
        .and_then(|()| console.flush())
        .map_err(|e| AppError::Console {
            message: e.to_string(),
        })?;

    write_report_file(&config.report_path, &report)?;
    info!("Report written to {}", config.report_path.display());

    Ok(RunOutcome {
        result,
        elapsed,
        report,
    })
}
