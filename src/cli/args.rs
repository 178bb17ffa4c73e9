use crate::core::{ReconcileOptions, ZeroQuantityPolicy};
use crate::io::report::DEFAULT_REPORT_FILE;
use crate::pipeline::RunConfig;
use clap::Parser;
use std::path::PathBuf;

/// Reconcile a sales ledger against a product catalog
#[derive(Parser, Debug)]
#[command(name = "compute-sales")]
#[command(about = "Compute total sales from a JSON price catalog and a JSON sales ledger", long_about = None)]
pub struct CliArgs {
    /// Catalog JSON file path containing products with `title` and `price`
    #[arg(value_name = "CATALOG", help = "Path to the product catalog JSON file")]
    pub catalog_file: PathBuf,

    /// Sales JSON file path containing records with `Product` and `Quantity`
    #[arg(value_name = "SALES", help = "Path to the sales ledger JSON file")]
    pub sales_file: PathBuf,

    /// Where to write the report (overwritten on every run)
    #[arg(
        long = "output",
        value_name = "PATH",
        default_value = DEFAULT_REPORT_FILE,
        help = "Report file path"
    )]
    pub output: PathBuf,

    /// How sales with a quantity of zero are treated
    #[arg(
        long = "zero-quantity",
        value_name = "POLICY",
        default_value = "missing",
        help = "Zero quantities: 'missing' reports an error, 'valid' prices them at zero"
    )]
    pub zero_quantity: ZeroQuantityPolicy,
}

impl CliArgs {
    /// Build the run configuration from the parsed arguments
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            catalog_path: self.catalog_file.clone(),
            sales_path: self.sales_file.clone(),
            report_path: self.output.clone(),
            options: ReconcileOptions {
                zero_quantity: self.zero_quantity,
            },
        }
    }
}
