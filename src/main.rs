//! Sales Reconciler CLI
//!
//! Command-line interface for computing total sales from JSON files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- catalog.json sales.json
//! cargo run -- --output report.txt catalog.json sales.json
//! cargo run -- --zero-quantity valid catalog.json sales.json
//! RUST_LOG=debug cargo run -- catalog.json sales.json
//! ```
//!
//! The program prints the report to stdout and writes the same text to
//! `SalesResults.txt` (or the `--output` path). Logs go to stderr.
//!
//! # Exit Codes
//!
//! - 0: Success (including runs with record-level errors)
//! - 1: Error (file not found, malformed JSON, report not writable)
//! - 2: Invalid arguments

use sales_reconciler::cli;
use sales_reconciler::pipeline;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Parse command-line arguments using clap
    let args = cli::parse_args();
    let config = args.to_run_config();

    let mut output = std::io::stdout();
    if let Err(e) = pipeline::run(&config, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
