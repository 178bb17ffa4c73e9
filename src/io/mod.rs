//! I/O module
//!
//! Handles JSON input and report output.
//!
//! # Components
//!
//! - `json_format` - JSON format handling (field names, object conversion)
//! - `json_reader` - Loads catalog and sales documents from disk
//! - `report` - Report rendering and persistence

pub mod json_format;
pub mod json_reader;
pub mod report;

pub use json_format::{convert_catalog_object, convert_sale_object};
pub use json_reader::{load_catalog, load_records, load_sales};
pub use report::{render_report, write_report_file, DEFAULT_REPORT_FILE};
