//! Regatta export ingestion.
//!
//! Reads entry-system CSV exports into raw tables and loads the field-mapping
//! configuration that tells the pipeline which columns to keep.

pub mod csv_table;
pub mod error;
pub mod mapping;

pub use csv_table::{frame_from_rows, read_report_csv, unique_headers};
pub use error::{IngestError, Result};
pub use mapping::{load_field_mapping, parse_field_mapping};
