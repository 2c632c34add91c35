//! Error types for export ingestion.

use std::path::PathBuf;

use regatta_model::MappingError;
use thiserror::Error;

/// Errors that can occur while loading exports or configuration.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV record.
    #[error("failed to parse CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV file has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// Failed to parse the mapping file.
    #[error("failed to parse TOML mapping {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Mapping parsed but is inconsistent.
    #[error("invalid field mapping {path}: {source}")]
    InvalidMapping {
        path: PathBuf,
        #[source]
        source: MappingError,
    },

    /// Failed to assemble the table.
    #[error("failed to build table from {path}: {source}")]
    Table {
        path: PathBuf,
        #[source]
        source: polars::prelude::PolarsError,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
