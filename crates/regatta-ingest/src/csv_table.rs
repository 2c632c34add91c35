//! CSV export loading.
//!
//! Exports are read without type inference: every column becomes a nullable
//! String column and later stages coerce what they need. Columns are picked
//! by position downstream, so headers only have to be unique, not meaningful.

use std::collections::BTreeSet;
use std::path::Path;

use csv::ReaderBuilder;
use polars::prelude::{DataFrame, PolarsResult};
use regatta_common::string_column;
use tracing::debug;

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    trimmed.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn normalize_cell(raw: &str) -> Option<String> {
    let trimmed = raw.trim().trim_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Make headers usable as column names.
///
/// Blank headers become `column N`; repeated headers get their position
/// appended so that no two columns share a name.
pub fn unique_headers(raw: &[String]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    let mut headers = Vec::with_capacity(raw.len());
    for (idx, value) in raw.iter().enumerate() {
        let header = normalize_header(value);
        let mut name = if header.is_empty() {
            format!("column {idx}")
        } else {
            header
        };
        if seen.contains(&name) {
            name = format!("{name} ({idx})");
        }
        seen.insert(name.clone());
        headers.push(name);
    }
    headers
}

/// Build an all-String frame from headers and rows.
///
/// Short rows are padded with nulls; cells beyond the header width are dropped.
pub fn frame_from_rows(headers: &[String], rows: &[Vec<Option<String>>]) -> PolarsResult<DataFrame> {
    let mut columns = Vec::with_capacity(headers.len());
    for (col_idx, header) in headers.iter().enumerate() {
        let values: Vec<Option<String>> = rows
            .iter()
            .map(|row| row.get(col_idx).cloned().flatten())
            .collect();
        columns.push(string_column(header, values));
    }
    DataFrame::new(columns)
}

/// Read an export CSV into a raw table.
///
/// The first non-blank record is the header row. Fully blank records are
/// skipped.
///
/// # Errors
///
/// Returns an error when the file cannot be read, a record is malformed, or
/// the file has no header row.
pub fn read_report_csv(path: &Path) -> Result<DataFrame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;

    let mut header_row: Option<Vec<String>> = None;
    let mut rows: Vec<Vec<Option<String>>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if header_row.is_none() {
            if record.iter().all(|value| value.trim().is_empty()) {
                continue;
            }
            header_row = Some(record.iter().map(str::to_string).collect());
            continue;
        }
        let row: Vec<Option<String>> = record.iter().map(normalize_cell).collect();
        if row.iter().all(Option::is_none) {
            continue;
        }
        rows.push(row);
    }

    let Some(header_row) = header_row else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    let headers = unique_headers(&header_row);
    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read export"
    );
    frame_from_rows(&headers, &rows).map_err(|source| IngestError::Table {
        path: path.to_path_buf(),
        source,
    })
}
