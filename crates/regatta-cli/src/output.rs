//! CSV and JSON writers for report frames.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use regatta_common::column_value_string;
use serde::Serialize;

/// File name of the members table export.
pub const MEMBERS_FILE: &str = "members.csv";
/// File name of the JSON run summary.
pub const SUMMARY_FILE: &str = "summary.json";

/// Write a frame as CSV: one header row, then one record per row.
///
/// Nulls are written as empty cells and booleans as `Y`/`N`.
pub fn write_frame_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer =
        csv::Writer::from_path(path).with_context(|| format!("create {}", path.display()))?;
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    writer
        .write_record(&names)
        .with_context(|| format!("write header to {}", path.display()))?;
    for idx in 0..df.height() {
        let record: Vec<String> = names
            .iter()
            .map(|name| column_value_string(df, name, idx))
            .collect();
        writer
            .write_record(&record)
            .with_context(|| format!("write row {} to {}", idx + 1, path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

/// Write any serializable value as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("serialize {}", path.display()))?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
