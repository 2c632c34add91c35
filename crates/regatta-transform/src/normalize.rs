//! Column normalization.
//!
//! Raw exports are reduced to the mapped columns, in mapping order, under
//! their canonical names. Required columns are checked here so a run aborts
//! before any row is silently dropped.

use polars::prelude::DataFrame;
use regatta_common::column_strings;
use regatta_model::{PipelineError, ReportKind, ReportMapping, Result};
use tracing::debug;

/// Select and rename the mapped columns of a raw export.
///
/// # Errors
///
/// - [`PipelineError::ColumnIndexOutOfRange`] when a mapping points past the
///   last raw column.
/// - [`PipelineError::BlankRequired`] when a required column has blank cells.
pub fn normalize_columns(
    raw: &DataFrame,
    mapping: &ReportMapping,
    kind: ReportKind,
) -> Result<DataFrame> {
    let mut columns = Vec::with_capacity(mapping.columns.len());
    for entry in &mapping.columns {
        let Some(source) = raw.select_at_idx(entry.index) else {
            return Err(PipelineError::ColumnIndexOutOfRange {
                report: kind.label().to_string(),
                column: entry.name.clone(),
                index: entry.index,
                width: raw.width(),
            });
        };
        let mut column = source.clone();
        column.rename(entry.name.as_str().into());
        columns.push(column);
    }
    let normalized = DataFrame::new(columns)?;
    check_required(&normalized, mapping, kind)?;
    debug!(
        report = kind.label(),
        raw_columns = raw.width(),
        columns = normalized.width(),
        rows = normalized.height(),
        "normalized columns"
    );
    Ok(normalized)
}

fn check_required(df: &DataFrame, mapping: &ReportMapping, kind: ReportKind) -> Result<()> {
    for name in &mapping.required {
        let blanks = column_strings(df, name)?
            .iter()
            .filter(|value| value.is_none())
            .count();
        if blanks > 0 {
            return Err(PipelineError::BlankRequired {
                report: kind.label().to_string(),
                column: name.clone(),
                count: blanks,
            });
        }
    }
    Ok(())
}

/// Reorder a normalized table to its canonical column list.
///
/// # Errors
///
/// Returns [`PipelineError::MissingColumn`] naming the first canonical column
/// the mapping did not produce.
pub fn select_canonical(df: &DataFrame, canonical: &[&str], kind: ReportKind) -> Result<DataFrame> {
    if let Some(missing) = canonical.iter().find(|name| df.column(name).is_err()) {
        return Err(PipelineError::MissingColumn {
            report: kind.label().to_string(),
            column: (*missing).to_string(),
        });
    }
    Ok(df.select(canonical.iter().copied())?)
}

#[cfg(test)]
mod tests {
    use regatta_common::string_column;
    use regatta_model::{ColumnMapping, ErrorKind};

    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn raw() -> DataFrame {
        DataFrame::new(vec![
            string_column("Team Id", vec![s("teams/1"), s("teams/2")]),
            string_column("Ignored", vec![s("x"), s("y")]),
            string_column("Club", vec![s("Tyne ARC"), None]),
        ])
        .unwrap()
    }

    fn mapping(required: &[&str]) -> ReportMapping {
        ReportMapping::new(
            vec![ColumnMapping::new(2, "club"), ColumnMapping::new(0, "crew id")],
            required.iter().map(|r| (*r).to_string()).collect(),
        )
    }

    #[test]
    fn selects_by_index_in_mapping_order() {
        let df = normalize_columns(&raw(), &mapping(&["crew id"]), ReportKind::Teams).unwrap();
        let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
        assert_eq!(names, vec!["club", "crew id"]);
        assert_eq!(column_strings(&df, "crew id").unwrap()[1], s("teams/2"));
    }

    #[test]
    fn blank_required_column_aborts() {
        let err = normalize_columns(&raw(), &mapping(&["club"]), ReportKind::Teams).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Schema);
        assert_eq!(
            err.to_string(),
            "teams report column 'club' is blank in 1 row(s)"
        );
    }

    #[test]
    fn index_out_of_range_aborts() {
        let bad = ReportMapping::new(vec![ColumnMapping::new(9, "club")], Vec::new());
        let err = normalize_columns(&raw(), &bad, ReportKind::Teams).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::ColumnIndexOutOfRange {
                index: 9,
                width: 3,
                ..
            }
        ));
    }

    #[test]
    fn canonical_selection_reports_missing_column() {
        let df = normalize_columns(&raw(), &mapping(&[]), ReportKind::Teams).unwrap();
        let ordered = select_canonical(&df, &["crew id", "club"], ReportKind::Teams).unwrap();
        assert_eq!(ordered.get_column_names()[0].as_str(), "crew id");

        let err = select_canonical(&df, &["crew id", "seats"], ReportKind::Teams).unwrap_err();
        assert_eq!(err.to_string(), "teams report is missing required column 'seats'");
    }
}
