//! Y/N flag coercion.
//!
//! The exports encode flags as `Y`, `N` or an empty cell. An empty cell is
//! indistinguishable from `N`.

use polars::prelude::{AnyValue, DataFrame, IntoColumn, NamedFrom, Series};
use regatta_common::any_to_string;
use regatta_model::{PipelineError, Result};

/// Coerce one flag cell.
///
/// `row` is 1-based and only used for the error.
///
/// # Errors
///
/// Returns [`PipelineError::InvalidFlag`] for any literal other than `Y`,
/// `N` or blank. Padded literals such as `" Y "` are rejected too.
///
/// # Examples
///
/// ```
/// use regatta_transform::booleans::coerce_flag;
///
/// assert!(coerce_flag("cox", 1, Some("Y")).unwrap());
/// assert!(!coerce_flag("cox", 1, Some("N")).unwrap());
/// assert!(!coerce_flag("cox", 1, None).unwrap());
/// assert!(coerce_flag("cox", 1, Some("Yes")).is_err());
/// ```
pub fn coerce_flag(column: &str, row: usize, value: Option<&str>) -> Result<bool> {
    match value {
        None | Some("N") => Ok(false),
        Some("Y") => Ok(true),
        Some(blank) if blank.trim().is_empty() => Ok(false),
        Some(other) => Err(PipelineError::InvalidFlag {
            column: column.to_string(),
            row,
            value: other.to_string(),
        }),
    }
}

/// Return a copy of `df` with the named flag columns typed Boolean.
///
/// Columns that are already Boolean keep their values; nulls become false.
///
/// # Errors
///
/// Fails on the first out-of-domain literal, or if a column is missing.
pub fn coerce_boolean_columns(df: &DataFrame, columns: &[&str]) -> Result<DataFrame> {
    let mut out = df.clone();
    for name in columns {
        let column = df.column(name)?;
        let mut flags = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let flag = match column.get(idx)? {
                AnyValue::Boolean(b) => b,
                AnyValue::Null => false,
                other => {
                    let text = any_to_string(other);
                    coerce_flag(name, idx + 1, Some(text.as_str()))?
                }
            };
            flags.push(flag);
        }
        out.with_column(Series::new((*name).into(), flags).into_column())?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use polars::prelude::DataType;
    use regatta_common::{column_flags, string_column};
    use regatta_model::ErrorKind;

    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn coerces_named_columns_only() {
        let df = DataFrame::new(vec![
            string_column("cox", vec![s("Y"), s("N"), None]),
            string_column("cox name", vec![s("Y"), None, None]),
        ])
        .unwrap();
        let out = coerce_boolean_columns(&df, &["cox"]).unwrap();
        assert_eq!(out.column("cox").unwrap().dtype(), &DataType::Boolean);
        assert_eq!(out.column("cox name").unwrap().dtype(), &DataType::String);
        assert_eq!(column_flags(&out, "cox").unwrap(), vec![true, false, false]);
    }

    #[test]
    fn coercion_is_idempotent() {
        let df = DataFrame::new(vec![string_column("verified", vec![s("Y"), None])]).unwrap();
        let once = coerce_boolean_columns(&df, &["verified"]).unwrap();
        let twice = coerce_boolean_columns(&once, &["verified"]).unwrap();
        assert_eq!(column_flags(&twice, "verified").unwrap(), vec![true, false]);
    }

    #[test]
    fn out_of_domain_literal_is_value_error() {
        let df = DataFrame::new(vec![string_column("captain", vec![s("N"), s("maybe")])]).unwrap();
        let err = coerce_boolean_columns(&df, &["captain"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Value);
        assert_eq!(
            err.to_string(),
            "column 'captain' row 2: expected Y, N or blank, found 'maybe'"
        );
    }

    #[test]
    fn padded_literals_are_not_flags() {
        assert!(!coerce_flag("cox", 1, Some("  ")).unwrap());
        for padded in [" Y ", "N ", " Y"] {
            let err = coerce_flag("cox", 3, Some(padded)).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidFlag { row: 3, ref value, .. } if value == padded),
                "{padded:?} accepted"
            );
        }
        let df = DataFrame::new(vec![string_column("verified", vec![s("Y"), s(" Y ")])]).unwrap();
        assert!(coerce_boolean_columns(&df, &["verified"]).is_err());
    }
}
