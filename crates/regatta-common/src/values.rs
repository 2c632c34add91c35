//! Cell and column access over polars frames.
//!
//! Every export column arrives as nullable text, so most of the pipeline
//! reads cells as trimmed strings and only types them where a number or a
//! flag is needed.

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};

/// Text written for a boolean cell.
fn flag_text(flag: bool) -> &'static str {
    if flag { "Y" } else { "N" }
}

/// Render a cell as text.
///
/// Nulls are empty, floats lose a trailing `.0` and booleans use the
/// exports' `Y`/`N` convention.
///
/// ```
/// use polars::prelude::AnyValue;
/// use regatta_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Float64(102.0)), "102");
/// assert_eq!(any_to_string(AnyValue::Boolean(true)), "Y");
/// assert_eq!(any_to_string(AnyValue::String("Tyne ARC")), "Tyne ARC");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Boolean(flag) => flag_text(flag).to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Shortest text for a float: `4.0` is `4`, `-0.0` is `0`.
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 { "0".to_string() } else { v.to_string() }
}

fn integral(v: f64) -> Option<i64> {
    (v.is_finite() && v.fract() == 0.0).then_some(v as i64)
}

fn parse_integral(text: &str) -> Option<i64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().and_then(integral))
}

/// Read a cell as a whole number.
///
/// Text is parsed, so `"8"` and `"8.0"` both give 8. Fractional values,
/// booleans and anything unparseable give `None`.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Float32(v) => integral(f64::from(v)),
        AnyValue::Float64(v) => integral(v),
        AnyValue::String(s) => parse_integral(s),
        AnyValue::StringOwned(s) => parse_integral(&s),
        other if other.dtype().is_integer() => other.extract::<i64>(),
        _ => None,
    }
}

/// Text of one cell; a missing column or row reads as empty.
pub fn column_value_string(df: &DataFrame, name: &str, idx: usize) -> String {
    df.column(name)
        .ok()
        .and_then(|column| column.get(idx).ok())
        .map(any_to_string)
        .unwrap_or_default()
}

/// Read a whole column as trimmed, nullable strings.
///
/// Blank cells become `None`.
pub fn column_strings(df: &DataFrame, name: &str) -> PolarsResult<Vec<Option<String>>> {
    let column = df.column(name)?;
    (0..df.height())
        .map(|idx| {
            let text = any_to_string(column.get(idx)?);
            let text = text.trim();
            Ok((!text.is_empty()).then(|| text.to_string()))
        })
        .collect()
}

/// Read a whole column as flags.
///
/// Boolean columns are read directly (null is false); any other dtype is
/// read as text and only `Y` counts as set.
pub fn column_flags(df: &DataFrame, name: &str) -> PolarsResult<Vec<bool>> {
    let column = df.column(name)?;
    (0..df.height())
        .map(|idx| {
            Ok(match column.get(idx)? {
                AnyValue::Boolean(flag) => flag,
                other => any_to_string(other).trim() == flag_text(true),
            })
        })
        .collect()
}

pub fn string_column(name: &str, values: Vec<Option<String>>) -> Column {
    Series::new(name.into(), values).into_column()
}
