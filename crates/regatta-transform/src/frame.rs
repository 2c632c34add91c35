//! Frame-level helpers shared by the preparation stages.

use std::collections::HashSet;

use polars::prelude::{BooleanChunked, Column, DataFrame, NewChunkedArray};
use regatta_common::column_strings;
use regatta_model::Result;

/// Return a copy of `df` with `column` added, or replacing the column of the
/// same name.
pub fn with_replaced(df: &DataFrame, column: Column) -> Result<DataFrame> {
    let mut out = df.clone();
    out.with_column(column)?;
    Ok(out)
}

/// Keep the first row for each distinct combination of `keys`.
///
/// Blank cells compare equal to each other. Returns the de-duplicated frame
/// and the number of rows dropped.
pub fn dedupe_first(df: &DataFrame, keys: &[&str]) -> Result<(DataFrame, usize)> {
    let key_values = keys
        .iter()
        .map(|name| column_strings(df, name))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    let mut seen: HashSet<Vec<Option<String>>> = HashSet::with_capacity(df.height());
    let mut keep = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let key: Vec<Option<String>> = key_values.iter().map(|col| col[idx].clone()).collect();
        keep.push(seen.insert(key));
    }
    let dropped = keep.iter().filter(|kept| !**kept).count();
    if dropped == 0 {
        return Ok((df.clone(), 0));
    }
    let mask = BooleanChunked::from_slice("dedupe".into(), &keep);
    Ok((df.filter(&mask)?, dropped))
}
