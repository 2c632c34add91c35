//! Entries per event.

use polars::prelude::{DataFrame, IntoLazy, SortMultipleOptions, col};
use regatta_model::Result;
use regatta_model::columns::{BOAT_TYPE, CREW_ID};

/// Header of the per-event count column.
pub const ENTRIES_HEADER: &str = "Entries";

/// Count entries per boat type, sorted by boat type.
pub fn events_report(entries: &DataFrame) -> Result<DataFrame> {
    let report = entries
        .clone()
        .lazy()
        .group_by([col(BOAT_TYPE)])
        .agg([col(CREW_ID).count().alias(ENTRIES_HEADER)])
        .sort([BOAT_TYPE], SortMultipleOptions::default())
        .collect()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use regatta_common::{any_to_i64, column_strings, string_column};

    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn counts_per_boat_type() {
        let entries = DataFrame::new(vec![
            string_column(CREW_ID, vec![s("1"), s("2"), s("3")]),
            string_column(BOAT_TYPE, vec![s("Open 8+"), s("J16 4x+"), s("Open 8+")]),
        ])
        .unwrap();
        let report = events_report(&entries).unwrap();
        assert_eq!(
            column_strings(&report, BOAT_TYPE).unwrap(),
            vec![s("J16 4x+"), s("Open 8+")]
        );
        let counts = report.column(ENTRIES_HEADER).unwrap();
        let counts: Vec<Option<i64>> = (0..report.height())
            .map(|idx| any_to_i64(counts.get(idx).unwrap()))
            .collect();
        assert_eq!(counts, vec![Some(1), Some(2)]);
    }
}
