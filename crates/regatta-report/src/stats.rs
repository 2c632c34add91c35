//! Headline counts over the canonical tables.

use std::collections::HashSet;

use polars::prelude::DataFrame;
use regatta_common::{any_to_i64, column_strings};
use regatta_model::columns::{BOAT_TYPE, CREW_ID, MEMBER_ID, SEATS};
use regatta_model::{BoatClass, EntryStats, Result, SeatCounts};

fn distinct_non_null(df: &DataFrame, name: &str) -> Result<usize> {
    let values: HashSet<String> = column_strings(df, name)?.into_iter().flatten().collect();
    Ok(values.len())
}

/// Number of distinct crews entered.
pub fn entry_count(entries: &DataFrame) -> Result<usize> {
    distinct_non_null(entries, CREW_ID)
}

/// Declared and boat-implied seat totals, coxes excluded.
///
/// # Errors
///
/// Returns [`regatta_model::PipelineError::BoatType`] for a code without a
/// seat count.
pub fn seat_counts(entries: &DataFrame) -> Result<SeatCounts> {
    let declared = entries.column(SEATS)?;
    let mut counts = SeatCounts::default();
    for idx in 0..entries.height() {
        counts.filled += any_to_i64(declared.get(idx)?).unwrap_or(0);
    }
    for (idx, code) in column_strings(entries, BOAT_TYPE)?.into_iter().enumerate() {
        let boat = BoatClass::from_code(code.as_deref().unwrap_or_default(), idx + 1)?;
        counts.total += i64::from(boat.seats);
    }
    Ok(counts)
}

/// Number of distinct people (rowers and coxes) with a member id.
pub fn unique_rower_count(members: &DataFrame) -> Result<usize> {
    distinct_non_null(members, MEMBER_ID)
}

pub fn entry_stats(entries: &DataFrame, members: &DataFrame) -> Result<EntryStats> {
    Ok(EntryStats {
        entries: entry_count(entries)?,
        seats: seat_counts(entries)?,
        unique_rowers: unique_rower_count(members)?,
    })
}
