//! Entries view with derived crew-completeness columns.

use polars::prelude::{
    BooleanChunked, DataFrame, IntoColumn, NamedFrom, NewChunkedArray, Series,
    SortMultipleOptions,
};
use regatta_common::{any_to_i64, column_flags, column_strings};
use regatta_model::columns::{
    BOAT_TYPE, CAPTAIN, CAPTAIN_NAME, CLUB, COMPOSITE, COX, COX_NAME, CREW_ID, CREW_LETTER,
    CREW_NAME, SEATS, VERIFIED,
};
use regatta_model::{BoatClass, Result};

pub const TOTAL_SEATS: &str = "total seats";
pub const COXED: &str = "coxed";
pub const MISSING_ROWERS: &str = "missing rowers";
pub const MISSING_COX: &str = "missing cox";

/// Output column order.
const ENTRIES_VIEW_COLUMNS: &[&str] = &[
    CREW_ID,
    BOAT_TYPE,
    CLUB,
    CREW_LETTER,
    CREW_NAME,
    COMPOSITE,
    VERIFIED,
    TOTAL_SEATS,
    SEATS,
    MISSING_ROWERS,
    COXED,
    COX,
    COX_NAME,
    MISSING_COX,
    CAPTAIN,
    CAPTAIN_NAME,
];

/// Row selection for the entries view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntriesFilter {
    #[default]
    All,
    /// Crews not yet verified.
    Unverified,
    /// Crews whose cox flag disagrees with their boat type.
    MissingCox,
}

/// Entries with seat and cox checks, sorted by boat type, club and crew
/// letter.
///
/// `missing rowers` is the boat's seat count minus the declared seats;
/// `missing cox` is set when a coxed boat has no cox or a coxless boat
/// declares one.
pub fn entries_report(entries: &DataFrame, filter: EntriesFilter) -> Result<DataFrame> {
    let declared = entries.column(SEATS)?;
    let cox = column_flags(entries, COX)?;
    let mut total = Vec::with_capacity(entries.height());
    let mut coxed = Vec::with_capacity(entries.height());
    let mut missing_rowers = Vec::with_capacity(entries.height());
    let mut missing_cox = Vec::with_capacity(entries.height());
    for (idx, code) in column_strings(entries, BOAT_TYPE)?.into_iter().enumerate() {
        let boat = BoatClass::from_code(code.as_deref().unwrap_or_default(), idx + 1)?;
        let seats = i64::from(boat.seats);
        total.push(seats);
        coxed.push(boat.coxed);
        missing_rowers.push(seats - any_to_i64(declared.get(idx)?).unwrap_or(0));
        missing_cox.push(cox[idx] != boat.coxed);
    }

    let mut report = entries.clone();
    report.with_column(Series::new(TOTAL_SEATS.into(), total).into_column())?;
    report.with_column(Series::new(COXED.into(), coxed).into_column())?;
    report.with_column(Series::new(MISSING_ROWERS.into(), missing_rowers).into_column())?;
    report.with_column(Series::new(MISSING_COX.into(), missing_cox.clone()).into_column())?;

    let keep: Option<Vec<bool>> = match filter {
        EntriesFilter::All => None,
        EntriesFilter::Unverified => Some(
            column_flags(entries, VERIFIED)?
                .into_iter()
                .map(|verified| !verified)
                .collect(),
        ),
        EntriesFilter::MissingCox => Some(missing_cox),
    };
    if let Some(keep) = keep {
        report = report.filter(&BooleanChunked::from_slice("keep".into(), &keep))?;
    }

    let report = report.sort(
        [BOAT_TYPE, CLUB, CREW_LETTER],
        SortMultipleOptions::default().with_maintain_order(true),
    )?;
    Ok(report.select(ENTRIES_VIEW_COLUMNS.iter().copied())?)
}
