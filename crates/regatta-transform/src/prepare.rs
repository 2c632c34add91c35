//! Report preparation.
//!
//! Turns each raw export into its canonical table: normalized columns, typed
//! flags, resolved composites and, for members, seat positions.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use regatta_common::{any_to_i64, any_to_string, column_strings, string_column};
use regatta_model::columns::{
    BOAT_TYPE, CREW_ID, ENTRY_COLUMNS, ENTRY_FLAG_COLUMNS, MEMBER_COLUMNS, MEMBER_FLAG_COLUMNS,
    ROSTER_COLUMNS, SEATS, TEAM_ID_PREFIX,
};
use regatta_model::{BoatClass, PipelineError, ReportKind, ReportMapping, Result};
use tracing::{debug, info};

use crate::booleans::coerce_boolean_columns;
use crate::composite::{resolve_entry_composites, resolve_member_composites};
use crate::frame::{dedupe_first, with_replaced};
use crate::normalize::{normalize_columns, select_canonical};
use crate::position::with_positions;

/// Strip the teams-report prefix so entry ids match member crew ids.
fn strip_team_prefix(entries: &DataFrame) -> Result<DataFrame> {
    let ids: Vec<Option<String>> = column_strings(entries, CREW_ID)?
        .into_iter()
        .map(|id| id.map(|id| id.strip_prefix(TEAM_ID_PREFIX).unwrap_or(&id).to_string()))
        .collect();
    with_replaced(entries, string_column(CREW_ID, ids))
}

/// Type the declared seat count as Int64. Blank counts as zero.
fn parse_seats(entries: &DataFrame) -> Result<DataFrame> {
    let column = entries.column(SEATS)?;
    let mut seats = Vec::with_capacity(entries.height());
    for idx in 0..entries.height() {
        let value = column.get(idx)?;
        let text = any_to_string(value.clone());
        if text.trim().is_empty() {
            seats.push(0i64);
            continue;
        }
        let Some(parsed) = any_to_i64(value) else {
            return Err(PipelineError::SeatCount {
                value: text,
                row: idx + 1,
            });
        };
        seats.push(parsed);
    }
    with_replaced(entries, Series::new(SEATS.into(), seats).into_column())
}

/// Fail the run on the first boat-type code without a seat count.
fn check_boat_types(entries: &DataFrame) -> Result<()> {
    for (idx, code) in column_strings(entries, BOAT_TYPE)?.into_iter().enumerate() {
        BoatClass::from_code(code.as_deref().unwrap_or_default(), idx + 1)?;
    }
    Ok(())
}

/// Build the canonical Entries table from a raw teams export.
///
/// Entries are de-duplicated on crew id, keeping the first row: the teams
/// export repeats a crew when it has both a cox and a captain assigned.
///
/// # Errors
///
/// Schema errors from normalization, value errors from flag coercion, and
/// parse errors for seat counts and boat-type codes.
pub fn prepare_entries(raw: &DataFrame, mapping: &ReportMapping) -> Result<DataFrame> {
    let df = normalize_columns(raw, mapping, ReportKind::Teams)?;
    let df = select_canonical(&df, ENTRY_COLUMNS, ReportKind::Teams)?;
    let df = coerce_boolean_columns(&df, ENTRY_FLAG_COLUMNS)?;
    let df = strip_team_prefix(&df)?;
    let df = parse_seats(&df)?;
    check_boat_types(&df)?;
    let df = resolve_entry_composites(&df)?;
    let (entries, dropped) = dedupe_first(&df, &[CREW_ID])?;
    if dropped > 0 {
        debug!(dropped, "dropped duplicate entry rows");
    }
    info!(rows = entries.height(), "prepared entries");
    Ok(entries)
}

/// Build the canonical Members table from a raw team members export.
///
/// # Errors
///
/// Schema and value errors from normalization, flag coercion and composite
/// resolution.
pub fn prepare_members(raw: &DataFrame, mapping: &ReportMapping) -> Result<DataFrame> {
    let df = normalize_columns(raw, mapping, ReportKind::TeamMembers)?;
    let df = select_canonical(&df, MEMBER_COLUMNS, ReportKind::TeamMembers)?;
    let df = coerce_boolean_columns(&df, MEMBER_FLAG_COLUMNS)?;
    let df = resolve_member_composites(&df)?;
    let members = with_positions(&df)?;
    info!(rows = members.height(), "prepared members");
    Ok(members)
}

/// Build the roster lookup table from a raw community members export.
///
/// # Errors
///
/// Schema and value errors from normalization and flag coercion.
pub fn prepare_roster(raw: &DataFrame, mapping: &ReportMapping) -> Result<DataFrame> {
    let df = normalize_columns(raw, mapping, ReportKind::CommunityMembers)?;
    let df = select_canonical(&df, ROSTER_COLUMNS, ReportKind::CommunityMembers)?;
    let roster = coerce_boolean_columns(&df, MEMBER_FLAG_COLUMNS)?;
    info!(rows = roster.height(), "prepared roster");
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use polars::prelude::DataType;
    use regatta_model::ErrorKind;

    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn team_prefix_is_stripped() {
        let df = DataFrame::new(vec![string_column(CREW_ID, vec![s("teams/12"), s("13")])]).unwrap();
        let out = strip_team_prefix(&df).unwrap();
        assert_eq!(column_strings(&out, CREW_ID).unwrap(), vec![s("12"), s("13")]);
    }

    #[test]
    fn seats_are_typed() {
        let df = DataFrame::new(vec![string_column(SEATS, vec![s("4"), None, s("8.0")])]).unwrap();
        let out = parse_seats(&df).unwrap();
        let seats = out.column(SEATS).unwrap();
        assert_eq!(seats.dtype(), &DataType::Int64);
        let values: Vec<Option<i64>> = seats.i64().unwrap().into_iter().collect();
        assert_eq!(values, vec![Some(4), Some(0), Some(8)]);
    }

    #[test]
    fn bad_seat_count_is_parse_error() {
        let df = DataFrame::new(vec![string_column(SEATS, vec![s("four")])]).unwrap();
        let err = parse_seats(&df).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Parse);
    }

    #[test]
    fn bad_boat_type_is_parse_error() {
        let df = DataFrame::new(vec![string_column(BOAT_TYPE, vec![s("4x+"), s("Quad")])]).unwrap();
        let err = check_boat_types(&df).unwrap_err();
        assert!(matches!(err, PipelineError::BoatType { row: 2, .. }));
    }
}
