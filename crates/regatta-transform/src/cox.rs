//! Coxswain reconciliation.
//!
//! The teams export names a crew's cox but the team members export does not
//! list them. Each cox becomes a member record with position `C`, and their
//! person details are recovered from a roster by exact name match.
//!
//! Name matching cannot tell apart two people with the same name. The first
//! roster row with a matching name wins, and such matches are counted as
//! ambiguous so the caller can surface the caveat.

use std::collections::HashMap;

use polars::prelude::{
    BooleanChunked, Column, DataFrame, IdxCa, IdxSize, IntoColumn, NamedFrom, NewChunkedArray,
    Series,
};
use regatta_common::{any_to_string, column_flags, column_strings};
use regatta_model::columns::{
    CLUB, COMPOSITE, COX, COX_CREW_COLUMNS, COX_LOOKUP_COLUMNS, COX_NAME, COX_POSITION, CREW_ID,
    ENTERING_CLUB, MEMBERSHIP_NUMBER, NAME, POSITION, PRIMARY_CLUB,
};
use regatta_model::{CoxReconciliation, Result};
use tracing::{debug, info, warn};

use crate::frame::dedupe_first;
use crate::membership::normalize_membership_column;

/// Name lookup over a roster table.
#[derive(Debug, Default)]
pub struct RosterIndex {
    first: HashMap<String, IdxSize>,
    occurrences: HashMap<String, usize>,
}

impl RosterIndex {
    /// Index the roster's `name` column. Blank names are not indexed.
    pub fn build(roster: &DataFrame) -> Result<Self> {
        let mut index = Self::default();
        for (row, name) in column_strings(roster, NAME)?.into_iter().enumerate() {
            let Some(name) = name else {
                continue;
            };
            *index.occurrences.entry(name.clone()).or_insert(0) += 1;
            index.first.entry(name).or_insert(row as IdxSize);
        }
        Ok(index)
    }

    /// Row of the first roster entry with exactly this name.
    pub fn lookup(&self, name: &str) -> Option<IdxSize> {
        self.first.get(name).copied()
    }

    /// Whether more than one roster row carries this name.
    pub fn is_ambiguous(&self, name: &str) -> bool {
        self.occurrences.get(name).is_some_and(|count| *count > 1)
    }
}

/// De-duplicated rowers from the Members table.
///
/// Keeps the first occurrence of each (name, membership number) pair.
pub fn unique_rowers(members: &DataFrame) -> Result<DataFrame> {
    let (rowers, dropped) = dedupe_first(members, &[NAME, MEMBERSHIP_NUMBER])?;
    debug!(rows = rowers.height(), dropped, "derived roster from members");
    Ok(rowers)
}

/// Project the coxed entries into cox rows.
///
/// Columns: `name`, the crew fields, the entry's `composite` flag and
/// `position` set to `C`.
pub fn extract_coxes(entries: &DataFrame) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("cox".into(), &column_flags(entries, COX)?);
    let coxed = entries.filter(&mask)?;

    let mut name = coxed.column(COX_NAME)?.clone();
    name.rename(NAME.into());
    let mut columns = vec![name];
    for field in COX_CREW_COLUMNS {
        columns.push(coxed.column(field)?.clone());
    }
    columns.push(coxed.column(COMPOSITE)?.clone());
    columns.push(Series::new(POSITION.into(), vec![COX_POSITION; coxed.height()]).into_column());
    Ok(DataFrame::new(columns)?)
}

/// Gather one roster column at the matched rows; misses read as null.
fn gather(roster: &DataFrame, name: &str, rows: &IdxCa) -> Result<Option<Series>> {
    let Ok(column) = roster.column(name) else {
        return Ok(None);
    };
    Ok(Some(column.as_materialized_series().take(rows)?))
}

/// Club each cox counts for.
///
/// A composite crew's cox takes the primary club of their roster match. An
/// unmatched cox, or a match with no primary club, stays with the entering
/// club.
fn cox_clubs(coxes: &DataFrame, roster: &DataFrame, rows: &IdxCa) -> Result<Vec<Option<String>>> {
    let entering = column_strings(coxes, CLUB)?;
    let composite = column_flags(coxes, COMPOSITE)?;
    let primary = match gather(roster, PRIMARY_CLUB, rows)? {
        Some(series) => (0..series.len())
            .map(|idx| {
                let text = any_to_string(series.get(idx)?);
                let text = text.trim();
                Ok((!text.is_empty()).then(|| text.to_string()))
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![None; coxes.height()],
    };
    Ok(entering
        .into_iter()
        .zip(composite)
        .zip(primary)
        .map(|((club, composite), primary)| if composite { primary.or(club) } else { club })
        .collect())
}

/// Build cox member rows aligned with the Members table's columns and dtypes.
fn cox_member_rows(
    members: &DataFrame,
    coxes: &DataFrame,
    roster: &DataFrame,
    rows: &IdxCa,
) -> Result<DataFrame> {
    let height = coxes.height();
    let mut columns: Vec<Column> = Vec::with_capacity(members.width());
    for target in members.get_columns() {
        let name = target.name().as_str();
        let source = if name == ENTERING_CLUB {
            Some(coxes.column(CLUB)?.as_materialized_series().clone())
        } else if name == CLUB {
            Some(Series::new(CLUB.into(), cox_clubs(coxes, roster, rows)?))
        } else if name == NAME
            || name == POSITION
            || name == COMPOSITE
            || COX_CREW_COLUMNS.contains(&name)
        {
            Some(coxes.column(name)?.as_materialized_series().clone())
        } else if COX_LOOKUP_COLUMNS.contains(&name) {
            gather(roster, name, rows)?
        } else {
            None
        };
        let series = match source {
            Some(series) => {
                let mut series = series.cast(target.dtype())?;
                series.rename(name.into());
                series
            }
            None => Series::full_null(name.into(), height, target.dtype()),
        };
        columns.push(series.into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Synthesize cox member records and append them to the Members table.
///
/// `roster` is the community roster when one was supplied; otherwise the
/// de-duplicated rowers of `members` are used. The returned table keeps every
/// member row first, followed by one row per coxed entry, and carries
/// normalized membership numbers throughout.
///
/// # Errors
///
/// Fails only if the tables lack their canonical columns.
pub fn reconcile_coxes(
    entries: &DataFrame,
    members: &DataFrame,
    roster: Option<&DataFrame>,
) -> Result<(DataFrame, CoxReconciliation)> {
    let coxes = extract_coxes(entries)?;
    let roster = match roster {
        Some(roster) => roster.clone(),
        None => unique_rowers(members)?,
    };
    let index = RosterIndex::build(&roster)?;

    let mut summary = CoxReconciliation {
        coxes: coxes.height(),
        ..CoxReconciliation::default()
    };
    let names = column_strings(&coxes, NAME)?;
    let crew_ids = column_strings(&coxes, CREW_ID)?;
    let mut matches: Vec<Option<IdxSize>> = Vec::with_capacity(names.len());
    for (idx, name) in names.iter().enumerate() {
        let found = name.as_deref().and_then(|name| index.lookup(name));
        match found {
            Some(_) => {
                summary.matched += 1;
                if name.as_deref().is_some_and(|name| index.is_ambiguous(name)) {
                    summary.ambiguous += 1;
                    debug!(crew_id = ?crew_ids[idx], "cox name matches several roster rows");
                }
            }
            None => {
                summary.unmatched += 1;
                debug!(crew_id = ?crew_ids[idx], "cox not found in roster");
            }
        }
        matches.push(found);
    }
    let rows = IdxCa::from_iter_options("roster_row".into(), matches.into_iter());

    let cox_rows = cox_member_rows(members, &coxes, &roster, &rows)?;
    let combined = members.vstack(&cox_rows)?;
    let combined = normalize_membership_column(&combined)?;

    info!(
        coxes = summary.coxes,
        matched = summary.matched,
        unmatched = summary.unmatched,
        "reconciled coxes"
    );
    if summary.ambiguous > 0 {
        warn!(
            ambiguous = summary.ambiguous,
            "cox names matched more than one roster entry; first match used"
        );
    }
    Ok((combined, summary))
}
