//! Composite crew resolution.
//!
//! Exports mark a composite crew inline in the club name, e.g.
//! `"Tyne ARC (composite)"`. Entries keep the entering club. Members in a
//! composite crew are attributed to their own primary club, with the entering
//! club kept alongside for the reports that need it.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use regatta_common::{column_strings, string_column};
use regatta_model::columns::{
    CLUB, COMPOSITE, COMPOSITE_MARKER, CREW_ID, ENTERING_CLUB, PRIMARY_CLUB,
};
use regatta_model::{PipelineError, Result};

/// Strip the composite marker from a club name.
///
/// Returns the display club and whether the marker was present.
///
/// # Examples
///
/// ```
/// use regatta_transform::composite::split_composite;
///
/// assert_eq!(split_composite("Tyne ARC (composite)"), ("Tyne ARC".to_string(), true));
/// assert_eq!(split_composite("Tyne ARC"), ("Tyne ARC".to_string(), false));
/// ```
pub fn split_composite(club: &str) -> (String, bool) {
    if club.contains(COMPOSITE_MARKER) {
        let stripped = club.replace(COMPOSITE_MARKER, "");
        (stripped.split_whitespace().collect::<Vec<_>>().join(" "), true)
    } else {
        (club.to_string(), false)
    }
}

fn split_club_column(df: &DataFrame) -> Result<(Vec<Option<String>>, Vec<bool>)> {
    let mut clubs = Vec::with_capacity(df.height());
    let mut flags = Vec::with_capacity(df.height());
    for club in column_strings(df, CLUB)? {
        match club {
            Some(club) => {
                let (display, composite) = split_composite(&club);
                clubs.push(Some(display));
                flags.push(composite);
            }
            None => {
                clubs.push(None);
                flags.push(false);
            }
        }
    }
    Ok((clubs, flags))
}

/// Flag composite entries and strip the marker from their club.
pub fn resolve_entry_composites(entries: &DataFrame) -> Result<DataFrame> {
    let (clubs, flags) = split_club_column(entries)?;
    let mut out = entries.clone();
    out.with_column(string_column(CLUB, clubs))?;
    out.with_column(Series::new(COMPOSITE.into(), flags).into_column())?;
    Ok(out)
}

/// Flag composite members, keep the entering club and reassign `club` to the
/// member's primary club.
///
/// # Errors
///
/// Returns [`PipelineError::MissingPrimaryClub`] when a composite member has
/// no primary club to attribute them to.
pub fn resolve_member_composites(members: &DataFrame) -> Result<DataFrame> {
    let (entering, flags) = split_club_column(members)?;
    let primary = column_strings(members, PRIMARY_CLUB)?;
    let crew_ids = column_strings(members, CREW_ID)?;

    let mut clubs = Vec::with_capacity(members.height());
    for (idx, composite) in flags.iter().enumerate() {
        if !composite {
            clubs.push(entering[idx].clone());
            continue;
        }
        let Some(primary) = primary[idx].clone() else {
            return Err(PipelineError::MissingPrimaryClub {
                row: idx + 1,
                crew_id: crew_ids[idx].clone().unwrap_or_default(),
            });
        };
        clubs.push(Some(primary));
    }

    let mut out = members.clone();
    out.with_column(string_column(CLUB, clubs))?;
    out.with_column(string_column(ENTERING_CLUB, entering))?;
    out.with_column(Series::new(COMPOSITE.into(), flags).into_column())?;
    Ok(out)
}
