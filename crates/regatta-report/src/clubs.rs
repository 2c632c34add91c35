//! Per-club views.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::{
    DataFrame, IntoColumn, IntoLazy, NamedFrom, Series, SortMultipleOptions, col,
};
use regatta_common::{column_strings, string_column};
use regatta_model::Result;
use regatta_model::columns::{CLUB, CREW_ID, MEMBERSHIP_NUMBER, NAME, SEATS};

use crate::sort::cmp_nulls_last;

pub const ENTRIES: &str = "entries";
pub const ROWERS: &str = "rowers";

/// Distinct rowers per club.
///
/// Members are stably sorted by club before de-duplication on membership
/// number, so a person rowing for several clubs is counted once, under the
/// first club in sort order. Rows without a membership number are not
/// counted.
fn rowers_per_club(members: &DataFrame) -> Result<HashMap<String, i64>> {
    let clubs = column_strings(members, CLUB)?;
    let numbers = column_strings(members, MEMBERSHIP_NUMBER)?;
    let mut rows: Vec<(Option<String>, Option<String>)> = clubs.into_iter().zip(numbers).collect();
    rows.sort_by(|a, b| cmp_nulls_last(&a.0, &b.0));

    let mut seen = HashSet::new();
    let mut counts = HashMap::new();
    for (club, number) in rows {
        let (Some(club), Some(number)) = (club, number) else {
            continue;
        };
        if seen.insert(number) {
            *counts.entry(club).or_insert(0) += 1;
        }
    }
    Ok(counts)
}

/// Entries, rowers and declared seats per entering club.
///
/// Every club in Entries appears, sorted by name; a club with no rowers
/// reports zero.
pub fn clubs_report(entries: &DataFrame, members: &DataFrame) -> Result<DataFrame> {
    let mut report = entries
        .clone()
        .lazy()
        .group_by([col(CLUB)])
        .agg([
            col(CREW_ID).count().alias(ENTRIES),
            col(SEATS).sum().alias(SEATS),
        ])
        .sort([CLUB], SortMultipleOptions::default())
        .collect()?;

    let counts = rowers_per_club(members)?;
    let rowers: Vec<i64> = column_strings(&report, CLUB)?
        .iter()
        .map(|club| {
            club.as_ref()
                .and_then(|club| counts.get(club))
                .copied()
                .unwrap_or(0)
        })
        .collect();
    report.with_column(Series::new(ROWERS.into(), rowers).into_column())?;
    Ok(report.select([CLUB, ENTRIES, ROWERS, SEATS])?)
}

/// Distinct (membership number, name, club) rows sorted by name.
///
/// With a club filter only that club's rowers are kept and the club column
/// is dropped.
pub fn club_rowers_report(members: &DataFrame, club: Option<&str>) -> Result<DataFrame> {
    let numbers = column_strings(members, MEMBERSHIP_NUMBER)?;
    let names = column_strings(members, NAME)?;
    let clubs = column_strings(members, CLUB)?;

    let mut seen = HashSet::new();
    let mut rows = Vec::new();
    for ((number, name), row_club) in numbers.into_iter().zip(names).zip(clubs) {
        if let Some(filter) = club
            && row_club.as_deref() != Some(filter)
        {
            continue;
        }
        let row = (number, name, row_club);
        if seen.insert(row.clone()) {
            rows.push(row);
        }
    }
    rows.sort_by(|a, b| cmp_nulls_last(&a.1, &b.1));

    let mut columns = vec![
        string_column(MEMBERSHIP_NUMBER, rows.iter().map(|r| r.0.clone()).collect()),
        string_column(NAME, rows.iter().map(|r| r.1.clone()).collect()),
    ];
    if club.is_none() {
        columns.push(string_column(CLUB, rows.into_iter().map(|r| r.2).collect()));
    }
    Ok(DataFrame::new(columns)?)
}

/// Sorted distinct clubs from Entries.
pub fn club_list(entries: &DataFrame) -> Result<Vec<String>> {
    let clubs: BTreeSet<String> = column_strings(entries, CLUB)?.into_iter().flatten().collect();
    Ok(clubs.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn rower_counted_under_first_club_in_sort_order() {
        let members = DataFrame::new(vec![
            string_column(CLUB, vec![s("Tyne"), s("Durham"), s("Tyne"), s("Tyne")]),
            string_column(MEMBERSHIP_NUMBER, vec![s("1"), s("1"), s("2"), None]),
        ])
        .unwrap();
        let counts = rowers_per_club(&members).unwrap();
        assert_eq!(counts.get("Durham"), Some(&1));
        assert_eq!(counts.get("Tyne"), Some(&1));
    }

    #[test]
    fn club_rowers_filter_drops_club_column() {
        let members = DataFrame::new(vec![
            string_column(MEMBERSHIP_NUMBER, vec![s("2"), s("1"), s("2"), s("3")]),
            string_column(NAME, vec![s("Bea"), s("Ann"), s("Bea"), s("Cat")]),
            string_column(CLUB, vec![s("Tyne"), s("Tyne"), s("Tyne"), s("Durham")]),
        ])
        .unwrap();
        let all = club_rowers_report(&members, None).unwrap();
        assert_eq!(all.height(), 3);
        assert_eq!(
            column_strings(&all, NAME).unwrap(),
            vec![s("Ann"), s("Bea"), s("Cat")]
        );

        let tyne = club_rowers_report(&members, Some("Tyne")).unwrap();
        assert_eq!(tyne.width(), 2);
        assert_eq!(
            column_strings(&tyne, MEMBERSHIP_NUMBER).unwrap(),
            vec![s("1"), s("2")]
        );
    }

    #[test]
    fn club_list_is_sorted_and_distinct() {
        let entries = DataFrame::new(vec![string_column(
            CLUB,
            vec![s("Tyne"), s("Durham"), None, s("Tyne")],
        )])
        .unwrap();
        assert_eq!(club_list(&entries).unwrap(), vec!["Durham", "Tyne"]);
    }
}
