//! Per-person views: the cross-crew rower list and the CoFD sheet.

use std::collections::HashMap;

use polars::prelude::DataFrame;
use regatta_common::{column_strings, string_column};
use regatta_model::Result;
use regatta_model::columns::{
    BOAT_TYPE, CLUB, CREW_ID, CREW_LETTER, CREW_NAME, ENTERING_CLUB, MEMBERSHIP_NUMBER, NAME,
    POSITION,
};

use crate::sort::cmp_nulls_last;

pub const FIRST_NAME: &str = "first name";
pub const SURNAME: &str = "surname";

/// Sort order of the rower list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowerSort {
    #[default]
    Name,
    Club,
    MembershipNumber,
}

/// Identity of one person across crews: membership number when known,
/// otherwise the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum RowerId {
    Number(String),
    Name(Option<String>),
}

#[derive(Debug)]
struct Rower {
    number: Option<String>,
    name: Option<String>,
    club: Option<String>,
    crews: Vec<String>,
}

/// Header of the `n`th crew column, 1-based.
pub fn crew_header(n: usize) -> String {
    format!("crew {n}")
}

/// One row per person listing every crew they appear in.
///
/// Crew columns are numbered by the order a person's rows occur in Members.
/// The club shown is the club of their first row.
pub fn rowers_report(
    members: &DataFrame,
    club: Option<&str>,
    sort: RowerSort,
) -> Result<DataFrame> {
    let numbers = column_strings(members, MEMBERSHIP_NUMBER)?;
    let names = column_strings(members, NAME)?;
    let clubs = column_strings(members, CLUB)?;
    let crews = column_strings(members, CREW_NAME)?;

    let mut index: HashMap<RowerId, usize> = HashMap::new();
    let mut rowers: Vec<Rower> = Vec::new();
    for idx in 0..members.height() {
        let id = match &numbers[idx] {
            Some(number) => RowerId::Number(number.clone()),
            None => RowerId::Name(names[idx].clone()),
        };
        let slot = *index.entry(id).or_insert_with(|| {
            rowers.push(Rower {
                number: numbers[idx].clone(),
                name: names[idx].clone(),
                club: clubs[idx].clone(),
                crews: Vec::new(),
            });
            rowers.len() - 1
        });
        if let Some(crew) = &crews[idx] {
            rowers[slot].crews.push(crew.clone());
        }
    }

    if let Some(club) = club {
        rowers.retain(|rower| rower.club.as_deref() == Some(club));
    }
    match sort {
        RowerSort::Name => rowers.sort_by(|a, b| cmp_nulls_last(&a.name, &b.name)),
        RowerSort::Club => rowers.sort_by(|a, b| cmp_nulls_last(&a.club, &b.club)),
        RowerSort::MembershipNumber => {
            rowers.sort_by(|a, b| cmp_nulls_last(&a.number, &b.number));
        }
    }

    let width = rowers.iter().map(|r| r.crews.len()).max().unwrap_or(0);
    let mut columns = vec![
        string_column(MEMBERSHIP_NUMBER, rowers.iter().map(|r| r.number.clone()).collect()),
        string_column(NAME, rowers.iter().map(|r| r.name.clone()).collect()),
        string_column(CLUB, rowers.iter().map(|r| r.club.clone()).collect()),
    ];
    for n in 0..width {
        let cells = rowers.iter().map(|r| r.crews.get(n).cloned()).collect();
        columns.push(string_column(&crew_header(n + 1), cells));
    }
    Ok(DataFrame::new(columns)?)
}

/// Split a full name at its first space.
///
/// # Examples
///
/// ```
/// use regatta_report::rowers::split_name;
///
/// assert_eq!(split_name("Ann de Vere"), ("Ann".to_string(), Some("de Vere".to_string())));
/// assert_eq!(split_name("Cher"), ("Cher".to_string(), None));
/// ```
pub fn split_name(name: &str) -> (String, Option<String>) {
    match name.split_once(' ') {
        Some((first, rest)) => (first.to_string(), Some(rest.trim().to_string())),
        None => (name.to_string(), None),
    }
}

/// One row per member for the CoFD sheet, sorted by entering club.
///
/// Coxes carry no crew letter of their own; theirs falls back to the last
/// character of the crew name.
pub fn cofd_report(members: &DataFrame) -> Result<DataFrame> {
    let boats = column_strings(members, BOAT_TYPE)?;
    let entering = column_strings(members, ENTERING_CLUB)?;
    let clubs = column_strings(members, CLUB)?;
    let names = column_strings(members, NAME)?;
    let numbers = column_strings(members, MEMBERSHIP_NUMBER)?;
    let positions = column_strings(members, POSITION)?;
    let ids = column_strings(members, CREW_ID)?;
    let letters = column_strings(members, CREW_LETTER)?;
    let crews = column_strings(members, CREW_NAME)?;

    let mut order: Vec<usize> = (0..members.height()).collect();
    order.sort_by(|a, b| cmp_nulls_last(&entering[*a], &entering[*b]));

    let pick = |values: &[Option<String>]| -> Vec<Option<String>> {
        order.iter().map(|idx| values[*idx].clone()).collect()
    };
    let split: Vec<(Option<String>, Option<String>)> = order
        .iter()
        .map(|idx| match names[*idx].as_deref() {
            Some(name) => {
                let (first, surname) = split_name(name);
                (Some(first), surname)
            }
            None => (None, None),
        })
        .collect();
    let crew_letters = order
        .iter()
        .map(|idx| {
            letters[*idx].clone().or_else(|| {
                crews[*idx]
                    .as_deref()
                    .and_then(|crew| crew.chars().last())
                    .map(String::from)
            })
        })
        .collect();

    Ok(DataFrame::new(vec![
        string_column(BOAT_TYPE, pick(&boats)),
        string_column(ENTERING_CLUB, pick(&entering)),
        string_column(CLUB, pick(&clubs)),
        string_column(FIRST_NAME, split.iter().map(|s| s.0.clone()).collect()),
        string_column(SURNAME, split.into_iter().map(|s| s.1).collect()),
        string_column(MEMBERSHIP_NUMBER, pick(&numbers)),
        string_column(POSITION, pick(&positions)),
        string_column(CREW_ID, pick(&ids)),
        string_column(CREW_LETTER, crew_letters),
    ])?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn members() -> DataFrame {
        DataFrame::new(vec![
            string_column(MEMBERSHIP_NUMBER, vec![s("1"), s("2"), s("1"), None, None]),
            string_column(
                NAME,
                vec![s("Ann Lee"), s("Bea Ray"), s("Ann Lee"), s("Cox One"), s("Cox One")],
            ),
            string_column(CLUB, vec![s("Tyne"), s("Durham"), s("Tyne"), s("Tyne"), s("Tyne")]),
            string_column(
                CREW_NAME,
                vec![s("Tyne A"), s("Durham A"), s("Tyne B"), s("Tyne A"), s("Tyne B")],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn people_are_keyed_by_number_then_name() {
        let report = rowers_report(&members(), None, RowerSort::Name).unwrap();
        assert_eq!(report.height(), 3);
        assert_eq!(
            column_strings(&report, NAME).unwrap(),
            vec![s("Ann Lee"), s("Bea Ray"), s("Cox One")]
        );
        assert_eq!(
            column_strings(&report, "crew 2").unwrap(),
            vec![s("Tyne B"), None, s("Tyne B")]
        );
    }

    #[test]
    fn club_filter_and_number_sort() {
        let report = rowers_report(&members(), Some("Tyne"), RowerSort::MembershipNumber).unwrap();
        assert_eq!(
            column_strings(&report, MEMBERSHIP_NUMBER).unwrap(),
            vec![s("1"), None]
        );
    }
}
