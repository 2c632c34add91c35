//! Integration tests for the report views.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;
use regatta_common::{any_to_i64, column_strings, string_column};
use regatta_model::columns::{
    BOAT_TYPE, CAPTAIN, CAPTAIN_NAME, CLUB, COMPOSITE, COX, COX_NAME, CREW_ID, CREW_LETTER,
    CREW_NAME, ENTERING_CLUB, MEMBER_ID, MEMBERSHIP_NUMBER, NAME, POSITION, SEATS, VERIFIED,
};
use regatta_report::{
    CrewCell, EntriesFilter, ReportView, ViewOptions, clubs_report, cofd_report, crews_report,
    entries_report, entry_stats, render_view, seat_counts, split_name,
};

fn text(name: &str, values: &[&str]) -> Column {
    let values = values
        .iter()
        .map(|v| if v.is_empty() { None } else { Some((*v).to_string()) })
        .collect();
    string_column(name, values)
}

fn flags(name: &str, values: &[bool]) -> Column {
    Series::new(name.into(), values).into_column()
}

fn entries() -> DataFrame {
    DataFrame::new(vec![
        text(CREW_ID, &["1", "2", "3"]),
        text(BOAT_TYPE, &["Open 4+", "Open 2x", "Open 4+"]),
        text(CLUB, &["A", "B", "A"]),
        text(CREW_NAME, &["A A", "B A", "A B"]),
        text(CREW_LETTER, &["A", "A", "B"]),
        Series::new(SEATS.into(), &[4i64, 8, 2]).into_column(),
        flags(VERIFIED, &[true, false, true]),
        flags(CAPTAIN, &[false, false, false]),
        text(CAPTAIN_NAME, &["", "", ""]),
        flags(COX, &[true, false, false]),
        text(COX_NAME, &["Cox", "", ""]),
        flags(COMPOSITE, &[false, false, false]),
    ])
    .unwrap()
}

fn members() -> DataFrame {
    DataFrame::new(vec![
        text(CREW_ID, &["1", "1", "1", "1", "3", "1"]),
        text(BOAT_TYPE, &["Open 4+", "Open 4+", "Open 4+", "Open 4+", "Open 4+", "Open 4+"]),
        text(CLUB, &["A", "A", "C", "A", "A", "A"]),
        text(ENTERING_CLUB, &["A", "A", "A", "A", "A", "A"]),
        text(CREW_LETTER, &["A", "A", "A", "A", "B", "A"]),
        text(CREW_NAME, &["A A", "A A", "A A", "A A", "A B", "A A"]),
        text(MEMBER_ID, &["m1", "m2", "m3", "m4", "m1", ""]),
        text(NAME, &["R1", "R2", "R3", "R4", "R1", "Cox Swain"]),
        text(MEMBERSHIP_NUMBER, &["11", "12", "13", "14", "11", ""]),
        text(POSITION, &["1", "2", "3", "4", "1", "C"]),
    ])
    .unwrap()
}

fn render(df: &DataFrame) -> String {
    let names: Vec<String> = df.get_column_names().iter().map(|n| n.to_string()).collect();
    let columns: Vec<Vec<Option<String>>> = names
        .iter()
        .map(|name| column_strings(df, name).unwrap())
        .collect();
    let mut lines = vec![names.join(",")];
    for idx in 0..df.height() {
        let row: Vec<String> = columns
            .iter()
            .map(|column| column[idx].clone().unwrap_or_default())
            .collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

fn ints(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    let column = df.column(name).unwrap();
    (0..df.height())
        .map(|idx| any_to_i64(column.get(idx).unwrap()))
        .collect()
}

#[test]
fn clubs_report_aggregates_seats_and_keeps_empty_clubs() {
    let entries = DataFrame::new(vec![
        text(CREW_ID, &["1", "2", "3"]),
        text(CLUB, &["A", "A", "B"]),
        Series::new(SEATS.into(), &[4i64, 2, 8]).into_column(),
    ])
    .unwrap();
    let members = DataFrame::new(vec![
        text(CLUB, &["A", "A", "A"]),
        text(MEMBERSHIP_NUMBER, &["1", "2", "1"]),
    ])
    .unwrap();

    let report = clubs_report(&entries, &members).unwrap();
    assert_eq!(
        column_strings(&report, CLUB).unwrap(),
        vec![Some("A".to_string()), Some("B".to_string())]
    );
    assert_eq!(ints(&report, "entries"), vec![Some(2), Some(1)]);
    assert_eq!(ints(&report, "seats"), vec![Some(6), Some(8)]);
    assert_eq!(ints(&report, "rowers"), vec![Some(2), Some(0)]);
}

#[test]
fn crew_without_members_appears_with_blank_seats() {
    let report = crews_report(&entries(), &members(), CrewCell::Name, None).unwrap();
    insta::assert_snapshot!(render(&report), @r"
    crew id,boat type,club,crew letter,crew name,1,2,3,4,C
    2,Open 2x,B,A,B A,,,,,
    1,Open 4+,A,A,A A,R1,R2,R3,R4,Cox Swain
    3,Open 4+,A,B,A B,R1,,,,
    ");
}

#[test]
fn crew_cells_can_show_membership_numbers() {
    let report =
        crews_report(&entries(), &members(), CrewCell::MembershipNumber, Some("A")).unwrap();
    assert_eq!(report.height(), 2);
    assert_eq!(
        column_strings(&report, "1").unwrap(),
        vec![Some("11".to_string()), Some("11".to_string())]
    );
    assert_eq!(column_strings(&report, "C").unwrap(), vec![None, None]);
}

#[test]
fn entries_report_flags_short_crews_and_cox_mismatches() {
    let all = entries_report(&entries(), EntriesFilter::All).unwrap();
    assert_eq!(
        column_strings(&all, CREW_ID).unwrap(),
        vec![
            Some("2".to_string()),
            Some("1".to_string()),
            Some("3".to_string())
        ]
    );
    assert_eq!(ints(&all, "total seats"), vec![Some(2), Some(4), Some(4)]);
    assert_eq!(ints(&all, "missing rowers"), vec![Some(-6), Some(0), Some(2)]);

    let missing_cox = entries_report(&entries(), EntriesFilter::MissingCox).unwrap();
    assert_eq!(
        column_strings(&missing_cox, CREW_ID).unwrap(),
        vec![Some("3".to_string())]
    );

    let unverified = entries_report(&entries(), EntriesFilter::Unverified).unwrap();
    assert_eq!(
        column_strings(&unverified, CREW_ID).unwrap(),
        vec![Some("2".to_string())]
    );
}

#[test]
fn headline_stats() {
    let stats = entry_stats(&entries(), &members()).unwrap();
    assert_eq!(stats.entries, 3);
    assert_eq!(stats.seats.total, 10);
    assert_eq!(stats.seats.filled, 14);
    assert_eq!(stats.unique_rowers, 4);
}

#[test]
fn cofd_splits_names_and_falls_back_to_crew_name_letter() {
    let mut members = members();
    members
        .with_column(text(CREW_LETTER, &["A", "A", "A", "A", "B", ""]))
        .unwrap();
    let report = cofd_report(&members).unwrap();
    let cox = report.height() - 1;
    assert_eq!(column_strings(&report, "first name").unwrap()[cox], Some("Cox".to_string()));
    assert_eq!(column_strings(&report, "surname").unwrap()[cox], Some("Swain".to_string()));
    assert_eq!(column_strings(&report, "surname").unwrap()[0], None);
    assert_eq!(column_strings(&report, CREW_LETTER).unwrap()[cox], Some("A".to_string()));
}

#[test]
fn every_view_renders() {
    let options = ViewOptions::default();
    for view in ReportView::ALL {
        let frame = render_view(view, &entries(), &members(), &options).unwrap();
        assert!(frame.width() > 0, "{view} has no columns");
    }
}

proptest! {
    #[test]
    fn split_name_keeps_everything_after_the_first_space(
        first in "[A-Za-z-]{1,12}",
        surname in "[A-Za-z]{1,10}( [A-Za-z]{1,10})?",
    ) {
        let (got_first, got_surname) = split_name(&format!("{first} {surname}"));
        prop_assert_eq!(got_first, first);
        prop_assert_eq!(got_surname, Some(surname));
    }

    #[test]
    fn filled_seats_sum_declared_counts(seats in prop::collection::vec(0i64..9, 1..12)) {
        let height = seats.len();
        let entries = DataFrame::new(vec![
            string_column(BOAT_TYPE, vec![Some("Open 4+".to_string()); height]),
            Series::new(SEATS.into(), seats.clone()).into_column(),
        ])
        .unwrap();
        let counts = seat_counts(&entries).unwrap();
        prop_assert_eq!(counts.filled, seats.iter().sum::<i64>());
        prop_assert_eq!(counts.total, 4 * height as i64);
    }
}
