//! Crew-roster pivot: one row per crew, one column per seat.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use polars::prelude::{Column, DataFrame};
use regatta_common::{column_strings, string_column};
use regatta_model::columns::{
    BOAT_TYPE, CLUB, COX_POSITION, CREW_ID, CREW_LETTER, CREW_NAME, ENTERING_CLUB,
    MEMBERSHIP_NUMBER, NAME, POSITION,
};
use regatta_model::{CrewKey, Result};
use tracing::debug;

/// Member field shown in each seat cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CrewCell {
    #[default]
    Name,
    MembershipNumber,
}

impl CrewCell {
    fn column(self) -> &'static str {
        match self {
            Self::Name => NAME,
            Self::MembershipNumber => MEMBERSHIP_NUMBER,
        }
    }
}

/// Seat column ordering: numbered seats ascending, then anything
/// unexpected, then the cox.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Seat {
    Numbered(u32),
    Other(String),
    Cox,
}

impl Seat {
    fn parse(position: &str) -> Self {
        if position == COX_POSITION {
            return Self::Cox;
        }
        match position.parse::<u32>() {
            Ok(n) => Self::Numbered(n),
            Err(_) => Self::Other(position.to_string()),
        }
    }

    fn header(&self) -> String {
        match self {
            Self::Numbered(n) => n.to_string(),
            Self::Other(text) => text.clone(),
            Self::Cox => COX_POSITION.to_string(),
        }
    }
}

#[derive(Debug, Default)]
struct CrewRow {
    crew_name: String,
    seats: BTreeMap<Seat, String>,
}

fn crew_key(
    ids: &[Option<String>],
    boats: &[Option<String>],
    clubs: &[Option<String>],
    letters: &[Option<String>],
    idx: usize,
) -> CrewKey {
    CrewKey::new(
        ids[idx].clone().unwrap_or_default(),
        boats[idx].clone().unwrap_or_default(),
        clubs[idx].clone().unwrap_or_default(),
        letters[idx].clone().unwrap_or_default(),
    )
}

fn text_column(
    rows: &[(CrewKey, CrewRow)],
    name: &str,
    cell: impl Fn(&(CrewKey, CrewRow)) -> String,
) -> Column {
    string_column(name, rows.iter().map(|row| Some(cell(row))).collect())
}

/// Pivot Members into one row per crew.
///
/// Crews are keyed by [`CrewKey`] with the member's entering club, so a
/// composite crew stays on one row. Crews in Entries with nobody assigned
/// are added back through an anti-join on the same key, with blank seats.
/// Rows are sorted by boat type then crew name; cells are blank strings
/// where a seat is empty.
pub fn crews_report(
    entries: &DataFrame,
    members: &DataFrame,
    cell: CrewCell,
    club: Option<&str>,
) -> Result<DataFrame> {
    let ids = column_strings(members, CREW_ID)?;
    let boats = column_strings(members, BOAT_TYPE)?;
    let clubs = column_strings(members, ENTERING_CLUB)?;
    let letters = column_strings(members, CREW_LETTER)?;
    let names = column_strings(members, CREW_NAME)?;
    let positions = column_strings(members, POSITION)?;
    let values = column_strings(members, cell.column())?;

    let mut crews: HashMap<CrewKey, CrewRow> = HashMap::new();
    let mut seat_columns = BTreeSet::new();
    for idx in 0..members.height() {
        let key = crew_key(&ids, &boats, &clubs, &letters, idx);
        let row = crews.entry(key).or_default();
        if row.crew_name.is_empty() {
            row.crew_name = names[idx].clone().unwrap_or_default();
        }
        let Some(position) = positions[idx].as_deref() else {
            continue;
        };
        let seat = Seat::parse(position);
        seat_columns.insert(seat.clone());
        row.seats
            .entry(seat)
            .or_insert_with(|| values[idx].clone().unwrap_or_default());
    }

    let entry_ids = column_strings(entries, CREW_ID)?;
    let entry_boats = column_strings(entries, BOAT_TYPE)?;
    let entry_clubs = column_strings(entries, CLUB)?;
    let entry_letters = column_strings(entries, CREW_LETTER)?;
    let entry_names = column_strings(entries, CREW_NAME)?;
    let mut empty_crews = 0usize;
    for idx in 0..entries.height() {
        let key = crew_key(&entry_ids, &entry_boats, &entry_clubs, &entry_letters, idx);
        if crews.contains_key(&key) {
            continue;
        }
        empty_crews += 1;
        crews.insert(
            key,
            CrewRow {
                crew_name: entry_names[idx].clone().unwrap_or_default(),
                seats: BTreeMap::new(),
            },
        );
    }
    debug!(crews = crews.len(), empty_crews, "pivoted crew list");

    let mut rows: Vec<(CrewKey, CrewRow)> = crews
        .into_iter()
        .filter(|(key, _)| club.is_none_or(|club| key.club == club))
        .collect();
    rows.sort_by(|(a, a_row), (b, b_row)| {
        (&a.boat_type, &a_row.crew_name, a)
            .cmp(&(&b.boat_type, &b_row.crew_name, b))
    });

    let mut columns = vec![
        text_column(&rows, CREW_ID, |(key, _)| key.crew_id.clone()),
        text_column(&rows, BOAT_TYPE, |(key, _)| key.boat_type.clone()),
        text_column(&rows, CLUB, |(key, _)| key.club.clone()),
        text_column(&rows, CREW_LETTER, |(key, _)| key.crew_letter.clone()),
        text_column(&rows, CREW_NAME, |(_, row)| row.crew_name.clone()),
    ];
    for seat in &seat_columns {
        columns.push(text_column(&rows, &seat.header(), |(_, row)| {
            row.seats.get(seat).cloned().unwrap_or_default()
        }));
    }
    Ok(DataFrame::new(columns)?)
}
