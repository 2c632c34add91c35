//! Named report views and their export file names.

use std::fmt;

use polars::prelude::DataFrame;
use regatta_model::Result;

use crate::clubs::{club_rowers_report, clubs_report};
use crate::crews::{CrewCell, crews_report};
use crate::entries::{EntriesFilter, entries_report};
use crate::events::events_report;
use crate::rowers::{RowerSort, cofd_report, rowers_report};

/// Every report the pipeline can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportView {
    Entries,
    Crews,
    Events,
    Clubs,
    ClubRowers,
    Rowers,
    Cofd,
}

impl ReportView {
    pub const ALL: [ReportView; 7] = [
        Self::Entries,
        Self::Crews,
        Self::Events,
        Self::Clubs,
        Self::ClubRowers,
        Self::Rowers,
        Self::Cofd,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Entries => "Entries",
            Self::Crews => "Crew List",
            Self::Events => "Events",
            Self::Clubs => "Clubs",
            Self::ClubRowers => "Club Rowers",
            Self::Rowers => "Rowers",
            Self::Cofd => "CoFD",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Entries => "one row per crew with seat and cox checks",
            Self::Crews => "crew list with members by seat position",
            Self::Events => "entries per boat type",
            Self::Clubs => "entries, rowers and seats per club",
            Self::ClubRowers => "distinct rowers with their club",
            Self::Rowers => "every crew each rower appears in",
            Self::Cofd => "one row per member with split names",
        }
    }

    /// CSV file name, e.g. `crew list.csv`.
    pub fn file_name(self) -> String {
        format!("{}.csv", self.title().to_lowercase())
    }
}

impl fmt::Display for ReportView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Display options shared by the views.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub entries_filter: EntriesFilter,
    pub crew_cell: CrewCell,
    pub rower_sort: RowerSort,
    /// Restrict club-aware views to one club.
    pub club: Option<String>,
}

/// Render one view from the canonical tables.
pub fn render_view(
    view: ReportView,
    entries: &DataFrame,
    members: &DataFrame,
    options: &ViewOptions,
) -> Result<DataFrame> {
    let club = options.club.as_deref();
    match view {
        ReportView::Entries => entries_report(entries, options.entries_filter),
        ReportView::Crews => crews_report(entries, members, options.crew_cell, club),
        ReportView::Events => events_report(entries),
        ReportView::Clubs => clubs_report(entries, members),
        ReportView::ClubRowers => club_rowers_report(members, club),
        ReportView::Rowers => rowers_report(members, club, options.rower_sort),
        ReportView::Cofd => cofd_report(members),
    }
}
