//! Aggregate views over the canonical Entries and Members tables.
//!
//! Every function here is a read-only derivation: it borrows the canonical
//! tables and returns a new frame or count.

pub mod clubs;
pub mod crews;
pub mod entries;
pub mod events;
pub mod rowers;
mod sort;
pub mod stats;
pub mod views;

pub use clubs::{club_list, club_rowers_report, clubs_report};
pub use crews::{CrewCell, crews_report};
pub use entries::{EntriesFilter, entries_report};
pub use events::events_report;
pub use rowers::{RowerSort, cofd_report, rowers_report, split_name};
pub use stats::{entry_count, entry_stats, seat_counts, unique_rower_count};
pub use views::{ReportView, ViewOptions, render_view};
