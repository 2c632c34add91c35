//! Reconciliation pipeline for regatta exports.
//!
//! Turns the raw teams, team members and (optionally) community members
//! exports into two canonical tables: Entries, one row per crew, and
//! Members, one row per seat including coxes.

pub mod booleans;
pub mod composite;
pub mod cox;
pub mod frame;
pub mod membership;
pub mod normalize;
pub mod pipeline;
pub mod position;
pub mod prepare;

pub use booleans::{coerce_boolean_columns, coerce_flag};
pub use composite::{resolve_entry_composites, resolve_member_composites, split_composite};
pub use cox::{RosterIndex, extract_coxes, reconcile_coxes, unique_rowers};
pub use frame::{dedupe_first, with_replaced};
pub use membership::{normalize_membership_column, normalize_membership_number};
pub use normalize::{normalize_columns, select_canonical};
pub use pipeline::{CanonicalTables, RawReports, run_pipeline};
pub use position::{assign_positions, with_positions};
pub use prepare::{prepare_entries, prepare_members, prepare_roster};
